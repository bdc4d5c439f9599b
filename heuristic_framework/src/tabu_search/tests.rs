use std::fmt;
use std::sync::Arc;
use std::time as stdtime;

use objective_framework::{EvaluatedSolution, ObjectiveValue};

use super::{
    Reversible, TabuList, TabuNeighborhood, TabuSearch, TabuSearchParameters, TerminationReason,
};
use crate::Evaluator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

impl Reversible for Step {
    fn reverse(&self) -> Step {
        match self {
            Step::Up => Step::Down,
            Step::Down => Step::Up,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Up => write!(f, "up"),
            Step::Down => write!(f, "down"),
        }
    }
}

/// integers in 0..=upper, one step up or down
struct Line {
    upper: i32,
}

impl TabuNeighborhood<i32, Step> for Line {
    fn neighbors_of<'a>(
        &'a self,
        solution: &'a i32,
        tabu_list: &'a TabuList<Step>,
    ) -> Box<dyn Iterator<Item = (Step, i32)> + 'a> {
        Box::new(
            [(Step::Up, *solution + 1), (Step::Down, *solution - 1)]
                .into_iter()
                .filter(move |(_, x)| (0..=self.upper).contains(x))
                .filter(move |(step, _)| !tabu_list.is_tabu(step)),
        )
    }
}

/// cost given as a table, `None` is infeasible
struct Table {
    costs: Vec<Option<f64>>,
    calls: usize,
}

impl Evaluator<i32> for Table {
    fn evaluate(&mut self, solution: i32) -> EvaluatedSolution<i32> {
        self.calls += 1;
        let value = match self.costs.get(solution as usize).copied().flatten() {
            Some(cost) => ObjectiveValue::from_cost(cost),
            None => ObjectiveValue::infeasible(),
        };
        EvaluatedSolution::new(solution, value)
    }
}

fn parameters(max_iterations: usize, stagnation_window: usize) -> TabuSearchParameters {
    TabuSearchParameters {
        max_iterations,
        time_limit: None,
        stagnation_window,
        tabu_tenure: None,
    }
}

fn solver(upper: i32, parameters: TabuSearchParameters) -> TabuSearch<i32, Step> {
    TabuSearch::initialize(Arc::new(Line { upper }), parameters)
}

#[test]
fn walks_through_worse_solution_to_better_one() {
    // ARRANGE
    let mut table = Table {
        costs: vec![Some(5.0), Some(6.0), Some(1.0), Some(3.0)],
        calls: 0,
    };
    let initial = table.evaluate(0);

    // ACT
    let result = solver(3, parameters(10, 3)).solve(initial, &mut table);

    // ASSERT
    assert_eq!(*result.best.solution(), 2);
    assert_eq!(result.best.objective_value().total(), 1.0);
    assert_eq!(result.trace[0].applied_move, Step::Up);
    assert_eq!(result.trace[0].objective_value.total(), 6.0);
    assert_eq!(result.trace[0].best_objective_value.total(), 5.0);
    assert_eq!(result.trace[1].best_objective_value.total(), 1.0);
}

#[test]
fn stops_when_no_admissible_neighbor_is_left() {
    let mut table = Table {
        costs: vec![Some(1.0), Some(2.0), Some(3.0)],
        calls: 0,
    };
    let initial = table.evaluate(0);

    let result = solver(2, parameters(100, 0)).solve(initial, &mut table);

    // 0 -> 1 -> 2, afterwards "down" is tabu and "up" leaves the line
    assert_eq!(result.termination, TerminationReason::NoAdmissibleNeighbor);
    assert_eq!(result.iterations(), 2);
    assert_eq!(*result.best.solution(), 0);
}

#[test]
fn reverse_of_accepted_move_is_never_candidate_in_next_iteration() {
    let mut table = Table {
        costs: vec![Some(4.0); 20],
        calls: 0,
    };
    let initial = table.evaluate(10);

    let result = solver(19, parameters(8, 0)).solve(initial, &mut table);

    for (previous, next) in result.trace.iter().zip(result.trace.iter().skip(1)) {
        assert!(next
            .candidates
            .iter()
            .all(|(mv, _)| *mv != previous.applied_move.reverse()));
    }
}

#[test]
fn stagnation_stops_after_window_without_improvement() {
    // ARRANGE
    let mut table = Table {
        costs: vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)],
        calls: 0,
    };
    let initial = table.evaluate(0);

    // ACT
    let result = solver(5, parameters(15, 3)).solve(initial, &mut table);

    // ASSERT
    assert_eq!(result.termination, TerminationReason::Stagnation);
    assert_eq!(result.iterations(), 3);
    assert_eq!(*result.best.solution(), 0);
}

#[test]
fn iteration_limit_counts_initial_solution() {
    let mut table = Table {
        costs: vec![Some(1.0); 100],
        calls: 0,
    };
    let initial = table.evaluate(50);

    let result = solver(99, parameters(5, 0)).solve(initial, &mut table);

    assert_eq!(result.termination, TerminationReason::IterationLimit);
    assert_eq!(result.iterations(), 4);
}

#[test]
fn terminates_under_all_infeasible_evaluator() {
    let mut table = Table {
        costs: vec![None; 50],
        calls: 0,
    };
    let initial = table.evaluate(25);

    let result = solver(49, parameters(15, 3)).solve(initial, &mut table);

    assert!(!result.best.objective_value().is_feasible());
    assert!(result.iterations() < 15);
    assert!(result
        .trace
        .iter()
        .all(|record| !record.objective_value.is_feasible()));
}

#[test]
fn elapsed_time_limit_stops_before_first_iteration() {
    let mut table = Table {
        costs: vec![Some(1.0); 10],
        calls: 0,
    };
    let initial = table.evaluate(5);
    let mut parameters = parameters(15, 3);
    parameters.time_limit = Some(stdtime::Duration::ZERO);

    let result = solver(9, parameters).solve(initial, &mut table);

    assert_eq!(result.termination, TerminationReason::TimeLimit);
    assert_eq!(result.iterations(), 0);
    assert_eq!(table.calls, 1);
}

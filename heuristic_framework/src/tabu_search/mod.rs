pub mod tabu_list;
#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time as stdtime;

use objective_framework::{EvaluatedSolution, ObjectiveValue};

use crate::Evaluator;
pub use tabu_list::TabuList;

/// A move label that can be undone. The reverse of an accepted move is what becomes tabu.
pub trait Reversible: Clone + PartialEq + fmt::Display {
    fn reverse(&self) -> Self;
}

/// Produces, in a fixed order, every solution reachable from `solution` by exactly one admissible
/// move whose label is not tabu.
pub trait TabuNeighborhood<S, M>: Send + Sync {
    fn neighbors_of<'a>(
        &'a self,
        solution: &'a S,
        tabu_list: &'a TabuList<M>,
    ) -> Box<dyn Iterator<Item = (M, S)> + 'a>;
}

#[derive(Debug, Clone)]
pub struct TabuSearchParameters {
    pub max_iterations: usize, // the initial solution counts as iteration 0
    pub time_limit: Option<stdtime::Duration>,
    pub stagnation_window: usize, // 0 disables the stagnation criterion
    pub tabu_tenure: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    IterationLimit,
    TimeLimit,
    Stagnation,
    NoAdmissibleNeighbor,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminationReason::IterationLimit => "iteration limit reached",
            TerminationReason::TimeLimit => "time limit reached",
            TerminationReason::Stagnation => "stagnation",
            TerminationReason::NoAdmissibleNeighbor => "no admissible neighbor",
        };
        write!(f, "{}", text)
    }
}

/// What happened in one tabu iteration.
#[derive(Debug, Clone)]
pub struct IterationRecord<S, M> {
    pub iteration: usize,
    pub solution: S,
    pub objective_value: ObjectiveValue,
    pub applied_move: M,
    pub candidates: Vec<(M, ObjectiveValue)>,
    pub best_objective_value: ObjectiveValue,
}

pub struct TabuSearchResult<S, M> {
    pub best: EvaluatedSolution<S>,
    pub trace: Vec<IterationRecord<S, M>>,
    pub termination: TerminationReason,
}

impl<S, M> TabuSearchResult<S, M> {
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }
}

/// Tabu search: in every iteration the best non-tabu, not yet visited neighbor is accepted, even
/// if it is worse than the current solution, and the reverse of its move becomes tabu.
pub struct TabuSearch<S, M> {
    neighborhood: Arc<dyn TabuNeighborhood<S, M>>,
    parameters: TabuSearchParameters,
    start_time: Option<stdtime::Instant>,
}

impl<S, M> TabuSearch<S, M>
where
    S: Clone + Eq + Hash,
    M: Reversible,
{
    pub fn initialize(
        neighborhood: Arc<dyn TabuNeighborhood<S, M>>,
        parameters: TabuSearchParameters,
    ) -> TabuSearch<S, M> {
        TabuSearch {
            neighborhood,
            parameters,
            start_time: None,
        }
    }

    /// The time limit is measured from this instant instead of from the start of `solve`.
    pub fn with_start_time(mut self, start_time: stdtime::Instant) -> TabuSearch<S, M> {
        self.start_time = Some(start_time);
        self
    }

    pub fn solve(
        &self,
        initial_solution: EvaluatedSolution<S>,
        evaluator: &mut impl Evaluator<S>,
    ) -> TabuSearchResult<S, M> {
        let start_time = self.start_time.unwrap_or_else(stdtime::Instant::now);
        let window = self.parameters.stagnation_window;

        let mut tabu_list = TabuList::new(self.parameters.tabu_tenure);
        let mut visited: HashSet<S> = HashSet::new();
        visited.insert(initial_solution.solution().clone());
        let mut accepted_values: Vec<ObjectiveValue> = Vec::new();
        let mut trace = Vec::new();
        let mut best = initial_solution.clone();
        let mut current = initial_solution;
        let mut iteration = 1;

        let termination = loop {
            if iteration >= self.parameters.max_iterations {
                break TerminationReason::IterationLimit;
            }
            if let Some(time_limit) = self.parameters.time_limit {
                if start_time.elapsed() >= time_limit {
                    break TerminationReason::TimeLimit;
                }
            }

            let mut seen: HashSet<S> = HashSet::new();
            let candidates: Vec<(M, S)> = self
                .neighborhood
                .neighbors_of(current.solution(), &tabu_list)
                .filter(|(_, neighbor)| {
                    !visited.contains(neighbor) && seen.insert(neighbor.clone())
                })
                .collect();
            if candidates.is_empty() {
                tracing::info!(iteration, "no admissible neighbor left");
                break TerminationReason::NoAdmissibleNeighbor;
            }

            let mut evaluated: Vec<(M, EvaluatedSolution<S>)> = candidates
                .into_iter()
                .map(|(mv, neighbor)| (mv, evaluator.evaluate(neighbor)))
                .collect();
            let candidate_values: Vec<(M, ObjectiveValue)> = evaluated
                .iter()
                .map(|(mv, neighbor)| (mv.clone(), neighbor.objective_value().clone()))
                .collect();

            // min_by returns the first of several minima
            let accepted_position = evaluated
                .iter()
                .enumerate()
                .min_by(|(_, (_, a)), (_, (_, b))| a.cmp(b))
                .map(|(position, _)| position)
                .unwrap_or(0);
            let (accepted_move, accepted) = evaluated.swap_remove(accepted_position);

            tabu_list.insert(accepted_move.reverse());
            visited.insert(accepted.solution().clone());

            tracing::info!(
                iteration,
                candidates = candidate_values.len(),
                "accepted {}: {}",
                accepted_move,
                accepted
                    .objective_value()
                    .print_with_comparison(current.objective_value()),
            );

            if accepted.objective_value() < best.objective_value() {
                best = accepted.clone();
            }
            tracing::info!(
                iteration,
                "best: {}, elapsed time: {:0.2}sec",
                best.objective_value(),
                start_time.elapsed().as_secs_f32()
            );

            accepted_values.push(accepted.objective_value().clone());
            trace.push(IterationRecord {
                iteration,
                solution: accepted.solution().clone(),
                objective_value: accepted.objective_value().clone(),
                applied_move: accepted_move,
                candidates: candidate_values,
                best_objective_value: best.objective_value().clone(),
            });
            current = accepted;

            if window > 0
                && iteration >= window
                && accepted_values
                    .iter()
                    .rev()
                    .take(window)
                    .all(|value| value > best.objective_value())
            {
                tracing::info!(iteration, window, "no improvement within the stagnation window");
                break TerminationReason::Stagnation;
            }
            iteration += 1;
        };

        tracing::info!(
            iterations = trace.len(),
            "tabu search stopped ({}), best: {}",
            termination,
            best.objective_value()
        );
        TabuSearchResult {
            best,
            trace,
            termination,
        }
    }
}

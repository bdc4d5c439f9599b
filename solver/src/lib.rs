pub mod coverage_oracle;
pub mod error;
pub mod greedy;
pub mod neighborhood;
pub mod oracle;
pub mod result_extraction;
pub mod tabu_search;
pub mod test_oracle;

use std::sync::Arc;
use std::time as stdtime;

use heuristic_framework::tabu_search::{IterationRecord, TerminationReason};
use model::config::Config;
use model::FleetProblem;
use objective_framework::EvaluatedSolution;
use solution::Configuration;

use error::SearchError;
use greedy::GreedyConstruction;
use neighborhood::moves::FleetMove;
use oracle::{Oracle, OracleEvaluator};
use result_extraction::extract_result;
use tabu_search::FleetTabuSearch;

pub type Solution = EvaluatedSolution<Configuration>;

pub struct FleetSolution {
    pub constructed: Solution,
    pub solution: Solution,
    pub assignment: serde_json::Value, // the oracle's variable assignment of the final evaluation
    pub trace: Vec<IterationRecord<Configuration, FleetMove>>,
    pub termination: TerminationReason,
    pub oracle_evaluations: usize,
}

/// Construction, tabu search and result extraction on the given oracle. The time budget of the
/// config is measured from `start_time`.
pub fn solve(
    problem: Arc<FleetProblem>,
    config: &Config,
    oracle: &mut dyn Oracle,
    start_time: stdtime::Instant,
) -> Result<FleetSolution, SearchError> {
    let mut evaluator = OracleEvaluator::new(oracle);

    let constructed = GreedyConstruction::initialize(problem.clone()).solve(&mut evaluator);
    tracing::info!(
        objective_value = %constructed.objective_value(),
        evaluations = evaluator.evaluations(),
        "construction computed initial configuration (elapsed time: {:0.2}sec)",
        start_time.elapsed().as_secs_f32()
    );

    let result = FleetTabuSearch::initialize(problem, config, start_time)
        .solve(constructed.clone(), &mut evaluator);
    let oracle_evaluations = evaluator.evaluations() + 1;

    let (solution, assignment) = extract_result(result.best, oracle)?;
    tracing::info!(
        objective_value = %solution.objective_value(),
        oracle_evaluations,
        "search finished: {}",
        solution.solution()
    );

    Ok(FleetSolution {
        constructed,
        solution,
        assignment,
        trace: result.trace,
        termination: result.termination,
        oracle_evaluations,
    })
}

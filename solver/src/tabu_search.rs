use std::sync::Arc;
use std::time as stdtime;

use heuristic_framework::tabu_search::{TabuSearch, TabuSearchParameters, TabuSearchResult};
use heuristic_framework::Evaluator;
use model::config::Config;
use model::FleetProblem;
use objective_framework::EvaluatedSolution;
use solution::Configuration;

use crate::neighborhood::{moves::FleetMove, FleetNeighborhood};

pub type FleetTabuSearchResult = TabuSearchResult<Configuration, FleetMove>;

/// Tabu search over fleet configurations with the parameters of the config.
pub struct FleetTabuSearch {
    tabu_search: TabuSearch<Configuration, FleetMove>,
}

impl FleetTabuSearch {
    /// The time budget is measured from `start_time`.
    pub fn initialize(
        problem: Arc<FleetProblem>,
        config: &Config,
        start_time: stdtime::Instant,
    ) -> FleetTabuSearch {
        let parameters = TabuSearchParameters {
            max_iterations: config.tabu_search.max_iterations,
            time_limit: Some(config.tabu_search.time_budget),
            stagnation_window: config.tabu_search.stagnation_window,
            tabu_tenure: config.tabu_search.tabu_tenure,
        };
        FleetTabuSearch {
            tabu_search: TabuSearch::initialize(
                Arc::new(FleetNeighborhood::new(problem)),
                parameters,
            )
            .with_start_time(start_time),
        }
    }

    pub fn solve(
        &self,
        initial: EvaluatedSolution<Configuration>,
        evaluator: &mut impl Evaluator<Configuration>,
    ) -> FleetTabuSearchResult {
        self.tabu_search.solve(initial, evaluator)
    }
}

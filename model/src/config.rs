use std::time::Duration;

pub struct Config {
    pub tabu_search: ConfigTabuSearch,
}

pub struct ConfigTabuSearch {
    pub max_iterations: usize, // the construction result counts as iteration 0
    pub time_budget: Duration, // measured from the start of the run, construction included
    pub stagnation_window: usize,
    pub tabu_tenure: Option<usize>, // None means that tabu moves are never evicted
}

impl Default for ConfigTabuSearch {
    fn default() -> Self {
        ConfigTabuSearch {
            max_iterations: 15,
            time_budget: Duration::from_secs(3600),
            stagnation_window: 3,
            tabu_tenure: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tabu_search: ConfigTabuSearch::default(),
        }
    }
}

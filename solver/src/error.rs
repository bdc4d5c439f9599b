use std::{error::Error, fmt};

use objective_framework::ObjectiveValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The best configuration was feasible during the search but the final evaluation declared
    /// it infeasible.
    InfeasibleRegression {
        configuration: String,
        objective_value: ObjectiveValue,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InfeasibleRegression {
                configuration,
                objective_value,
            } => write!(
                f,
                "best configuration ({}) had objective value {} but is infeasible on re-evaluation",
                configuration, objective_value
            ),
        }
    }
}

impl Error for SearchError {}

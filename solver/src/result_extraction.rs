use objective_framework::{EvaluatedSolution, ObjectiveValue};
use solution::Configuration;

use crate::error::SearchError;
use crate::oracle::{Oracle, Outcome};

/// Re-evaluates the best configuration once more and takes the oracle's variable assignment of
/// that run as detailed solution.
pub fn extract_result(
    best: EvaluatedSolution<Configuration>,
    oracle: &mut dyn Oracle,
) -> Result<(EvaluatedSolution<Configuration>, serde_json::Value), SearchError> {
    let outcome = oracle.evaluate(best.solution());
    match outcome {
        Outcome::Infeasible if best.objective_value().is_feasible() => {
            tracing::error!(
                objective_value = %best.objective_value(),
                "best configuration became infeasible on re-evaluation"
            );
            Err(SearchError::InfeasibleRegression {
                configuration: best.solution().to_string(),
                objective_value: best.objective_value().clone(),
            })
        }
        _ => {
            let final_value = ObjectiveValue::from_cost(outcome.cost());
            if final_value != *best.objective_value() {
                tracing::warn!(
                    search = %best.objective_value(),
                    reevaluated = %final_value,
                    "objective value changed on re-evaluation, reporting the final one"
                );
            }
            let assignment = oracle.variable_assignment();
            Ok((
                EvaluatedSolution::new(best.into_solution(), final_value),
                assignment,
            ))
        }
    }
}

use heuristic_framework::Evaluator;
use model::base_types::Cost;
use objective_framework::{EvaluatedSolution, ObjectiveValue};
use solution::Configuration;

/// Raw status of a single optimizer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverStatus {
    Optimal(Cost),
    Infeasible,
    NumericalError,
    TimeLimit,
}

/// Status as seen by the search: everything that is not a finite optimum is infeasible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Optimal(Cost),
    Infeasible,
}

impl Outcome {
    /// +infinity for infeasible
    pub fn cost(&self) -> Cost {
        match self {
            Outcome::Optimal(cost) => *cost,
            Outcome::Infeasible => f64::INFINITY,
        }
    }

    pub fn objective_value(&self) -> ObjectiveValue {
        ObjectiveValue::from_cost(self.cost())
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }
}

/// External optimizer that decides whether a fixed configuration can be operated and at which
/// cost. Calls with the same configuration must give the same result.
pub trait Oracle {
    /// Pins every configuration variable (lower and upper bound) to its value.
    fn set_bounds(&mut self, configuration: &Configuration);

    fn solve(&mut self) -> SolverStatus;

    /// Snapshot of the full variable assignment of the last solve.
    fn variable_assignment(&self) -> serde_json::Value;

    fn evaluate(&mut self, configuration: &Configuration) -> Outcome {
        self.set_bounds(configuration);
        match self.solve() {
            SolverStatus::Optimal(cost) if cost.is_finite() => Outcome::Optimal(cost),
            SolverStatus::Infeasible => Outcome::Infeasible,
            status => {
                tracing::warn!(?status, "oracle failed, configuration is treated as infeasible");
                Outcome::Infeasible
            }
        }
    }
}

/// Exposes an oracle as evaluator of the search and counts the oracle calls.
pub struct OracleEvaluator<'a> {
    oracle: &'a mut dyn Oracle,
    evaluations: usize,
}

impl<'a> OracleEvaluator<'a> {
    pub fn new(oracle: &'a mut dyn Oracle) -> OracleEvaluator<'a> {
        OracleEvaluator {
            oracle,
            evaluations: 0,
        }
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl Evaluator<Configuration> for OracleEvaluator<'_> {
    fn evaluate(&mut self, configuration: Configuration) -> EvaluatedSolution<Configuration> {
        self.evaluations += 1;
        let outcome = self.oracle.evaluate(&configuration);
        EvaluatedSolution::new(configuration, outcome.objective_value())
    }
}

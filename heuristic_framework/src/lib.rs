pub mod tabu_search;

use objective_framework::EvaluatedSolution;

/// Assigns an objective value to a solution. Evaluation may change the evaluator's state (e.g.,
/// an external optimizer holding the last pinned solution), hence `&mut self`.
pub trait Evaluator<S> {
    fn evaluate(&mut self, solution: S) -> EvaluatedSolution<S>;
}

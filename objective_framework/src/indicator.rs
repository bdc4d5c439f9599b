use crate::BaseValue;

/// A named quantity of a solution, e.g., a cost component.
pub trait Indicator<S>: Send + Sync {
    fn evaluate(&self, solution: &S) -> BaseValue;

    fn name(&self) -> String;
}

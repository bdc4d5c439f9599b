pub mod base_value;
pub mod coefficient;
pub mod evaluated_solution;
pub mod indicator;
pub mod level;
pub mod objective;
pub mod objective_value;
#[cfg(test)]
mod tests;

pub use base_value::BaseValue;
pub use coefficient::Coefficient;
pub use evaluated_solution::EvaluatedSolution;
pub use indicator::Indicator;
pub use level::Level;
pub use objective::Objective;
pub use objective_value::ObjectiveValue;

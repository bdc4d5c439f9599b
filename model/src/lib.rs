pub mod base_types;
pub mod bases;
pub mod charter_periods;
pub mod config;
pub mod error;
pub mod json_serialisation;
pub mod problem;
pub mod vessel_types;

pub use error::ModelError;
pub use problem::FleetProblem;

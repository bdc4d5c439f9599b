use std::fmt;

/// Errors raised while turning input data into a `FleetProblem`.
#[derive(Debug)]
pub enum ModelError {
    /// The input does not match the expected json layout.
    Json(serde_json::Error),
    /// The same id is used twice within one set.
    DuplicateId { set: &'static str, id: String },
    /// A capacity entry references a vessel type that is not declared.
    UnknownVesselType { base: String, vessel_type: String },
    /// Bases, vessel types and the planning horizon must not be empty.
    EmptySet(&'static str),
    /// Charter periods need a positive length.
    InvalidCharterPeriodLength,
    /// Costs, distances, speeds and hours must be finite and non-negative.
    InvalidValue { field: String, value: f64 },
    /// The planning horizon or one of the sets exceeds the index range.
    TooLarge(&'static str),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Json(e) => write!(f, "Invalid input json: {}", e),
            ModelError::DuplicateId { set, id } => write!(f, "Duplicate id '{}' in {}", id, set),
            ModelError::UnknownVesselType { base, vessel_type } => write!(
                f,
                "Base '{}' has a capacity for unknown vessel type '{}'",
                base, vessel_type
            ),
            ModelError::EmptySet(set) => write!(f, "The set of {} must not be empty", set),
            ModelError::InvalidCharterPeriodLength => {
                write!(f, "The charter period length must be positive")
            }
            ModelError::InvalidValue { field, value } => {
                write!(f, "Invalid value {} for {}", value, field)
            }
            ModelError::TooLarge(set) => write!(f, "Too many {}", set),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Json(e)
    }
}

use std::{cmp::Ordering, fmt, slice::Iter};

use crate::base_value::BaseValue;

/// The hierarchical objective value of a solution. Levels are compared lexicographically.
#[derive(Debug, Clone)]
pub struct ObjectiveValue {
    objective_vector: Vec<BaseValue>,
}

impl ObjectiveValue {
    pub fn new(objective_vector: Vec<BaseValue>) -> ObjectiveValue {
        ObjectiveValue { objective_vector }
    }

    /// single-level value of a scalar cost (non-finite costs become infeasible)
    pub fn from_cost(cost: f64) -> ObjectiveValue {
        ObjectiveValue::new(vec![BaseValue::from_cost(cost)])
    }

    pub fn infeasible() -> ObjectiveValue {
        ObjectiveValue::new(vec![BaseValue::Maximum])
    }

    pub fn is_feasible(&self) -> bool {
        !self.objective_vector.iter().any(|value| value.is_maximum())
    }

    /// Sum over all levels, +infinity if any level is infeasible.
    pub fn total(&self) -> f64 {
        self.objective_vector.iter().copied().sum::<BaseValue>().as_f64()
    }

    pub fn iter(&self) -> Iter<BaseValue> {
        self.objective_vector.iter()
    }

    /// Prints all levels and the difference (colored) to the value it is compared with.
    pub fn print_with_comparison(&self, comparison: &ObjectiveValue) -> String {
        self.objective_vector
            .iter()
            .zip(comparison.objective_vector.iter())
            .map(|(value, other)| format!("{} {}", value, value.print_difference(*other)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self.objective_vector.as_slice() {
            [single] => single.to_json(),
            levels => serde_json::Value::Array(levels.iter().map(|v| v.to_json()).collect()),
        }
    }
}

impl Ord for ObjectiveValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.objective_vector
            .iter()
            .zip(other.objective_vector.iter())
            .fold(Ordering::Equal, |acc, (value, other_value)| {
                acc.then_with(|| value.total_cmp(other_value))
            })
    }
}

impl PartialOrd for ObjectiveValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ObjectiveValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ObjectiveValue {}

impl fmt::Display for ObjectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self
            .objective_vector
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", levels.join(" | "))
    }
}

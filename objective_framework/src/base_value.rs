use std::{cmp::Ordering, fmt, iter::Sum, ops::Add};

/// A single value of an indicator or of a hierarchy level. `Maximum` stands for +infinity, i.e.,
/// an infeasible configuration, and is larger than every float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseValue {
    Float(f64),
    Maximum,
}

impl BaseValue {
    /// Non-finite floats are treated as `Maximum`.
    pub fn from_cost(cost: f64) -> BaseValue {
        if cost.is_finite() {
            BaseValue::Float(cost)
        } else {
            BaseValue::Maximum
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            BaseValue::Float(f) => f,
            BaseValue::Maximum => f64::INFINITY,
        }
    }

    pub fn is_maximum(self) -> bool {
        matches!(self, BaseValue::Maximum)
    }

    /// total order: floats by value, `Maximum` above all floats
    pub fn total_cmp(&self, other: &BaseValue) -> Ordering {
        match (self, other) {
            (BaseValue::Float(a), BaseValue::Float(b)) => a.total_cmp(b),
            (BaseValue::Float(_), BaseValue::Maximum) => Ordering::Less,
            (BaseValue::Maximum, BaseValue::Float(_)) => Ordering::Greater,
            (BaseValue::Maximum, BaseValue::Maximum) => Ordering::Equal,
        }
    }

    pub fn print_difference(self, other: BaseValue) -> String {
        match (self, other) {
            (BaseValue::Float(a), BaseValue::Float(b)) => {
                if a > b {
                    format!("(\x1b[0;31m+{:2.1}\x1b[0m)", a - b)
                } else if a < b {
                    format!("(\x1b[0;32m-{:2.1}\x1b[0m)", b - a)
                } else {
                    String::new()
                }
            }
            (BaseValue::Maximum, BaseValue::Float(_)) => "(\x1b[0;31minfeasible\x1b[0m)".to_string(),
            (BaseValue::Float(_), BaseValue::Maximum) => "(\x1b[0;32mfeasible\x1b[0m)".to_string(),
            (BaseValue::Maximum, BaseValue::Maximum) => String::new(),
        }
    }
}

impl Add for BaseValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (BaseValue::Float(a), BaseValue::Float(b)) => BaseValue::from_cost(a + b),
            _ => BaseValue::Maximum,
        }
    }
}

impl Sum<Self> for BaseValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BaseValue::Float(0.0), |a, b| a + b)
    }
}

impl fmt::Display for BaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseValue::Float(c) => write!(f, "{:.2}", c),
            BaseValue::Maximum => write!(f, "INF"),
        }
    }
}

impl BaseValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            BaseValue::Float(f) => serde_json::json!(f),
            BaseValue::Maximum => serde_json::json!("infeasible"),
        }
    }
}

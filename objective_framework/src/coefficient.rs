use std::{fmt, ops::Mul};

use super::base_value::BaseValue;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Coefficient {
    Integer(i32),
    Float(f64),
}

impl Coefficient {
    pub fn is_one(&self) -> bool {
        match self {
            Coefficient::Integer(i) => *i == 1,
            Coefficient::Float(f) => *f == 1.0,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Coefficient::Integer(i) => i as f64,
            Coefficient::Float(f) => f,
        }
    }
}

impl Mul<BaseValue> for Coefficient {
    type Output = BaseValue;

    fn mul(self, other: BaseValue) -> BaseValue {
        match other {
            BaseValue::Float(b) => BaseValue::from_cost(self.as_f64() * b),
            BaseValue::Maximum => BaseValue::Maximum,
        }
    }
}

// impl Mul<BaseValue> for &Coefficient, therefore we can use '*' even for references.
impl Mul<BaseValue> for &Coefficient {
    type Output = BaseValue;
    fn mul(self, other: BaseValue) -> BaseValue {
        (*self).mul(other)
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Integer(i) => write!(f, "{}", i),
            Coefficient::Float(fl) => write!(f, "{}", fl),
        }
    }
}

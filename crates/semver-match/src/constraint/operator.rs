//! Operator types for version constraints

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidFormat;

/// Comparison operators a [`Comparison`](super::Comparison) node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Equal (==)
    Equal,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Equal => "==",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["<", "<=", ">", ">=", "=="]
    }

    /// Decide a match from `bound.compare(target)`
    ///
    /// The bound is the left operand, so `<` holds when the bound is greater than
    /// the target.
    pub fn test(&self, bound_to_target: Ordering) -> bool {
        match self {
            Operator::LessThan => bound_to_target == Ordering::Greater,
            Operator::LessThanOrEqual => bound_to_target != Ordering::Less,
            Operator::GreaterThan => bound_to_target == Ordering::Less,
            Operator::GreaterThanOrEqual => bound_to_target != Ordering::Greater,
            Operator::Equal => bound_to_target == Ordering::Equal,
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "==" => Ok(Operator::Equal),
            _ => Err(InvalidFormat::new(
                s,
                format!(
                    "unknown operator, expected one of: {}",
                    Operator::supported_operators().join(", ")
                ),
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

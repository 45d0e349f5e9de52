//! MatchNoneConstraint - matches no version

use std::fmt;

use super::ConstraintInterface;
use crate::Version;

/// A constraint that matches no version, the value of an empty OR
#[derive(Debug, Clone, Default)]
pub struct MatchNoneConstraint;

impl MatchNoneConstraint {
    pub fn new() -> Self {
        MatchNoneConstraint
    }
}

impl ConstraintInterface for MatchNoneConstraint {
    fn matches(&self, _version: &Version) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn is_match_none(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchNoneConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]")
    }
}

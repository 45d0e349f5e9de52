//! Constraint interface trait

use super::Operator;
use crate::Version;

/// Trait for all nodes of a constraint expression tree
pub trait ConstraintInterface: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if a version satisfies this constraint
    fn matches(&self, version: &Version) -> bool;

    /// Clone this constraint into a boxed trait object
    fn clone_box(&self) -> Box<dyn ConstraintInterface>;

    /// Check if this is a Comparison (single operator and bound)
    fn as_comparison(&self) -> Option<(Operator, &Version)> {
        None
    }

    /// Check if this is a NotConstraint
    fn as_not(&self) -> Option<&dyn ConstraintInterface> {
        None
    }

    /// Check if this is a MatchAllConstraint
    fn is_match_all(&self) -> bool {
        false
    }

    /// Check if this is a MatchNoneConstraint
    fn is_match_none(&self) -> bool {
        false
    }

    /// Check if this is a MultiConstraint
    fn as_multi_constraint(&self) -> Option<(&[Box<dyn ConstraintInterface>], bool)> {
        None
    }
}

impl Clone for Box<dyn ConstraintInterface> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

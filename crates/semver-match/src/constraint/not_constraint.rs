//! NotConstraint - negates another constraint

use std::fmt;

use super::ConstraintInterface;
use crate::Version;

/// Matches exactly the versions the inner constraint rejects
#[derive(Debug, Clone)]
pub struct NotConstraint {
    constraint: Box<dyn ConstraintInterface>,
}

impl NotConstraint {
    pub fn new(constraint: Box<dyn ConstraintInterface>) -> Self {
        NotConstraint { constraint }
    }

    pub fn inner(&self) -> &dyn ConstraintInterface {
        self.constraint.as_ref()
    }
}

impl ConstraintInterface for NotConstraint {
    fn matches(&self, version: &Version) -> bool {
        !self.constraint.matches(version)
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn as_not(&self) -> Option<&dyn ConstraintInterface> {
        Some(self.inner())
    }
}

impl fmt::Display for NotConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{MatchAllConstraint, MatchNoneConstraint};

    #[test]
    fn test_negates_inner() {
        let version = Version::parse("1.0.0").unwrap();
        assert!(!NotConstraint::new(Box::new(MatchAllConstraint::new())).matches(&version));
        assert!(NotConstraint::new(Box::new(MatchNoneConstraint::new())).matches(&version));
    }

    #[test]
    fn test_display() {
        let not = NotConstraint::new(Box::new(MatchAllConstraint::new()));
        assert_eq!(not.to_string(), "!*");
        assert!(not.as_not().is_some_and(|inner| inner.is_match_all()));
    }
}

//! MultiConstraint - compound constraint combining multiple constraints

use std::fmt;

use super::{ConstraintInterface, MatchAllConstraint, MatchNoneConstraint};
use crate::Version;

/// A constraint combining multiple constraints with AND (conjunctive) or OR (disjunctive) logic
#[derive(Debug, Clone)]
pub struct MultiConstraint {
    constraints: Vec<Box<dyn ConstraintInterface>>,
    conjunctive: bool,
}

impl MultiConstraint {
    /// Create a new MultiConstraint
    pub fn new(constraints: Vec<Box<dyn ConstraintInterface>>, conjunctive: bool) -> Self {
        MultiConstraint {
            constraints,
            conjunctive,
        }
    }

    /// Create an AND of the given constraints
    pub fn and(constraints: Vec<Box<dyn ConstraintInterface>>) -> Self {
        Self::new(constraints, true)
    }

    /// Create an OR of the given constraints
    pub fn or(constraints: Vec<Box<dyn ConstraintInterface>>) -> Self {
        Self::new(constraints, false)
    }

    /// Create a constraint without superfluous wrapping
    ///
    /// No constraints give the identity of the connective, a single constraint
    /// is returned as is.
    pub fn create(
        mut constraints: Vec<Box<dyn ConstraintInterface>>,
        conjunctive: bool,
    ) -> Box<dyn ConstraintInterface> {
        match constraints.len() {
            0 if conjunctive => Box::new(MatchAllConstraint::new()),
            0 => Box::new(MatchNoneConstraint::new()),
            1 => constraints.remove(0),
            _ => Box::new(MultiConstraint::new(constraints, conjunctive)),
        }
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Box<dyn ConstraintInterface>] {
        &self.constraints
    }

    /// Check if this is a conjunctive (AND) constraint
    pub fn is_conjunctive(&self) -> bool {
        self.conjunctive
    }

    /// Check if this is a disjunctive (OR) constraint
    pub fn is_disjunctive(&self) -> bool {
        !self.conjunctive
    }
}

impl ConstraintInterface for MultiConstraint {
    fn matches(&self, version: &Version) -> bool {
        if self.conjunctive {
            self.constraints.iter().all(|c| c.matches(version))
        } else {
            self.constraints.iter().any(|c| c.matches(version))
        }
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn as_multi_constraint(&self) -> Option<(&[Box<dyn ConstraintInterface>], bool)> {
        Some((&self.constraints, self.conjunctive))
    }
}

impl fmt::Display for MultiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.conjunctive { " && " } else { " || " };

        write!(f, "(")?;
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", constraint)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::constraint::{Comparison, Operator};

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn comparison(op: Operator, bound: &str) -> Box<dyn ConstraintInterface> {
        Box::new(Comparison::new(op, v(bound)))
    }

    /// Fixed answer that counts how often it was asked
    #[derive(Debug, Clone)]
    struct Counting {
        answer: bool,
        calls: Arc<AtomicUsize>,
    }

    impl ConstraintInterface for Counting {
        fn matches(&self, _version: &Version) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
        }

        fn clone_box(&self) -> Box<dyn ConstraintInterface> {
            Box::new(self.clone())
        }
    }

    impl fmt::Display for Counting {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.answer)
        }
    }

    #[test]
    fn test_multi_constraint_conjunctive() {
        let multi = MultiConstraint::and(vec![
            comparison(Operator::GreaterThanOrEqual, "1.0.0"),
            comparison(Operator::LessThan, "2.0.0"),
        ]);
        assert!(multi.is_conjunctive());
        assert!(!multi.is_disjunctive());
        assert!(multi.matches(&v("1.5.0")));
        assert!(!multi.matches(&v("2.0.0")));
        assert!(!multi.matches(&v("0.9.0")));
        assert_eq!(multi.to_string(), "(>=1.0.0 && <2.0.0)");
    }

    #[test]
    fn test_multi_constraint_disjunctive() {
        let multi = MultiConstraint::or(vec![
            comparison(Operator::Equal, "1.0.0"),
            comparison(Operator::Equal, "2.0.0"),
        ]);
        assert!(!multi.is_conjunctive());
        assert!(multi.is_disjunctive());
        assert!(multi.matches(&v("2.0.0")));
        assert!(!multi.matches(&v("1.5.0")));
        assert_eq!(multi.to_string(), "(==1.0.0 || ==2.0.0)");
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = |answer| -> Box<dyn ConstraintInterface> {
            Box::new(Counting { answer, calls: calls.clone() })
        };

        let multi = MultiConstraint::and(vec![counting(true), counting(false), counting(true)]);
        assert!(!multi.matches(&v("1.0.0")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = |answer| -> Box<dyn ConstraintInterface> {
            Box::new(Counting { answer, calls: calls.clone() })
        };

        let multi = MultiConstraint::or(vec![counting(false), counting(true), counting(false)]);
        assert!(multi.matches(&v("1.0.0")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let multi = MultiConstraint::or(vec![counting(false), counting(false)]);
        assert!(!multi.matches(&v("1.0.0")));
    }

    #[test]
    fn test_empty_multi_constraints() {
        assert!(MultiConstraint::and(vec![]).matches(&v("1.0.0")));
        assert!(!MultiConstraint::or(vec![]).matches(&v("1.0.0")));
    }

    #[test]
    fn test_create_single_constraint() {
        let result = MultiConstraint::create(vec![comparison(Operator::Equal, "1.0.0")], true);
        // Should return the single constraint, not wrapped in MultiConstraint
        assert!(result.as_comparison().is_some());
        assert_eq!(result.to_string(), "==1.0.0");
    }

    #[test]
    fn test_create_empty() {
        assert!(MultiConstraint::create(vec![], true).is_match_all());
        assert!(MultiConstraint::create(vec![], false).is_match_none());
    }

    #[test]
    fn test_nested_display() {
        let inner = MultiConstraint::or(vec![
            comparison(Operator::LessThan, "1.0"),
            comparison(Operator::GreaterThan, "2.0"),
        ]);
        let outer = MultiConstraint::and(vec![Box::new(inner), comparison(Operator::Equal, "3")]);
        assert_eq!(outer.to_string(), "((<1.0.0 || >2.0.0) && ==3.0.0)");
        assert!(outer.matches(&v("3.0.0")));
        assert!(!outer.matches(&v("1.5.0")));
    }
}

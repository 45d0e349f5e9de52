//! Single operator constraint, e.g. `>=1.2.3`

use std::fmt;
use std::sync::Arc;

use super::{ConstraintInterface, Operator};
use crate::{Comparator, Version, VersionComparator};

/// Compares a version against a fixed bound with one operator
#[derive(Debug, Clone)]
pub struct Comparison {
    operator: Operator,
    version: Version,
    comparator: Arc<dyn VersionComparator>,
}

impl Comparison {
    /// Create a comparison ordered by the default [`Comparator`]
    pub fn new(operator: Operator, version: Version) -> Self {
        Self::with_comparator(operator, version, Arc::new(Comparator))
    }

    /// Create a comparison ordered by the given comparator
    pub fn with_comparator(
        operator: Operator,
        version: Version,
        comparator: Arc<dyn VersionComparator>,
    ) -> Self {
        Comparison {
            operator,
            version,
            comparator,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The bound version
    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl ConstraintInterface for Comparison {
    fn matches(&self, version: &Version) -> bool {
        let cmp = self.comparator.compare_versions(&self.version, version);
        self.operator.test(cmp)
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }

    fn as_comparison(&self) -> Option<(Operator, &Version)> {
        Some((self.operator, &self.version))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

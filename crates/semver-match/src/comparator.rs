//! Version comparison utilities

use std::cmp::Ordering;
use std::fmt;

use crate::constraint::Operator;
use crate::error::Result;
use crate::Version;

/// Strategy used to order versions
///
/// Constraint evaluation goes through this trait rather than [`Version::compare`],
/// so a parser can be handed a different ordering.
pub trait VersionComparator: fmt::Debug + Send + Sync {
    /// Compare two versions
    fn compare_versions(&self, v1: &Version, v2: &Version) -> Ordering;

    /// Parse and compare two version strings
    fn compare_version_strings(&self, v1: &str, v2: &str) -> Result<Ordering> {
        Ok(self.compare_versions(&Version::parse(v1)?, &Version::parse(v2)?))
    }

    /// Sort versions in place, lowest precedence first
    fn sort_versions(&self, versions: &mut [Version]) {
        versions.sort_by(|a, b| self.compare_versions(a, b));
    }

    /// Sort version strings in place, lowest precedence first
    ///
    /// Fails without touching the slice if any entry does not parse.
    fn sort_version_strings(&self, versions: &mut [String]) -> Result<()> {
        let mut parsed = versions
            .iter()
            .map(|s| Ok((Version::parse(s)?, s.clone())))
            .collect::<Result<Vec<_>>>()?;

        parsed.sort_by(|(a, _), (b, _)| self.compare_versions(a, b));

        for (slot, (_, original)) in versions.iter_mut().zip(parsed) {
            *slot = original;
        }
        Ok(())
    }
}

/// Default comparator, ordering by [`Version::compare`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator;

impl VersionComparator for Comparator {
    fn compare_versions(&self, v1: &Version, v2: &Version) -> Ordering {
        v1.compare(v2)
    }
}

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2 by precedence
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2 by precedence
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare(version1, Operator::Equal, version2).map(|equal| !equal)
    }

    /// Compare version1 to version2 using the given operator
    ///
    /// Reads as `version1 <operator> version2`. Equality is strict precedence
    /// equality; use a constraint string for `=` ranges.
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> Result<bool> {
        let target = Version::parse(version1)?;
        let bound = Version::parse(version2)?;

        Ok(operator.test(Comparator.compare_versions(&bound, &target)))
    }
}

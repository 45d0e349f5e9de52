//! Semver facade providing one-shot version operations

use std::cmp::Ordering;

use crate::{Comparator, ConstraintParser, Version, VersionComparator};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match ConstraintParser::new().parse(constraints) {
            Ok(c) => c.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parsed_constraints = match ConstraintParser::new().parse(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| parsed_constraints.satisfies(v))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Unparseable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = Comparator.compare_versions(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        // Exact, at the precision given
        assert!(Semver::satisfies("1.0.0", "1.0.0"));
        assert!(Semver::satisfies("1.2.3", "1.2"));
        assert!(Semver::satisfies("1.9.9", "1"));
        assert!(Semver::satisfies("1.2.3", "=1.2.3"));

        // Greater than/less than
        assert!(Semver::satisfies("1.0.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<2.0.0"));

        // With a space after the operator
        assert!(Semver::satisfies("1.0.0", ">= 1.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<= 2.0.0"));

        // Leading v
        assert!(Semver::satisfies("v0.1.97", ">=0.1.97"));

        // Tilde
        assert!(Semver::satisfies("2.9.0", "~2.4"));
        assert!(Semver::satisfies("2.4.5", "~2.4"));
        assert!(Semver::satisfies("1.2.3", "~1"));
        assert!(Semver::satisfies("7.0.0", "~1"));
        assert!(Semver::satisfies("1.2.9", "~>1.2.3"));

        // Pre-release sorts below its release
        assert!(Semver::satisfies("1.2.3-beta", "<1.2.3"));
        assert!(Semver::satisfies("1.2.3-beta", "<=1.2.3"));

        // Combined constraints
        assert!(Semver::satisfies("1.2.3", "~1.2.1 >=1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1 =1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1, 1.2.3"));
        assert!(Semver::satisfies("1.2.3", ">=1.2.1 && 1.2.3"));
        assert!(Semver::satisfies("1.2.3", "1.2.3 >=1.2.1"));

        // Negation
        assert!(Semver::satisfies("1.2.4", "!1.2.3"));
        assert!(Semver::satisfies("1.2.3+build", "!==1.2.3"));
    }

    #[test]
    fn test_satisfies_negative() {
        assert!(!Semver::satisfies("1.0.1", "1.0.0"));
        assert!(!Semver::satisfies("2.4.1", "2.3"));
        assert!(!Semver::satisfies("1.1.2", "2"));

        assert!(!Semver::satisfies("0.0.1", ">=1.0.0"));
        assert!(!Semver::satisfies("0.1.0", ">1.0.0"));
        assert!(!Semver::satisfies("3.0.0", "<=2.0.0"));
        assert!(!Semver::satisfies("2.2.9", "<2.0.0"));
        assert!(!Semver::satisfies("v0.1.93", ">=0.1.97"));

        assert!(!Semver::satisfies("3.0.0", "~2.4"));
        assert!(!Semver::satisfies("2.3.9", "~2.4"));
        assert!(!Semver::satisfies("0.2.3", "~1"));
        assert!(!Semver::satisfies("1.3.0", "~>1.2.3"));

        assert!(!Semver::satisfies("1.0.0-beta", "1.0.0"));
        assert!(!Semver::satisfies("1.2.3", "!1.2.3"));
        assert!(!Semver::satisfies("1.2.3", "!==1.2.3"));

        // Invalid input on either side
        assert!(!Semver::satisfies("foo", ">=1.0.0"));
        assert!(!Semver::satisfies("1.0.0", "foo"));
        assert!(!Semver::satisfies("1.0.0", "*"));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0", "1.2", "1.9999.9999", "2.0", "2.1", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "~1.0");
        assert_eq!(result, vec!["1.0", "1.2", "1.9999.9999"]);

        let versions2 = vec!["1.0", "1.1", "2.9999.9999", "3.0", "3.1", "bogus"];
        let result2 = Semver::satisfied_by(&versions2, ">1.0 <3.0");
        assert_eq!(result2, vec!["1.1", "2.9999.9999"]);

        assert!(Semver::satisfied_by(&versions2, "<!1").is_empty());
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0", "2.4.0+1"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4.0-alpha", "2.4.0", "2.4.0+1", "3.2.1"]);

        let sorted2 = Semver::sort(&["1.0", "master", "0.5"]);
        assert_eq!(sorted2, vec!["0.5", "1.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1", "0.1"]);
    }
}

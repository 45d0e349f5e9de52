//! Semantic version parsing, precedence ordering and constraint matching
//!
//! Versions such as `1.2.3-beta+build.5` parse into [`Version`], which orders by
//! precedence. Constraint strings such as `~>1.2` or `>=1.2.3 && <1.3` parse into
//! [`Constraints`], a small boolean expression tree evaluated against versions.
//!
//! ```
//! use semver_match::{ConstraintParser, Version};
//!
//! let constraints = ConstraintParser::new().parse("~>1.2").unwrap();
//! assert_eq!(constraints.to_string(), "(>=1.2.0 && <2.0.0)");
//! assert!(constraints.matches(&Version::parse("1.9.0").unwrap()));
//! assert!(!constraints.matches(&Version::parse("2.0.0").unwrap()));
//! ```

mod comparator;
pub mod constraint;
mod constraint_parser;
mod error;
mod semver;
mod version;

pub use comparator::{Comparator, VersionComparator};
pub use constraint::{
    Comparison, ConstraintInterface, MatchAllConstraint, MatchNoneConstraint, MultiConstraint,
    NotConstraint, Operator,
};
pub use constraint_parser::{
    Connector, ConstraintOperator, ConstraintParser, Constraints, Token, TokenKind,
};
pub use error::{InvalidFormat, Result};
pub use semver::Semver;
pub use version::{Identifier, Version};

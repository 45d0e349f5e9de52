//! Constraint string parsing

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{Comparison, ConstraintInterface, MultiConstraint, NotConstraint, Operator};
use crate::error::{InvalidFormat, Result};
use crate::{Comparator, Version, VersionComparator};

lazy_static! {
    // One constraint per match, optionally preceded by a connector. Both halves of
    // the operator form may be empty, so characters outside the grammar produce
    // empty matches and are stepped over.
    static ref CONSTRAINT_RE: Regex = Regex::new(concat!(
        r"\s?(?P<connector>&&|,| )?\s?",
        r"(?P<constraint>",
        r"(?P<ic>(?P<open>[(\[])",
        r"(?P<lower>[a-zA-Z0-9.\-+*]*),(?P<upper>[a-zA-Z0-9.\-+*]*)",
        r"(?P<close>[)\]]))",
        r"|(?P<oc>(?P<operator>[<>=!~]*)\s?(?P<version>[a-zA-Z0-9.\-+*]*))",
        r")",
    ))
    .unwrap();
}

/// Separator written in front of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `&&`
    And,
    /// `,`
    Comma,
    /// a space beyond the optional surrounding whitespace
    Space,
}

/// What a token holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(v1,v2)` or `[v1,v2]`, recognised but not turned into a constraint
    Interval {
        open: char,
        lower: String,
        upper: String,
        close: char,
    },
    /// An operator (possibly empty) followed by a version literal
    Operator { operator: String, version: String },
}

/// One constraint extracted from a constraint string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub connector: Option<Connector>,
    pub kind: TokenKind,
}

/// Operators accepted in constraint strings, after shorthand normalisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOperator {
    /// `<`, `<=`, `>`, `>=`, `==`
    Base(Operator),
    /// `=` or no operator: every version the literal covers at its precision
    Exact,
    /// `!=`, `<>` or `!`: negation of [`ConstraintOperator::Exact`]
    NotExact,
    /// `!==`: negation of `==`
    NotIdentical,
    /// `~>` or `~`: compatible range
    Compatible,
}

impl ConstraintOperator {
    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintOperator::Base(op) => op.as_str(),
            ConstraintOperator::Exact => "=",
            ConstraintOperator::NotExact => "!=",
            ConstraintOperator::NotIdentical => "!==",
            ConstraintOperator::Compatible => "~>",
        }
    }
}

impl FromStr for ConstraintOperator {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "=" => Ok(ConstraintOperator::Exact),
            "!=" | "<>" | "!" => Ok(ConstraintOperator::NotExact),
            "!==" => Ok(ConstraintOperator::NotIdentical),
            "~" | "~>" => Ok(ConstraintOperator::Compatible),
            _ => s.parse().map(ConstraintOperator::Base),
        }
    }
}

impl fmt::Display for ConstraintOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parser turning constraint strings into expression trees
///
/// Every comparison node it builds orders versions with the parser's comparator.
#[derive(Debug, Clone)]
pub struct ConstraintParser {
    comparator: Arc<dyn VersionComparator>,
}

impl ConstraintParser {
    /// Create a parser using the default [`Comparator`]
    pub fn new() -> Self {
        Self::with_comparator(Arc::new(Comparator))
    }

    /// Create a parser whose constraints compare with `comparator`
    pub fn with_comparator(comparator: Arc<dyn VersionComparator>) -> Self {
        ConstraintParser { comparator }
    }

    /// Split a constraint string into tokens
    pub fn tokenize(constraints: &str) -> Vec<Token> {
        CONSTRAINT_RE
            .captures_iter(constraints)
            .filter_map(|caps| {
                let connector = caps.name("connector").and_then(|m| match m.as_str() {
                    "&&" => Some(Connector::And),
                    "," => Some(Connector::Comma),
                    " " => Some(Connector::Space),
                    _ => None,
                });

                let kind = if caps.name("ic").is_some() {
                    let bracket = |name| {
                        caps.name(name)
                            .and_then(|m| m.as_str().chars().next())
                            .unwrap_or_default()
                    };
                    TokenKind::Interval {
                        open: bracket("open"),
                        lower: caps["lower"].to_string(),
                        upper: caps["upper"].to_string(),
                        close: bracket("close"),
                    }
                } else if caps.name("oc").is_some() {
                    let operator = caps.name("operator").map_or("", |m| m.as_str());
                    let version = caps.name("version").map_or("", |m| m.as_str());
                    // Runs of whitespace leave matches holding neither
                    if operator.is_empty() && version.is_empty() {
                        return None;
                    }
                    TokenKind::Operator {
                        operator: operator.to_string(),
                        version: version.to_string(),
                    }
                } else {
                    return None;
                };

                Some(Token { connector, kind })
            })
            .collect()
    }

    /// Parse a constraint string
    ///
    /// All operator constraints found are combined with AND, whatever connector
    /// separates them. Interval constraints are skipped.
    pub fn parse(&self, constraints: &str) -> Result<Constraints> {
        let mut nodes: Vec<Box<dyn ConstraintInterface>> = Vec::new();

        for token in Self::tokenize(constraints) {
            log::trace!("Constraint token in {:?}: {:?}", constraints, token);

            match token.kind {
                TokenKind::Interval { .. } => {
                    log::debug!("Skipping unsupported interval constraint in {:?}", constraints);
                }
                TokenKind::Operator { operator, version } => {
                    let operator: ConstraintOperator = operator.parse().map_err(|_| {
                        let reason = format!("unknown operator \"{}\"", operator);
                        InvalidFormat::new(constraints, reason)
                    })?;
                    let node = self.build(operator, &version).map_err(|err| {
                        let reason = format!("invalid version \"{}\"", err.input());
                        InvalidFormat::new(constraints, reason)
                    })?;
                    nodes.push(node);
                }
            }
        }

        if nodes.is_empty() {
            log::debug!("No constraint found in {:?}", constraints);
            return Err(InvalidFormat::new(constraints, "no constraint found"));
        }

        Ok(Constraints {
            constraint: MultiConstraint::create(nodes, true),
            pretty_string: constraints.to_string(),
        })
    }

    fn build(
        &self,
        operator: ConstraintOperator,
        version: &str,
    ) -> Result<Box<dyn ConstraintInterface>> {
        match operator {
            ConstraintOperator::Base(op) => Ok(self.comparison(op, Version::parse(version)?)),
            ConstraintOperator::Exact => self.exact_range(version),
            ConstraintOperator::NotExact => Ok(Box::new(NotConstraint::new(
                self.build(ConstraintOperator::Exact, version)?,
            ))),
            ConstraintOperator::NotIdentical => Ok(Box::new(NotConstraint::new(
                self.build(ConstraintOperator::Base(Operator::Equal), version)?,
            ))),
            ConstraintOperator::Compatible => self.compatible_range(version),
        }
    }

    fn comparison(&self, operator: Operator, version: Version) -> Box<dyn ConstraintInterface> {
        Box::new(Comparison::with_comparator(operator, version, self.comparator.clone()))
    }

    /// Missing levels span from 0 up to [`Version::MAX_LEVEL`]
    fn exact_range(&self, version: &str) -> Result<Box<dyn ConstraintInterface>> {
        let lower = Version::parse(version)?;
        let upper = Version::parse_with_default(version, Version::MAX_LEVEL)?;

        Ok(Box::new(MultiConstraint::and(vec![
            self.comparison(Operator::GreaterThanOrEqual, lower),
            self.comparison(Operator::LessThanOrEqual, upper),
        ])))
    }

    /// `~>1` has no upper bound, `~>1.2` stops below 2.0.0, `~>1.2.3` below 1.3.0
    ///
    /// The bump saturates at [`Version::MAX_LEVEL`], so a bound already at the
    /// maximum yields an upper limit at or below the lower one and the range
    /// matches nothing.
    fn compatible_range(&self, version: &str) -> Result<Box<dyn ConstraintInterface>> {
        let lower = Version::parse(version)?;
        if lower.explicit_minor().is_none() {
            return Ok(self.comparison(Operator::GreaterThanOrEqual, lower));
        }

        let mut upper = lower.clone();
        if lower.explicit_patch().is_none() {
            upper.update_major();
        } else {
            upper.update_minor();
        }

        Ok(Box::new(MultiConstraint::and(vec![
            self.comparison(Operator::GreaterThanOrEqual, lower),
            self.comparison(Operator::LessThan, upper),
        ])))
    }
}

impl Default for ConstraintParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed constraint string
#[derive(Debug, Clone)]
pub struct Constraints {
    constraint: Box<dyn ConstraintInterface>,
    pretty_string: String,
}

impl Constraints {
    /// Parse with the default comparator
    pub fn parse(constraints: &str) -> Result<Self> {
        ConstraintParser::new().parse(constraints)
    }

    /// Check if a version satisfies the constraints
    pub fn matches(&self, version: &Version) -> bool {
        self.constraint.matches(version)
    }

    /// Parse the version and check it against the constraints
    ///
    /// A version that does not parse satisfies nothing.
    pub fn satisfies(&self, version: &str) -> bool {
        match Version::parse(version) {
            Ok(v) => self.matches(&v),
            Err(_) => false,
        }
    }

    /// The root of the expression tree
    pub fn root(&self) -> &dyn ConstraintInterface {
        self.constraint.as_ref()
    }

    /// The constraint string as it was given
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constraint)
    }
}

impl FromStr for Constraints {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self> {
        Constraints::parse(s)
    }
}

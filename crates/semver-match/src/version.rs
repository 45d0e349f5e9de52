//! Version model: parsing, precedence and rendering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{InvalidFormat, Result};

lazy_static! {
    // Unanchored: the first digit run starts the version. Anything the pattern
    // cannot consume (a fourth level, a dangling `-` or `+`, an empty identifier)
    // is left behind.
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"(?P<major>[0-9]+)",
        r"(?:\.(?P<minor>[0-9]+)",
        r"(?:\.(?P<patch>[0-9]+)",
        r"(?:-?(?P<pres>[0-9a-zA-Z][0-9a-zA-Z\-]*(?:\.[0-9a-zA-Z\-]+)*))?",
        r"(?:\+(?P<posts>[0-9a-zA-Z\-]+(?:\.[0-9a-zA-Z\-]+)*))?",
        r")?)?",
    ))
    .unwrap();
}

/// One dot-separated element of a pre-release or post-release sequence
#[derive(Debug, Clone)]
pub enum Identifier {
    /// Purely numeric identifier, compared numerically
    Numeric(u64),
    /// Anything else, compared case-insensitively
    Alpha(String),
}

impl Identifier {
    fn parse(part: &str) -> Self {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(parse_level(part))
        } else {
            Identifier::Alpha(part.to_string())
        }
    }

    /// Check if this identifier is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alpha(_)) => Ordering::Less,
            (Identifier::Alpha(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alpha(a), Identifier::Alpha(b)) => a
                .bytes()
                .map(|b| b.to_ascii_lowercase())
                .cmp(b.bytes().map(|b| b.to_ascii_lowercase())),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alpha(s) => write!(f, "{}", s),
        }
    }
}

/// A semantic version such as `1.2.3-beta.1+build.5`
///
/// Minor and patch levels may be left out when parsing. Missing levels read as the
/// default level given at construction (0 unless stated otherwise) for comparison
/// and rendering, while [`Version::explicit_minor`] and [`Version::explicit_patch`]
/// still report that they were absent.
///
/// Equality and ordering follow version precedence, so `1.2` equals `1.2.0` and
/// `1.0.0-BETA` equals `1.0.0-beta`.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    default: u64,
    pre_release: Vec<Identifier>,
    post_release: Vec<Identifier>,
}

impl Version {
    /// Largest representable level, used as the upper end of range constraints
    pub const MAX_LEVEL: u64 = u64::MAX;

    /// Create a release version with all three levels given
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor: Some(minor),
            patch: Some(patch),
            default: 0,
            pre_release: Vec::new(),
            post_release: Vec::new(),
        }
    }

    /// Parse a version string, reading missing levels as 0
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_default(text, 0)
    }

    /// Parse a version string, reading missing levels as `default`
    pub fn parse_with_default(text: &str, default: u64) -> Result<Self> {
        let caps = VERSION_RE
            .captures(text)
            .ok_or_else(|| InvalidFormat::new(text, "no major version"))?;

        let level = |name: &str| caps.name(name).map(|m| parse_level(m.as_str()));
        let identifiers = |name: &str| -> Vec<Identifier> {
            caps.name(name)
                .map(|m| m.as_str().split('.').map(Identifier::parse).collect())
                .unwrap_or_default()
        };

        Ok(Version {
            major: level("major").unwrap_or_default(),
            minor: level("minor"),
            patch: level("patch"),
            default,
            pre_release: identifiers("pres"),
            post_release: identifiers("posts"),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor level, falling back to the default level when it was not given
    pub fn minor(&self) -> u64 {
        self.minor.unwrap_or(self.default)
    }

    /// Patch level, falling back to the default level when it was not given
    pub fn patch(&self) -> u64 {
        self.patch.unwrap_or(self.default)
    }

    /// Minor level as written, `None` if it was left out
    pub fn explicit_minor(&self) -> Option<u64> {
        self.minor
    }

    /// Patch level as written, `None` if it was left out
    pub fn explicit_patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn default_level(&self) -> u64 {
        self.default
    }

    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    pub fn post_release(&self) -> &[Identifier] {
        &self.post_release
    }

    /// A version is stable when major is at least 1 and no pre-release is attached
    pub fn is_stable(&self) -> bool {
        self.major >= 1 && self.pre_release.is_empty()
    }

    /// Compare by precedence
    ///
    /// Levels decide first. On a tie, having a pre-release lowers precedence and
    /// having post-release data raises it; identifier sequences compare element by
    /// element with a strict prefix sorting first.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
            .then_with(|| self.post_release.as_slice().cmp(other.post_release.as_slice()))
    }

    /// Move to the next major version, resetting everything below it
    pub fn update_major(&mut self) -> &mut Self {
        self.major = self.major.saturating_add(1);
        self.minor = Some(0);
        self.patch = Some(0);
        self.clear_identifiers();
        self
    }

    /// Move to the next minor version, resetting the patch level
    ///
    /// Saturates at [`Version::MAX_LEVEL`].
    pub fn update_minor(&mut self) -> &mut Self {
        self.minor = Some(self.minor().saturating_add(1));
        self.patch = Some(0);
        self.clear_identifiers();
        self
    }

    /// Move to the next patch version
    ///
    /// A pre-release is released as-is: the patch level stays and only the
    /// identifiers are dropped.
    pub fn update_patch(&mut self) -> &mut Self {
        let patch = self.patch();
        self.patch = Some(if self.pre_release.is_empty() {
            patch.saturating_add(1)
        } else {
            patch
        });
        self.clear_identifiers();
        self
    }

    fn clear_identifiers(&mut self) {
        self.pre_release.clear();
        self.post_release.clear();
    }
}

fn compare_pre_release(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// Digit runs beyond `u64` saturate
fn parse_level(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn write_identifiers(f: &mut fmt::Formatter<'_>, prefix: char, ids: &[Identifier]) -> fmt::Result {
    if ids.is_empty() {
        return Ok(());
    }
    write!(f, "{}", prefix)?;
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            write!(f, ".")?;
        }
        write!(f, "{}", id)?;
    }
    Ok(())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor(), self.patch())?;
        write_identifiers(f, '-', &self.pre_release)?;
        write_identifiers(f, '+', &self.post_release)
    }
}

impl FromStr for Version {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

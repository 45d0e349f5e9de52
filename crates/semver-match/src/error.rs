//! Error type shared by version and constraint parsing

use thiserror::Error;

/// Raised when a version or constraint string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid format \"{input}\": {reason}")]
pub struct InvalidFormat {
    input: String,
    reason: String,
}

impl InvalidFormat {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why parsing failed
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, InvalidFormat>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = InvalidFormat::new("foo", "no major version");
        assert_eq!(err.to_string(), "Invalid format \"foo\": no major version");
        assert_eq!(err.input(), "foo");
        assert_eq!(err.reason(), "no major version");
    }
}

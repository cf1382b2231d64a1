//! Garment size codes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`SizeCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SizeCodeError {
    /// The input string is empty (or only whitespace).
    #[error("size code cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("size code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character other than ASCII letters and digits.
    #[error("size code may only contain letters and digits")]
    InvalidCharacter,
}

/// A size code such as `S`, `M`, `XL` or `42`.
///
/// Parsing trims surrounding whitespace and uppercases the input, so the
/// operator can type `m` or ` xl ` at a prompt and still match the catalog's
/// stock keys.
///
/// ## Examples
///
/// ```
/// use sakura_core::SizeCode;
///
/// assert_eq!(SizeCode::parse(" m ").unwrap().as_str(), "M");
/// assert!(SizeCode::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SizeCode(String);

impl SizeCode {
    /// Maximum length of a size code.
    pub const MAX_LENGTH: usize = 8;

    /// Parse a `SizeCode` from operator input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`] characters, or contains anything other than
    /// ASCII letters and digits.
    pub fn parse(s: &str) -> Result<Self, SizeCodeError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(SizeCodeError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(SizeCodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SizeCodeError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the size code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SizeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SizeCode {
    type Err = SizeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SizeCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        assert_eq!(SizeCode::parse("m").unwrap().as_str(), "M");
        assert_eq!(SizeCode::parse("xl").unwrap().as_str(), "XL");
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(SizeCode::parse("  L ").unwrap().as_str(), "L");
    }

    #[test]
    fn test_parse_numeric_sizes() {
        assert_eq!(SizeCode::parse("42").unwrap().as_str(), "42");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(SizeCode::parse("   "), Err(SizeCodeError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            SizeCode::parse("EXTRAEXTRALARGE"),
            Err(SizeCodeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_punctuation() {
        assert!(matches!(
            SizeCode::parse("S-M"),
            Err(SizeCodeError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let size = SizeCode::parse("M").unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"M\"");

        let parsed: SizeCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, size);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(SizeCode::parse("L").unwrap() < SizeCode::parse("M").unwrap());
    }
}

//! Core types for phone input values.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits after the '+'")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// International calling prefix (e.g., "+1" for the US, "+380" for Ukraine).
///
/// Dial codes are stored in canonical form with the leading '+' sign; the
/// constructor accepts input with or without it.
///
/// # Example
///
/// ```rust
/// use intl_phone_input::DialCode;
///
/// let dc = DialCode::new("380").unwrap();
/// assert_eq!(dc.as_str(), "+380");
///
/// let dc = DialCode::new("+1").unwrap();
/// assert_eq!(dc.digits(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input may include a leading '+'; the stored form always does.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(format!("+{n}")))
    }

    /// Get the canonical dial code, including the leading '+'.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the dial code without the leading '+'.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// Country
// =============================================================================

/// A supported calling region.
///
/// Countries are statically defined in the embedded directory and never
/// constructed by callers; see [`crate::directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Display name, used for case-insensitive search.
    pub name: String,
    /// Display glyph (flag emoji). Irrelevant to matching logic.
    pub flag: String,
    /// Short region identifier (ISO alpha-2), unique key within the directory.
    pub code: String,
    /// International calling prefix. Not unique: some regions share one
    /// (e.g. the US and Canada both use "+1").
    pub dial_code: DialCode,
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.flag, self.name, self.dial_code)
    }
}

// =============================================================================
// PhoneParts
// =============================================================================

/// Decomposition of a combined phone value into country and local number.
///
/// This is a transient projection of the combined string, recomputed on every
/// decode. It is never stored as independent state; the combined string owned
/// by the caller remains the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParts<'a> {
    /// The matched country, or the default country when no dial code matched.
    pub country: &'a Country,
    /// The national part of the number, without the dial code.
    pub local_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // DialCode tests
    #[test]
    fn test_dial_code_without_plus() {
        let dc = DialCode::new("380").unwrap();
        assert_eq!(dc.as_str(), "+380");
        assert_eq!(dc.digits(), "380");
    }

    #[test]
    fn test_dial_code_with_plus() {
        let dc = DialCode::new("+44").unwrap();
        assert_eq!(dc.as_str(), "+44");
        assert_eq!(dc.to_string(), "+44");
    }

    #[test]
    fn test_dial_code_trim() {
        let dc = DialCode::new("  +7  ").unwrap();
        assert_eq!(dc.as_str(), "+7");
    }

    #[test]
    fn test_dial_code_empty() {
        assert!(matches!(DialCode::new(""), Err(DialCodeError::Empty)));
        assert!(matches!(DialCode::new("+"), Err(DialCodeError::Empty)));
    }

    #[test]
    fn test_dial_code_non_digit() {
        assert!(matches!(DialCode::new("12a"), Err(DialCodeError::NonDigit)));
        assert!(matches!(
            DialCode::new("+1 242"),
            Err(DialCodeError::NonDigit)
        ));
    }

    #[test]
    fn test_dial_code_serde() {
        let dc = DialCode::new("380").unwrap();
        let json = serde_json::to_string(&dc).unwrap();
        assert_eq!(json, r#""+380""#);

        let dc: DialCode = serde_json::from_str(r#""380""#).unwrap();
        assert_eq!(dc.as_str(), "+380");
    }

    // Country tests
    #[test]
    fn test_country_deserialize() {
        let country: Country = serde_json::from_str(
            r#"{"name":"United Kingdom","flag":"🇬🇧","code":"GB","dial_code":"+44"}"#,
        )
        .unwrap();
        assert_eq!(country.code, "GB");
        assert_eq!(country.dial_code.as_str(), "+44");
        assert_eq!(country.to_string(), "🇬🇧 United Kingdom (+44)");
    }
}

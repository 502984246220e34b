//! Telephone number type.
//!
//! Accounts are keyed by telephone number; it is the login identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Telephone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TelephoneError {
    /// The input string is empty.
    #[error("telephone cannot be empty")]
    Empty,
    /// The input has too few or too many digits.
    #[error("telephone must have between {min} and {max} digits")]
    Length {
        /// Minimum allowed digit count.
        min: usize,
        /// Maximum allowed digit count.
        max: usize,
    },
    /// The input contains something other than digits after an optional `+`.
    #[error("telephone may only contain digits and a leading +")]
    InvalidCharacter,
}

/// A telephone number.
///
/// ## Constraints
///
/// - An optional leading `+`
/// - 5-20 ASCII digits, nothing else
///
/// ## Examples
///
/// ```
/// use bookmarket_core::Telephone;
///
/// assert!(Telephone::parse("1234567890").is_ok());
/// assert!(Telephone::parse("+8613800000000").is_ok());
///
/// assert!(Telephone::parse("").is_err());
/// assert!(Telephone::parse("12-34").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Telephone(String);

impl Telephone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 5;
    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 20;

    /// Parse a `Telephone` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits and a leading `+`, or has the wrong number of digits.
    pub fn parse(s: &str) -> Result<Self, TelephoneError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TelephoneError::Empty);
        }

        let digits = s.strip_prefix('+').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TelephoneError::InvalidCharacter);
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(TelephoneError::Length {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Telephone {
    type Err = TelephoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Telephone {
    type Error = TelephoneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Telephone> for String {
    fn from(telephone: Telephone) -> Self {
        telephone.0
    }
}

impl AsRef<str> for Telephone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! The `{ code, data, msg }` envelope every backend response is wrapped in.
//!
//! Revisions of the backend disagree on how `code` is written (`200`, `0`,
//! `"200"`), so success is decided against a configurable [`SuccessCodes`]
//! set, and numeric strings compare equal to the numbers they spell.

use core::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::ApiError;

/// Message used when a failed envelope carries no `msg`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "request failed";

/// Envelope status code, numeric or textual.
///
/// Integral floats such as `200.0` decode as [`Code::Int`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Code {
    Int(i64),
    Text(String),
}

impl Code {
    /// Numeric value, if the code is a number or a string that parses as one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(s) => {
                let s = s.trim();
                s.parse()
                    .ok()
                    .or_else(|| s.parse().ok().and_then(integral))
            }
        }
    }
}

/// `f` as an integer, if it has no fractional part and fits.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Int(n) => Self::Int(n),
            Wire::Float(f) => integral(f).map_or_else(|| Self::Text(f.to_string()), Self::Int),
            Wire::Text(s) => Self::Text(s),
        })
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_i64(), other.as_i64()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (Self::Text(a), Self::Text(b)) => a.trim() == b.trim(),
                _ => false,
            },
            _ => false,
        }
    }
}

impl Eq for Code {}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Code {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(s.trim().to_owned()), Self::Int)
    }
}

/// Error parsing a [`SuccessCodes`] list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("success code list must contain at least one code")]
pub struct EmptySuccessCodes;

/// The set of envelope codes that mean success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessCodes(Vec<Code>);

impl SuccessCodes {
    /// Build a set from explicit codes.
    ///
    /// # Errors
    ///
    /// Returns `EmptySuccessCodes` if `codes` is empty; a set that accepts
    /// nothing would reject every response.
    pub fn new(codes: Vec<Code>) -> Result<Self, EmptySuccessCodes> {
        if codes.is_empty() {
            return Err(EmptySuccessCodes);
        }
        Ok(Self(codes))
    }

    /// Whether `code` is in the set. A missing code is never a success.
    #[must_use]
    pub fn accepts(&self, code: Option<&Code>) -> bool {
        code.is_some_and(|code| self.0.iter().any(|accepted| accepted == code))
    }
}

impl Default for SuccessCodes {
    fn default() -> Self {
        Self(vec![Code::Int(200), Code::Int(0)])
    }
}

impl FromStr for SuccessCodes {
    type Err = EmptySuccessCodes;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Code::from)
            .collect();
        Self::new(codes)
    }
}

/// A backend response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<Code>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub msg: String,
}

/// Backends send `"msg": null` as often as they omit it.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Envelope<T> {
    /// Take the payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingPayload` if `data` was absent or `null`.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingPayload)
    }
}

/// Check an envelope's code and decode its payload as `T`.
///
/// The payload is decoded only after the code has been accepted, so a failed
/// envelope with a payload of an unexpected shape still reports its `msg`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    raw: Envelope<serde_json::Value>,
    success_codes: &SuccessCodes,
) -> Result<Envelope<T>, ApiError> {
    if !success_codes.accepts(raw.code.as_ref()) {
        let message = if raw.msg.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_owned()
        } else {
            raw.msg
        };
        warn!(
            code = ?raw.code.as_ref().map(ToString::to_string),
            message = %message,
            "API returned a failure envelope"
        );
        return Err(ApiError::Application {
            code: raw.code,
            message,
        });
    }

    let data = match raw.data {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(serde_json::from_value(value).map_err(ApiError::Decode)?),
    };

    Ok(Envelope {
        code: raw.code,
        data,
        msg: raw.msg,
    })
}

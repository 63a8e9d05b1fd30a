// crates/ethercat-sdo-rs/src/source.rs

//! The configuration source abstraction consumed by the entry loader.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

/// A raw scalar as read from a configuration node, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

/// Errors raised by a [`ConfigSource`] when a present key cannot be
/// interpreted as the requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The key was looked up but does not exist in the node.
    MissingKey { key: String },
    /// The value has the wrong shape (e.g. a list where a number was expected).
    TypeMismatch { key: String, expected: &'static str },
    /// The value is a number, but does not fit the requested type.
    OutOfRange { key: String, expected: &'static str },
    /// The value is text that does not parse as an integer.
    InvalidNumber { key: String },
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => write!(f, "field '{}' is missing", key),
            Self::TypeMismatch { key, expected } => {
                write!(f, "field '{}' cannot be read as {}", key, expected)
            }
            Self::OutOfRange { key, expected } => {
                write!(f, "field '{}' is out of range for {}", key, expected)
            }
            Self::InvalidNumber { key } => write!(f, "field '{}' is not a valid integer", key),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoercionError {}

/// A key/value configuration node holding one SDO entry.
///
/// Implementors only need to answer key lookups and hand out raw scalars;
/// the typed getters are provided. They accept signed and unsigned numbers
/// as well as text in decimal or `0x`-prefixed hexadecimal, and may be
/// overridden by sources with their own coercion rules.
pub trait ConfigSource {
    /// Returns `true` if the node has a value for `key`.
    fn contains_key(&self, key: &str) -> bool;

    /// Returns the raw value at `key`.
    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError>;

    fn get_u16(&self, key: &str) -> Result<u16, CoercionError> {
        let wide = integer_of(key, self.scalar(key)?)?;
        u16::try_from(wide).map_err(|_| out_of_range(key, "uint16"))
    }

    fn get_u8(&self, key: &str) -> Result<u8, CoercionError> {
        let wide = integer_of(key, self.scalar(key)?)?;
        u8::try_from(wide).map_err(|_| out_of_range(key, "uint8"))
    }

    /// Reads the value as text. Numbers are rendered in decimal.
    fn get_text(&self, key: &str) -> Result<String, CoercionError> {
        match self.scalar(key)? {
            Scalar::Text(s) => Ok(s),
            Scalar::Signed(v) => Ok(v.to_string()),
            Scalar::Unsigned(v) => Ok(v.to_string()),
        }
    }

    /// Reads the value as a 64-bit integer.
    ///
    /// The accepted range is `i64::MIN..=u64::MAX`. Values above `i64::MAX`
    /// are stored with their bit pattern reinterpreted, so a `uint64` entry
    /// still encodes to the configured bytes.
    fn get_integer(&self, key: &str) -> Result<i64, CoercionError> {
        let wide = integer_of(key, self.scalar(key)?)?;
        if let Ok(v) = i64::try_from(wide) {
            Ok(v)
        } else if let Ok(v) = u64::try_from(wide) {
            Ok(v as i64)
        } else {
            Err(out_of_range(key, "int64"))
        }
    }
}

/// An in-memory node, mostly useful for tests and programmatic configuration.
impl ConfigSource for BTreeMap<String, Scalar> {
    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError> {
        self.get(key).cloned().ok_or_else(|| CoercionError::MissingKey {
            key: key.to_string(),
        })
    }
}

fn out_of_range(key: &str, expected: &'static str) -> CoercionError {
    CoercionError::OutOfRange {
        key: key.to_string(),
        expected,
    }
}

/// Widens any scalar to `i128` so range checks never overflow.
fn integer_of(key: &str, scalar: Scalar) -> Result<i128, CoercionError> {
    match scalar {
        Scalar::Signed(v) => Ok(v as i128),
        Scalar::Unsigned(v) => Ok(v as i128),
        Scalar::Text(s) => parse_integer(&s).ok_or_else(|| CoercionError::InvalidNumber {
            key: key.to_string(),
        }),
    }
}

/// Parses "500", "-12", "+7", "0x1A00" or "-0x10". Surrounding whitespace is ignored.
pub fn parse_integer(s: &str) -> Option<i128> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // `from_str_radix` takes its own leading `+`; only one sign is allowed.
    if digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()? as i128;
    Some(if negative { -magnitude } else { magnitude })
}

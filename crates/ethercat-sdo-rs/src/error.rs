// crates/ethercat-sdo-rs/src/error.rs

use crate::source::CoercionError;
use alloc::string::String;
use core::fmt;

/// Errors that can occur while loading an SDO entry from a configuration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A required key is absent. `index` is set once the entry's index has
    /// been read, i.e. for every field after `index` itself.
    MissingField {
        field: &'static str,
        index: Option<u16>,
    },
    /// A present key could not be coerced to its expected type.
    Coercion {
        index: Option<u16>,
        source: CoercionError,
    },
    /// The `type` tag is not one of the supported integer types.
    UnknownDataType {
        index: u16,
        sub_index: u8,
        tag: String,
    },
}

impl LoadError {
    /// The object dictionary index of the failing entry, if it was read.
    pub fn index(&self) -> Option<u16> {
        match self {
            Self::MissingField { index, .. } | Self::Coercion { index, .. } => *index,
            Self::UnknownDataType { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, index: None } => {
                write!(f, "sdo: missing required field '{}'", field)
            }
            Self::MissingField {
                field,
                index: Some(index),
            } => write!(f, "sdo {:#06x}: missing required field '{}'", index, field),
            Self::Coercion {
                index: None,
                source,
            } => write!(f, "sdo: {}", source),
            Self::Coercion {
                index: Some(index),
                source,
            } => write!(f, "sdo {:#06x}: {}", index, source),
            Self::UnknownDataType {
                index,
                sub_index,
                tag,
            } => write!(
                f,
                "sdo {:#06x}/{:#04x}: unsupported data type '{}'",
                index, sub_index, tag
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coercion { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CoercionError> for LoadError {
    fn from(source: CoercionError) -> Self {
        LoadError::Coercion {
            index: None,
            source,
        }
    }
}

/// Errors that can occur while encoding entries into a transmission buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The buffer cannot hold the value being written.
    BufferTooShort { needed: usize, available: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { needed, available } => write!(
                f,
                "Buffer is too short: {} bytes needed, {} bytes available",
                needed, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// A list of entries failed to load; `position` is the zero-based position
/// of the offending node in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLoadError {
    pub position: usize,
    pub error: LoadError,
}

impl fmt::Display for ListLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{}: {}", self.position, self.error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ListLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// crates/ethercat-sdo-rs/src/types.rs

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

// --- Primitive Types (CoE object dictionary naming) ---
// These aliases keep entry fields readable next to device documentation (UNSIGNEDn / INTEGERn)

/// Alias for UNSIGNED8 (8-bit unsigned integer)
pub type UNSIGNED8 = u8;
/// Alias for UNSIGNED16 (16-bit unsigned integer)
pub type UNSIGNED16 = u16;
/// Alias for INTEGER64 (64-bit signed integer)
pub type INTEGER64 = i64;

/// Type tag for an 8-bit signed value.
pub const TAG_INT8: &str = "int8";
/// Type tag for an 8-bit unsigned value.
pub const TAG_UINT8: &str = "uint8";
/// Type tag for a 16-bit signed value.
pub const TAG_INT16: &str = "int16";
/// Type tag for a 16-bit unsigned value.
pub const TAG_UINT16: &str = "uint16";
/// Type tag for a 32-bit signed value.
pub const TAG_INT32: &str = "int32";
/// Type tag for a 32-bit unsigned value.
pub const TAG_UINT32: &str = "uint32";
/// Type tag for a 64-bit signed value.
pub const TAG_INT64: &str = "int64";
/// Type tag for a 64-bit unsigned value.
pub const TAG_UINT64: &str = "uint64";

/// The data type of an SDO configuration value.
///
/// The eight integer kinds are the only types a startup SDO entry may carry.
/// Any other tag read from a configuration is kept verbatim in `Unknown` so
/// it can be reported; such an entry has a byte width of zero and encodes to
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    /// A tag outside the supported set, carried for diagnostics.
    Unknown(String),
}

impl DataType {
    /// All supported integer kinds, narrowest first.
    pub const KNOWN: [DataType; 8] = [
        DataType::Int8,
        DataType::Uint8,
        DataType::Int16,
        DataType::Uint16,
        DataType::Int32,
        DataType::Uint32,
        DataType::Int64,
        DataType::Uint64,
    ];

    /// Maps a configuration tag to a `DataType`. Matching is exact and
    /// case-sensitive; an unrecognised tag yields `DataType::Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            TAG_INT8 => DataType::Int8,
            TAG_UINT8 => DataType::Uint8,
            TAG_INT16 => DataType::Int16,
            TAG_UINT16 => DataType::Uint16,
            TAG_INT32 => DataType::Int32,
            TAG_UINT32 => DataType::Uint32,
            TAG_INT64 => DataType::Int64,
            TAG_UINT64 => DataType::Uint64,
            other => DataType::Unknown(String::from(other)),
        }
    }

    /// Returns the configuration tag. For `Unknown`, this is the raw tag.
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Int8 => TAG_INT8,
            DataType::Uint8 => TAG_UINT8,
            DataType::Int16 => TAG_INT16,
            DataType::Uint16 => TAG_UINT16,
            DataType::Int32 => TAG_INT32,
            DataType::Uint32 => TAG_UINT32,
            DataType::Int64 => TAG_INT64,
            DataType::Uint64 => TAG_UINT64,
            DataType::Unknown(tag) => tag.as_str(),
        }
    }

    /// Byte width of the encoded value. Returns 0 for `Unknown`.
    pub fn size(&self) -> usize {
        match self {
            DataType::Int8 | DataType::Uint8 => 1,
            DataType::Int16 | DataType::Uint16 => 2,
            DataType::Int32 | DataType::Uint32 => 4,
            DataType::Int64 | DataType::Uint64 => 8,
            DataType::Unknown(_) => 0,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
        )
    }

    /// Returns `false` only for `DataType::Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, DataType::Unknown(_))
    }
}

impl Default for DataType {
    /// An empty entry has no type yet, which behaves like an unknown tag.
    fn default() -> Self {
        DataType::Unknown(String::new())
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for strict parsing of a data type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDataTypeError(pub String);

impl fmt::Display for UnknownDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown data type '{}'. Valid types are int8, uint8, int16, uint16, int32, uint32, int64 and uint64.",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownDataTypeError {}

impl FromStr for DataType {
    type Err = UnknownDataTypeError;

    /// Strict counterpart of [`DataType::from_tag`]: unknown tags are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match DataType::from_tag(s) {
            DataType::Unknown(tag) => Err(UnknownDataTypeError(tag)),
            known => Ok(known),
        }
    }
}

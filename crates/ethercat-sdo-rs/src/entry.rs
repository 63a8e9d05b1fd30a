// crates/ethercat-sdo-rs/src/entry.rs

use crate::buffer::BufferWriter;
use crate::diagnostics::DiagnosticSink;
use crate::error::{EncodeError, LoadError};
use crate::log::{my_debug, my_trace};
use crate::source::{CoercionError, ConfigSource};
use crate::types::{DataType, INTEGER64, UNSIGNED8, UNSIGNED16};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Configuration key holding the object dictionary index.
pub const KEY_INDEX: &str = "index";
/// Configuration key holding the object dictionary sub-index.
pub const KEY_SUB_INDEX: &str = "sub_index";
/// Configuration key holding the data type tag.
pub const KEY_TYPE: &str = "type";
/// Configuration key holding the value to write.
pub const KEY_VALUE: &str = "value";

/// How strictly the `type` tag is checked while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeCheck {
    Strict,
    Lenient,
}

/// One SDO write performed during slave initialisation: the object
/// dictionary address and the integer value to store there.
///
/// `data` is held at full 64-bit width and is narrowed to `data_type` only
/// when encoded, by two's-complement truncation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SdoConfigEntry {
    /// Object dictionary index.
    pub index: UNSIGNED16,
    /// Object dictionary sub-index.
    pub sub_index: UNSIGNED8,
    /// Type tag deciding the encoded width and signedness.
    pub data_type: DataType,
    /// The value to write.
    pub data: INTEGER64,
}

impl SdoConfigEntry {
    pub fn new(index: UNSIGNED16, sub_index: UNSIGNED8, data_type: DataType, data: INTEGER64) -> Self {
        Self {
            index,
            sub_index,
            data_type,
            data,
        }
    }

    /// Loads and validates a new entry from a configuration node.
    ///
    /// See [`SdoConfigEntry::load_from_config`] for the rules.
    pub fn from_config<S, D>(source: &S, diagnostics: &mut D) -> Result<Self, LoadError>
    where
        S: ConfigSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        let mut entry = Self::default();
        entry.load_from_config(source, diagnostics)?;
        Ok(entry)
    }

    /// Reads `index`, `sub_index`, `type` and `value` from `source`, in that order.
    ///
    /// Loading stops at the first absent or malformed field. Every failure is
    /// passed to `diagnostics` before being returned. Fields read before the
    /// failure keep their new values, so an entry must be discarded once a
    /// load has failed.
    ///
    /// A `type` outside the supported integer set is rejected with
    /// [`LoadError::UnknownDataType`] after all four fields have been read.
    pub fn load_from_config<S, D>(&mut self, source: &S, diagnostics: &mut D) -> Result<(), LoadError>
    where
        S: ConfigSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        self.load_checked(source, diagnostics, TypeCheck::Strict)
    }

    /// Same as [`SdoConfigEntry::load_from_config`], but an unknown `type`
    /// is accepted and stored as [`DataType::Unknown`]. Such an entry has a
    /// width of zero and encodes to nothing.
    pub fn load_from_config_lenient<S, D>(&mut self, source: &S, diagnostics: &mut D) -> Result<(), LoadError>
    where
        S: ConfigSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        self.load_checked(source, diagnostics, TypeCheck::Lenient)
    }

    fn load_checked<S, D>(&mut self, source: &S, diagnostics: &mut D, check: TypeCheck) -> Result<(), LoadError>
    where
        S: ConfigSource + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        let result = self.read_fields(source, check);
        match &result {
            Ok(()) => my_debug!("Loaded SDO config entry {}", self),
            Err(e) => diagnostics.report(e),
        }
        result
    }

    fn read_fields<S>(&mut self, source: &S, check: TypeCheck) -> Result<(), LoadError>
    where
        S: ConfigSource + ?Sized,
    {
        self.index = require(source, KEY_INDEX, None, |s, k| s.get_u16(k))?;
        let index = Some(self.index);
        self.sub_index = require(source, KEY_SUB_INDEX, index, |s, k| s.get_u8(k))?;
        let tag: String = require(source, KEY_TYPE, index, |s, k| s.get_text(k))?;
        self.data_type = DataType::from_tag(&tag);
        self.data = require(source, KEY_VALUE, index, |s, k| s.get_integer(k))?;

        if check == TypeCheck::Strict && !self.data_type.is_known() {
            return Err(LoadError::UnknownDataType {
                index: self.index,
                sub_index: self.sub_index,
                tag,
            });
        }
        Ok(())
    }

    /// Number of bytes [`SdoConfigEntry::buffer_write`] produces. Zero for an unknown type.
    pub fn data_size(&self) -> usize {
        self.data_type.size()
    }

    /// Encodes `data` at the start of `buffer`, narrowed to `data_type`.
    ///
    /// Returns the number of bytes written. For an unknown type nothing is
    /// written and `Ok(0)` is returned; the bytes reserved for this entry keep
    /// whatever they held before.
    pub fn buffer_write<W>(&self, buffer: &mut W) -> Result<usize, EncodeError>
    where
        W: BufferWriter + ?Sized,
    {
        let data = self.data;
        match &self.data_type {
            DataType::Uint8 => buffer.write_u8(data as u8)?,
            DataType::Int8 => buffer.write_i8(data as i8)?,
            DataType::Uint16 => buffer.write_u16(data as u16)?,
            DataType::Int16 => buffer.write_i16(data as i16)?,
            DataType::Uint32 => buffer.write_u32(data as u32)?,
            DataType::Int32 => buffer.write_i32(data as i32)?,
            DataType::Uint64 => buffer.write_u64(data as u64)?,
            DataType::Int64 => buffer.write_i64(data)?,
            DataType::Unknown(tag) => {
                my_trace!(
                    "Skipping encode of SDO {:#06x}/{:#04x}: unknown data type '{}'",
                    self.index,
                    self.sub_index,
                    tag
                );
                return Ok(0);
            }
        }
        Ok(self.data_size())
    }

    /// Returns the encoded value as a new vector of `data_size()` bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data_size());
        match self.buffer_write(&mut bytes) {
            Ok(_) => bytes,
            // Appending to a Vec never runs out of room.
            Err(EncodeError::BufferTooShort { .. }) => Vec::new(),
        }
    }
}

impl fmt::Display for SdoConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#06x}/{:#04x} {} = {}",
            self.index, self.sub_index, self.data_type, self.data
        )
    }
}

/// Reads one required field: absent keys become `MissingField`, coercion
/// failures are tagged with the entry's index when known.
fn require<S, T>(
    source: &S,
    field: &'static str,
    index: Option<u16>,
    coerce: impl FnOnce(&S, &str) -> Result<T, CoercionError>,
) -> Result<T, LoadError>
where
    S: ConfigSource + ?Sized,
{
    if !source.contains_key(field) {
        return Err(LoadError::MissingField { field, index });
    }
    coerce(source, field).map_err(|source| LoadError::Coercion { index, source })
}

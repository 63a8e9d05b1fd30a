// crates/ethercat-sdo-rs/src/buffer.rs

//! Fixed-width integer writers for SDO transmission buffers.

use crate::error::EncodeError;
use alloc::vec::Vec;

/// Sink for fixed-width integer writes at the writer's current position.
///
/// The byte order is chosen by the implementation. Both implementations in
/// this crate are little-endian, as required by CoE.
pub trait BufferWriter {
    fn write_u8(&mut self, value: u8) -> Result<(), EncodeError>;
    fn write_i8(&mut self, value: i8) -> Result<(), EncodeError>;
    fn write_u16(&mut self, value: u16) -> Result<(), EncodeError>;
    fn write_i16(&mut self, value: i16) -> Result<(), EncodeError>;
    fn write_u32(&mut self, value: u32) -> Result<(), EncodeError>;
    fn write_i32(&mut self, value: i32) -> Result<(), EncodeError>;
    fn write_u64(&mut self, value: u64) -> Result<(), EncodeError>;
    fn write_i64(&mut self, value: i64) -> Result<(), EncodeError>;
}

/// Writes at the start of the slice. The caller positions the slice,
/// e.g. `&mut frame[offset..]`.
impl BufferWriter for [u8] {
    fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_i8(&mut self, value: i8) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_i16(&mut self, value: i16) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_i32(&mut self, value: i32) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }

    fn write_i64(&mut self, value: i64) -> Result<(), EncodeError> {
        put(self, &value.to_le_bytes())
    }
}

/// Appends to the end of the vector; never fails.
impl BufferWriter for Vec<u8> {
    fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_i8(&mut self, value: i8) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_i16(&mut self, value: i16) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<(), EncodeError> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }
}

fn put(buffer: &mut [u8], bytes: &[u8]) -> Result<(), EncodeError> {
    let available = buffer.len();
    let dest = buffer
        .get_mut(..bytes.len())
        .ok_or(EncodeError::BufferTooShort {
            needed: bytes.len(),
            available,
        })?;
    dest.copy_from_slice(bytes);
    Ok(())
}

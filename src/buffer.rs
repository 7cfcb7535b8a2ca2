//! Byte-level reader and writer for the wire format
//!
//! All multi-byte integers on the wire are little-endian. Variable-length
//! integers use the standard prefix encoding: a single byte below 0xfd is
//! the value itself, 0xfd introduces a u16, 0xfe a u32, and 0xff a u64.
//! Every read fails with [`WireError::TruncatedInput`] the moment fewer
//! bytes remain than the field requires; nothing is zero-padded.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, WireError};

/// Positioned reader over an in-memory byte buffer.
///
/// A reader is exclusively owned for the duration of one decode call and
/// carries no state beyond the slice and the cursor. Position can be
/// captured and restored, which header decoding uses to hash the raw bytes
/// before re-reading the individual fields.
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, position: 0 }
    }

    /// Number of bytes remaining from the current position.
    pub fn available(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to an absolute position previously obtained from
    /// [`ByteReader::position`]. A position past the end of the buffer is
    /// clamped to it, leaving zero bytes available.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.bytes.len());
    }

    /// Read exactly `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.available() < count {
            return Err(WireError::TruncatedInput(format!(
                "need {} bytes, {} available",
                count,
                self.available()
            )));
        }
        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Read a variable-length integer.
    pub fn read_var_int(&mut self) -> Result<u64> {
        match self.read_u8()? {
            n @ 0..=0xfc => Ok(n as u64),
            0xfd => Ok(self.read_u16()? as u64),
            0xfe => Ok(self.read_u32()? as u64),
            0xff => self.read_u64(),
        }
    }

    /// Read a varint length followed by that many bytes.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8]> {
        let length = self.read_var_int()?;
        if length > self.available() as u64 {
            return Err(WireError::TruncatedInput(format!(
                "declared length {} exceeds {} available bytes",
                length,
                self.available()
            )));
        }
        self.read_bytes(length as usize)
    }
}

/// Growable writer producing a contiguous byte sequence.
///
/// Writes are infallible and chainable, mirroring the reader operations.
#[derive(Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        ByteWriter::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.bytes.push(value);
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        let mut buf = [0u8; 2];
        LittleEndian::write_u16(&mut buf, value);
        self.write_bytes(&buf)
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, value);
        self.write_bytes(&buf)
    }

    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, value);
        self.write_bytes(&buf)
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        let mut buf = [0u8; 8];
        LittleEndian::write_u64(&mut buf, value);
        self.write_bytes(&buf)
    }

    pub fn write_var_int(&mut self, value: u64) -> &mut Self {
        if value < 0xfd {
            self.write_u8(value as u8)
        } else if value <= 0xffff {
            self.write_u8(0xfd).write_u16(value as u16)
        } else if value <= 0xffff_ffff {
            self.write_u8(0xfe).write_u32(value as u32)
        } else {
            self.write_u8(0xff).write_u64(value)
        }
    }

    /// Write a varint length prefix followed by the bytes themselves.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_var_int(bytes.len() as u64).write_bytes(bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

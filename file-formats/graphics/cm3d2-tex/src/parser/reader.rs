//! Byte reading utilities for container parsing
//!
//! Integers and floats are little-endian. Strings follow the .NET
//! `BinaryWriter` convention: a 7-bit encoded length, then UTF-8 bytes.

use super::error::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, Error>;

/// Longest 7-bit encoded length prefix for a 32-bit length
const MAX_LENGTH_PREFIX_BYTES: usize = 5;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read a signed 32-bit integer in little-endian format
    fn read_i32_le(&mut self) -> ParseResult<i32>;

    /// Read a 32-bit float in little-endian format
    fn read_f32_le(&mut self) -> ParseResult<f32>;

    /// Borrow exactly `n` bytes
    fn read_slice(&mut self, n: usize) -> ParseResult<&[u8]>;

    /// Number of bytes not yet consumed
    fn remaining(&self) -> usize;

    /// Read a 7-bit encoded unsigned length
    fn read_7bit_len(&mut self) -> ParseResult<usize> {
        let mut value = 0usize;
        for i in 0..MAX_LENGTH_PREFIX_BYTES {
            let byte = self.read_u8()?;
            value |= ((byte & 0x7f) as usize) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::BadStringLength)
    }

    /// Read a length-prefixed UTF-8 string
    fn read_string(&mut self) -> ParseResult<String> {
        let len = self.read_7bit_len()?;
        let bytes = self.read_slice(len)?.to_vec();
        Ok(String::from_utf8(bytes)?)
    }
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the data
    pub fn position(&self) -> usize {
        self.position
    }

    fn take<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let end = self.position.checked_add(N).ok_or(Error::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.position..end)
            .ok_or(Error::UnexpectedEof)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.position = end;
        Ok(out)
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        let [value] = self.take::<1>()?;
        Ok(value)
    }

    fn read_i32_le(&mut self) -> ParseResult<i32> {
        Ok(i32::from_le_bytes(self.take::<4>()?))
    }

    fn read_f32_le(&mut self) -> ParseResult<f32> {
        Ok(f32::from_le_bytes(self.take::<4>()?))
    }

    fn read_slice(&mut self, n: usize) -> ParseResult<&[u8]> {
        let end = self.position.checked_add(n).ok_or(Error::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.position..end)
            .ok_or(Error::UnexpectedEof)?;
        self.position = end;
        Ok(bytes)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

/// Read a non-negative 32-bit count or dimension
pub fn read_non_negative(reader: &mut impl ByteReader) -> ParseResult<u32> {
    let value = reader.read_i32_le()?;
    u32::try_from(value).map_err(|_| Error::NegativeValue(value))
}

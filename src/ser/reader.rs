use super::error::{SerError, SerResult};
use super::traits::Deserializable;

/// Maximum number of bytes a ULEB128 encoding of a `u32` may occupy.
const MAX_ULEB128_LEN: usize = 5;

/// Bounds-checked cursor over a borrowed byte slice.
///
/// Every read either advances the cursor by exactly the consumed byte count
/// or fails without moving it; each operation computes its full result before
/// committing the advance. After a failure the cursor is never past the
/// buffer end, but the deserializer must be treated as unusable.
#[derive(Debug, Clone, Copy)]
pub struct Deserializer<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Deserializer<'a> {
    /// Creates a new cursor over the provided byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Ensures the full input was consumed, otherwise returns a
    /// trailing-bytes error.
    pub fn ensure_consumed(&self) -> SerResult<()> {
        let remaining = self.remaining();
        if remaining == 0 {
            Ok(())
        } else {
            Err(SerError::trailing_bytes(self.offset, remaining))
        }
    }

    /// Decodes a value through its [`Deserializable`] implementation.
    ///
    /// This is the generic dispatch entry point that lets composite types
    /// decode recursively without the cursor knowing about them.
    pub fn read_value<T: Deserializable>(&mut self) -> SerResult<T> {
        T::deserialize(self)
    }

    /// Reads exactly `len` bytes from the cursor.
    pub fn read_exact(&mut self, len: usize) -> SerResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SerError::underrun(len, remaining));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads a fixed-size byte array from the cursor.
    pub fn read_array<const N: usize>(&mut self) -> SerResult<[u8; N]> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> SerResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a `u16` in little-endian order.
    pub fn read_u16(&mut self) -> SerResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a `u32` in little-endian order.
    pub fn read_u32(&mut self) -> SerResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a `u64` in little-endian order.
    pub fn read_u64(&mut self) -> SerResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a `u128` in little-endian order.
    pub fn read_u128(&mut self) -> SerResult<u128> {
        Ok(u128::from_le_bytes(self.read_array::<16>()?))
    }

    /// Reads an `i8` from its two's-complement bit pattern.
    pub fn read_i8(&mut self) -> SerResult<i8> {
        Ok(i8::from_le_bytes(self.read_array::<1>()?))
    }

    /// Reads an `i16` in little-endian two's complement.
    pub fn read_i16(&mut self) -> SerResult<i16> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads an `i32` in little-endian two's complement.
    pub fn read_i32(&mut self) -> SerResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads an `i64` in little-endian two's complement.
    pub fn read_i64(&mut self) -> SerResult<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads an `i128` in little-endian two's complement.
    pub fn read_i128(&mut self) -> SerResult<i128> {
        Ok(i128::from_le_bytes(self.read_array::<16>()?))
    }

    /// Reads a boolean flag encoded as `0` or `1`.
    pub fn read_bool(&mut self) -> SerResult<bool> {
        match self.peek_flag_byte()? {
            0 => {
                self.offset += 1;
                Ok(false)
            }
            1 => {
                self.offset += 1;
                Ok(true)
            }
            byte => Err(SerError::invalid_flag(byte)),
        }
    }

    /// Reads a minimally encoded ULEB128 `u32`.
    ///
    /// Rejects encodings exceeding 32 bits of precision and non-minimal
    /// forms (a multi-byte encoding whose final byte is zero).
    pub fn read_uleb128(&mut self) -> SerResult<u32> {
        let (value, consumed) = self.peek_uleb128()?;
        self.offset += consumed;
        Ok(value)
    }

    /// Reads the raw ordinal prefixed before a sum-typed payload.
    ///
    /// Mapping the ordinal to a concrete case, and rejecting unknown
    /// ordinals, is the variant type's responsibility.
    pub fn read_variant_index(&mut self) -> SerResult<u32> {
        self.read_uleb128()
    }

    /// Reads a ULEB128 length prefix and returns the owned payload bytes.
    pub fn read_prefixed_bytes(&mut self) -> SerResult<Vec<u8>> {
        let (len, consumed) = self.peek_uleb128()?;
        let len = len as usize;
        let after_prefix = self.remaining() - consumed;
        if len > after_prefix {
            return Err(SerError::underrun(len, after_prefix));
        }
        let start = self.offset + consumed;
        self.offset = start + len;
        Ok(self.bytes[start..start + len].to_vec())
    }

    /// Reads a length-prefixed UTF-8 string, validating the payload.
    pub fn read_string(&mut self) -> SerResult<String> {
        let (len, consumed) = self.peek_uleb128()?;
        let len = len as usize;
        let after_prefix = self.remaining() - consumed;
        if len > after_prefix {
            return Err(SerError::underrun(len, after_prefix));
        }
        let start = self.offset + consumed;
        let payload = &self.bytes[start..start + len];
        let text = core::str::from_utf8(payload).map_err(|_| SerError::InvalidUtf8)?;
        self.offset = start + len;
        Ok(text.to_owned())
    }

    /// Returns the next byte without advancing, for flag decoding.
    fn peek_flag_byte(&self) -> SerResult<u8> {
        match self.bytes.get(self.offset) {
            Some(byte) => Ok(*byte),
            None => Err(SerError::underrun(1, 0)),
        }
    }

    /// Decodes a ULEB128 `u32` without advancing the cursor.
    ///
    /// Returns the value and the number of bytes it occupies.
    fn peek_uleb128(&self) -> SerResult<(u32, usize)> {
        let mut value: u32 = 0;
        let mut consumed = 0usize;
        loop {
            let byte = match self.bytes.get(self.offset + consumed) {
                Some(byte) => *byte,
                None => return Err(SerError::underrun(consumed + 1, self.remaining())),
            };
            let payload = (byte & 0x7f) as u32;
            let shift = 7 * consumed as u32;
            // The fifth byte may only carry bits 28..=31.
            if consumed + 1 == MAX_ULEB128_LEN && (byte & 0x80 != 0 || payload > 0x0f) {
                return Err(SerError::overflow(32));
            }
            value |= payload << shift;
            consumed += 1;
            if byte & 0x80 == 0 {
                if consumed > 1 && byte == 0 {
                    return Err(SerError::NonCanonicalEncoding);
                }
                return Ok((value, consumed));
            }
        }
    }
}

impl<'a> From<&'a [u8]> for Deserializer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Deserializer::new(bytes)
    }
}

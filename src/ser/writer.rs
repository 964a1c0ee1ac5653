/// Append-only byte writer producing the canonical little-endian layouts.
///
/// Bytes once written are never mutated, only appended, so an encoding is
/// fully determined by the sequence of write calls. Primitive writes cannot
/// fail; the only serialize-side failures come from domain types with
/// unimplemented cases.
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    buffer: Vec<u8>,
}

impl Serializer {
    /// Creates an empty serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Returns the accumulated bytes without resetting state.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the serializer and returns the accumulated buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Encodes a `u8`.
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Encodes a `u16` in little-endian order.
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes a `u32` in little-endian order.
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes a `u64` in little-endian order.
    pub fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes a `u128` in little-endian order.
    pub fn write_u128(&mut self, value: u128) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes an `i8` as its two's-complement bit pattern.
    pub fn write_i8(&mut self, value: i8) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes an `i16` in little-endian two's complement.
    pub fn write_i16(&mut self, value: i16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes an `i32` in little-endian two's complement.
    pub fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes an `i64` in little-endian two's complement.
    pub fn write_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Encodes an `i128` in little-endian two's complement.
    pub fn write_i128(&mut self, value: i128) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a boolean flag as a single byte (`0` or `1`).
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    /// Writes a `u32` as a minimal unsigned LEB128 varint.
    ///
    /// Seven payload bits per byte, low-to-high, with the continuation bit
    /// (0x80) set on all but the final byte. The final byte of a multi-byte
    /// encoding is never zero, so the emitted form is always canonical.
    pub fn write_uleb128(&mut self, mut value: u32) {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                self.buffer.push(byte);
                return;
            }
            self.buffer.push(byte | 0x80);
        }
    }

    /// Writes a variant ordinal ahead of the chosen case's payload.
    pub fn write_variant_index(&mut self, index: u32) {
        self.write_uleb128(index);
    }

    /// Appends raw bytes with no framing (fixed-width fields).
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a ULEB128 length prefix followed by the provided bytes.
    ///
    /// Wire lengths are bounded by `u32`; in-memory payloads never approach
    /// that limit.
    pub fn write_prefixed_bytes(&mut self, bytes: &[u8]) {
        debug_assert!(u32::try_from(bytes.len()).is_ok());
        self.write_uleb128(bytes.len() as u32);
        self.write_bytes(bytes);
    }

    /// Writes a UTF-8 string as length-prefixed bytes.
    ///
    /// The input is valid text by construction; the encoder does not
    /// re-validate.
    pub fn write_string(&mut self, value: &str) {
        self.write_prefixed_bytes(value.as_bytes());
    }
}

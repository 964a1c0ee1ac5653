use crate::ser::{Deserializable, Deserializer, SerResult, Serializable, Serializer};
use core::fmt;

/// Canonical byte length of an uncompressed SEC1 secp256k1 public key.
pub const SECP256K1_PUBLIC_KEY_LENGTH: usize = 65;

/// Canonical byte length of a compact secp256k1 ECDSA signature.
pub const SECP256K1_SIGNATURE_LENGTH: usize = 64;

/// secp256k1 ECDSA public key carried as opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey([u8; SECP256K1_PUBLIC_KEY_LENGTH]);

impl Secp256k1PublicKey {
    /// Wraps raw public-key bytes.
    pub fn new(bytes: [u8; SECP256K1_PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SECP256K1_PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Secp256k1PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serializable for Secp256k1PublicKey {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for Secp256k1PublicKey {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self(input.read_array()?))
    }
}

/// secp256k1 ECDSA signature carried as opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1Signature([u8; SECP256K1_SIGNATURE_LENGTH]);

impl Secp256k1Signature {
    /// Wraps raw signature bytes.
    pub fn new(bytes: [u8; SECP256K1_SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SECP256K1_SIGNATURE_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Secp256k1Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Secp256k1Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serializable for Secp256k1Signature {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for Secp256k1Signature {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self(input.read_array()?))
    }
}

use crate::ser::{Deserializable, Deserializer, SerResult, Serializable, Serializer};
use core::fmt;

/// Canonical byte length of an Ed25519 public key.
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;

/// Canonical byte length of an Ed25519 signature.
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

/// Ed25519 public key carried as opaque bytes.
///
/// The wire layer only moves the byte representation; cryptographic validity
/// is the signing collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_LENGTH]);

impl Ed25519PublicKey {
    /// Wraps raw public-key bytes.
    pub fn new(bytes: [u8; ED25519_PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serializable for Ed25519PublicKey {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for Ed25519PublicKey {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self(input.read_array()?))
    }
}

/// Ed25519 signature carried as opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature([u8; ED25519_SIGNATURE_LENGTH]);

impl Ed25519Signature {
    /// Wraps raw signature bytes.
    pub fn new(bytes: [u8; ED25519_SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_SIGNATURE_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serializable for Ed25519Signature {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for Ed25519Signature {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self(input.read_array()?))
    }
}

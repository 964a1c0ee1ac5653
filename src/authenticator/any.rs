//! Algorithm-erasing key and signature wrappers.
//!
//! `AnyPublicKey` and `AnySignature` select a concrete algorithm through
//! their own variant ordinal, so the outer authenticator can carry a
//! key/signature pair without knowing which scheme produced it. The ordinal
//! tables are append-only: existing ordinals are never reassigned.

use super::ed25519::{Ed25519PublicKey, Ed25519Signature};
use super::secp256k1::{Secp256k1PublicKey, Secp256k1Signature};
use crate::ser::{Deserializable, Deserializer, SerError, SerResult, Serializable, Serializer};

const ANY_PUBLIC_KEY_ED25519: u32 = 0;
const ANY_PUBLIC_KEY_SECP256K1: u32 = 1;

const ANY_SIGNATURE_ED25519: u32 = 0;
const ANY_SIGNATURE_SECP256K1: u32 = 1;

/// Public key under one of the supported signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyPublicKey {
    /// Ed25519 public key (ordinal 0).
    Ed25519(Ed25519PublicKey),
    /// secp256k1 ECDSA public key (ordinal 1).
    Secp256k1(Secp256k1PublicKey),
}

impl AnyPublicKey {
    /// Returns the wire ordinal identifying the algorithm.
    pub fn variant_index(&self) -> u32 {
        match self {
            AnyPublicKey::Ed25519(_) => ANY_PUBLIC_KEY_ED25519,
            AnyPublicKey::Secp256k1(_) => ANY_PUBLIC_KEY_SECP256K1,
        }
    }

    /// Returns the raw key bytes regardless of algorithm.
    pub fn key_bytes(&self) -> &[u8] {
        match self {
            AnyPublicKey::Ed25519(key) => key.as_ref(),
            AnyPublicKey::Secp256k1(key) => key.as_ref(),
        }
    }
}

impl Serializable for AnyPublicKey {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_variant_index(self.variant_index());
        match self {
            AnyPublicKey::Ed25519(key) => key.serialize(out),
            AnyPublicKey::Secp256k1(key) => key.serialize(out),
        }
    }
}

impl Deserializable for AnyPublicKey {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        match input.read_variant_index()? {
            ANY_PUBLIC_KEY_ED25519 => Ok(AnyPublicKey::Ed25519(input.read_value()?)),
            ANY_PUBLIC_KEY_SECP256K1 => Ok(AnyPublicKey::Secp256k1(input.read_value()?)),
            index => Err(SerError::invalid_variant("AnyPublicKey", index)),
        }
    }
}

impl From<Ed25519PublicKey> for AnyPublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        AnyPublicKey::Ed25519(key)
    }
}

impl From<Secp256k1PublicKey> for AnyPublicKey {
    fn from(key: Secp256k1PublicKey) -> Self {
        AnyPublicKey::Secp256k1(key)
    }
}

/// Signature under one of the supported signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnySignature {
    /// Ed25519 signature (ordinal 0).
    Ed25519(Ed25519Signature),
    /// secp256k1 ECDSA signature (ordinal 1).
    Secp256k1(Secp256k1Signature),
}

impl AnySignature {
    /// Returns the wire ordinal identifying the algorithm.
    pub fn variant_index(&self) -> u32 {
        match self {
            AnySignature::Ed25519(_) => ANY_SIGNATURE_ED25519,
            AnySignature::Secp256k1(_) => ANY_SIGNATURE_SECP256K1,
        }
    }

    /// Returns the raw signature bytes regardless of algorithm.
    pub fn signature_bytes(&self) -> &[u8] {
        match self {
            AnySignature::Ed25519(signature) => signature.as_ref(),
            AnySignature::Secp256k1(signature) => signature.as_ref(),
        }
    }
}

impl Serializable for AnySignature {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_variant_index(self.variant_index());
        match self {
            AnySignature::Ed25519(signature) => signature.serialize(out),
            AnySignature::Secp256k1(signature) => signature.serialize(out),
        }
    }
}

impl Deserializable for AnySignature {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        match input.read_variant_index()? {
            ANY_SIGNATURE_ED25519 => Ok(AnySignature::Ed25519(input.read_value()?)),
            ANY_SIGNATURE_SECP256K1 => Ok(AnySignature::Secp256k1(input.read_value()?)),
            index => Err(SerError::invalid_variant("AnySignature", index)),
        }
    }
}

impl From<Ed25519Signature> for AnySignature {
    fn from(signature: Ed25519Signature) -> Self {
        AnySignature::Ed25519(signature)
    }
}

impl From<Secp256k1Signature> for AnySignature {
    fn from(signature: Secp256k1Signature) -> Self {
        AnySignature::Secp256k1(signature)
    }
}

//! Canonical binary serialization and account authenticator types for
//! transaction signing.
//!
//! The crate has two layers. The [`ser`] module is a deterministic,
//! self-describing binary codec: fixed-width little-endian integers,
//! single-byte booleans, minimally encoded ULEB128 varints for lengths and
//! variant ordinals, length-prefixed bytes and UTF-8 strings. The
//! [`authenticator`] module builds the polymorphic signed-credential model on
//! top of it: a closed, append-only set of account authenticator schemes,
//! each independently (de)serializable through the
//! [`Serializable`]/[`Deserializable`] capability pair.
//!
//! Signing flows one direction: domain value → [`Serializer`] → byte buffer.
//! Parsing mirrors it: byte buffer → [`Deserializer`] → domain value. The
//! crate performs no I/O and no cryptographic verification; it only moves
//! byte representations, byte-for-byte identically on every platform.

pub mod address;
pub mod authenticator;
pub mod ser;

pub use address::AccountAddress;
pub use authenticator::{
    AccountAuthenticator, AnyPublicKey, AnySignature, Ed25519PublicKey, Ed25519Signature,
    Secp256k1PublicKey, Secp256k1Signature,
};
pub use ser::{Deserializable, Deserializer, SerError, SerResult, Serializable, Serializer};

/// Encodes a value into its canonical byte representation.
pub fn to_bytes<T: Serializable + ?Sized>(value: &T) -> SerResult<Vec<u8>> {
    value.to_bytes()
}

/// Decodes a value from a full buffer, rejecting trailing bytes.
pub fn from_bytes<T: Deserializable>(bytes: &[u8]) -> SerResult<T> {
    T::from_bytes(bytes)
}

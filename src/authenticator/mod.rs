//! Polymorphic account authenticator family.
//!
//! Each supported key/signature scheme implements the serialization
//! capability pair independently; the [`AccountAuthenticator`] sum type
//! unions them under one variant-tagged encoding, and the
//! [`AnyPublicKey`]/[`AnySignature`] wrappers add an inner variant layer so
//! the single-key case stays algorithm-agnostic.

mod account;
mod any;
mod ed25519;
mod secp256k1;

pub use account::{AccountAuthenticator, AuthenticatorPublicKey, AuthenticatorSignature};
pub use any::{AnyPublicKey, AnySignature};
pub use ed25519::{
    Ed25519PublicKey, Ed25519Signature, ED25519_PUBLIC_KEY_LENGTH, ED25519_SIGNATURE_LENGTH,
};
pub use secp256k1::{
    Secp256k1PublicKey, Secp256k1Signature, SECP256K1_PUBLIC_KEY_LENGTH,
    SECP256K1_SIGNATURE_LENGTH,
};

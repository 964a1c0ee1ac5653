//! Account authenticator: the signed-credential structure proving an account
//! authorized a transaction.
//!
//! Wire layout is a ULEB128 variant ordinal followed by the chosen case's
//! payload with no extra framing. The ordinal table is fixed and append-only:
//!
//! | ordinal | case         |
//! |---------|--------------|
//! | 0       | Ed25519      |
//! | 1       | MultiEd25519 |
//! | 2       | SingleKey    |
//! | 3       | MultiKey     |
//!
//! `MultiEd25519` and `MultiKey` keep their ordinals reserved for wire
//! compatibility, but their byte layout is not specified by the available
//! material; every operation on them reports [`SerError::Unimplemented`]
//! instead of guessing.

use super::any::{AnyPublicKey, AnySignature};
use super::ed25519::{Ed25519PublicKey, Ed25519Signature};
use crate::ser::{Deserializable, Deserializer, SerError, SerResult, Serializable, Serializer};

const AUTHENTICATOR_ED25519: u32 = 0;
const AUTHENTICATOR_MULTI_ED25519: u32 = 1;
const AUTHENTICATOR_SINGLE_KEY: u32 = 2;
const AUTHENTICATOR_MULTI_KEY: u32 = 3;

/// Authenticator over the closed set of supported account schemes.
///
/// Immutable once constructed; built transiently while assembling a signed
/// transaction payload or parsing one from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAuthenticator {
    /// Plain Ed25519 key and signature (ordinal 0).
    Ed25519 {
        /// Signing account's public key.
        public_key: Ed25519PublicKey,
        /// Signature over the transaction payload.
        signature: Ed25519Signature,
    },
    /// Multi-signature Ed25519 scheme (ordinal 1, encoding not yet sourced).
    MultiEd25519,
    /// Algorithm-agnostic single key and signature (ordinal 2).
    SingleKey {
        /// Variant-tagged public key.
        public_key: AnyPublicKey,
        /// Variant-tagged signature.
        signature: AnySignature,
    },
    /// Multi-key scheme (ordinal 3, encoding not yet sourced).
    MultiKey,
}

/// Borrowed view of the public key carried by an authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticatorPublicKey<'a> {
    /// Key of a plain Ed25519 authenticator.
    Ed25519(&'a Ed25519PublicKey),
    /// Key of a single-key authenticator.
    SingleKey(&'a AnyPublicKey),
}

/// Borrowed view of the signature carried by an authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticatorSignature<'a> {
    /// Signature of a plain Ed25519 authenticator.
    Ed25519(&'a Ed25519Signature),
    /// Signature of a single-key authenticator.
    SingleKey(&'a AnySignature),
}

impl AccountAuthenticator {
    /// Builds a plain Ed25519 authenticator.
    pub fn ed25519(public_key: Ed25519PublicKey, signature: Ed25519Signature) -> Self {
        AccountAuthenticator::Ed25519 {
            public_key,
            signature,
        }
    }

    /// Builds a single-key authenticator over any supported algorithm.
    pub fn single_key(public_key: AnyPublicKey, signature: AnySignature) -> Self {
        AccountAuthenticator::SingleKey {
            public_key,
            signature,
        }
    }

    /// Returns the wire ordinal of this case.
    pub fn variant_index(&self) -> u32 {
        match self {
            AccountAuthenticator::Ed25519 { .. } => AUTHENTICATOR_ED25519,
            AccountAuthenticator::MultiEd25519 => AUTHENTICATOR_MULTI_ED25519,
            AccountAuthenticator::SingleKey { .. } => AUTHENTICATOR_SINGLE_KEY,
            AccountAuthenticator::MultiKey => AUTHENTICATOR_MULTI_KEY,
        }
    }

    /// Returns the carried public key, dispatching by case.
    ///
    /// Cases without an implemented encoding report a capability gap instead
    /// of a value.
    pub fn public_key(&self) -> SerResult<AuthenticatorPublicKey<'_>> {
        match self {
            AccountAuthenticator::Ed25519 { public_key, .. } => {
                Ok(AuthenticatorPublicKey::Ed25519(public_key))
            }
            AccountAuthenticator::SingleKey { public_key, .. } => {
                Ok(AuthenticatorPublicKey::SingleKey(public_key))
            }
            AccountAuthenticator::MultiEd25519 => {
                Err(SerError::unimplemented("MultiEd25519 authenticator"))
            }
            AccountAuthenticator::MultiKey => {
                Err(SerError::unimplemented("MultiKey authenticator"))
            }
        }
    }

    /// Returns the carried signature, dispatching by case.
    pub fn signature(&self) -> SerResult<AuthenticatorSignature<'_>> {
        match self {
            AccountAuthenticator::Ed25519 { signature, .. } => {
                Ok(AuthenticatorSignature::Ed25519(signature))
            }
            AccountAuthenticator::SingleKey { signature, .. } => {
                Ok(AuthenticatorSignature::SingleKey(signature))
            }
            AccountAuthenticator::MultiEd25519 => {
                Err(SerError::unimplemented("MultiEd25519 authenticator"))
            }
            AccountAuthenticator::MultiKey => {
                Err(SerError::unimplemented("MultiKey authenticator"))
            }
        }
    }
}

impl Serializable for AccountAuthenticator {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        match self {
            AccountAuthenticator::Ed25519 {
                public_key,
                signature,
            } => {
                out.write_variant_index(AUTHENTICATOR_ED25519);
                public_key.serialize(out)?;
                signature.serialize(out)
            }
            AccountAuthenticator::SingleKey {
                public_key,
                signature,
            } => {
                out.write_variant_index(AUTHENTICATOR_SINGLE_KEY);
                public_key.serialize(out)?;
                signature.serialize(out)
            }
            AccountAuthenticator::MultiEd25519 => {
                Err(SerError::unimplemented("MultiEd25519 authenticator"))
            }
            AccountAuthenticator::MultiKey => {
                Err(SerError::unimplemented("MultiKey authenticator"))
            }
        }
    }
}

impl Deserializable for AccountAuthenticator {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        match input.read_variant_index()? {
            AUTHENTICATOR_ED25519 => Ok(AccountAuthenticator::Ed25519 {
                public_key: input.read_value()?,
                signature: input.read_value()?,
            }),
            AUTHENTICATOR_MULTI_ED25519 => {
                Err(SerError::unimplemented("MultiEd25519 authenticator"))
            }
            AUTHENTICATOR_SINGLE_KEY => Ok(AccountAuthenticator::SingleKey {
                public_key: input.read_value()?,
                signature: input.read_value()?,
            }),
            AUTHENTICATOR_MULTI_KEY => Err(SerError::unimplemented("MultiKey authenticator")),
            index => Err(SerError::invalid_variant("AccountAuthenticator", index)),
        }
    }
}

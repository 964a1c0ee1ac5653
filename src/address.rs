use crate::ser::{Deserializable, Deserializer, SerResult, Serializable, Serializer};
use core::fmt;

/// Canonical byte length of an account address.
pub const ACCOUNT_ADDRESS_LENGTH: usize = 32;

/// Fixed-width account identity.
///
/// Encodes as its raw bytes with no length prefix; the length is part of the
/// static type. Address derivation and checksums belong to the wallet
/// collaborators, not the wire layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; ACCOUNT_ADDRESS_LENGTH]);

impl AccountAddress {
    /// Wraps raw address bytes.
    pub fn new(bytes: [u8; ACCOUNT_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ADDRESS_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ACCOUNT_ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ACCOUNT_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serializable for AccountAddress {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for AccountAddress {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self(input.read_array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_lowercase_hex() {
        let mut bytes = [0u8; ACCOUNT_ADDRESS_LENGTH];
        bytes[31] = 0x01;
        let address = AccountAddress::new(bytes);
        assert_eq!(
            address.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
    }
}

use super::error::SerResult;
use super::reader::Deserializer;
use super::writer::Serializer;

/// Capability to write a value into a [`Serializer`].
///
/// A struct's serialization is the concatenation of its fields' encodings in
/// declared order; that order is part of the wire contract and must never
/// change without a format version bump.
pub trait Serializable {
    /// Appends this value's canonical encoding to the serializer.
    fn serialize(&self, out: &mut Serializer) -> SerResult<()>;

    /// Encodes this value into a fresh byte buffer.
    fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Serializer::new();
        self.serialize(&mut out)?;
        Ok(out.into_bytes())
    }
}

/// Capability to reconstruct a value by reading a [`Deserializer`].
///
/// An implementation must consume exactly the bytes the symmetric
/// [`Serializable::serialize`] would have produced for the value it returns.
pub trait Deserializable: Sized {
    /// Decodes a value from the cursor.
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self>;

    /// Decodes a value from a full buffer, rejecting trailing bytes.
    fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let mut input = Deserializer::new(bytes);
        let value = Self::deserialize(&mut input)?;
        input.ensure_consumed()?;
        Ok(value)
    }
}

macro_rules! impl_fixed_int {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Serializable for $ty {
                fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
                    out.$write(*self);
                    Ok(())
                }
            }

            impl Deserializable for $ty {
                fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
                    input.$read()
                }
            }
        )*
    };
}

impl_fixed_int! {
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    u128 => write_u128, read_u128;
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    i128 => write_i128, read_i128;
}

impl Serializable for bool {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bool(*self);
        Ok(())
    }
}

impl Deserializable for bool {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        input.read_bool()
    }
}

impl Serializable for str {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_string(self);
        Ok(())
    }
}

impl Serializable for String {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_string(self);
        Ok(())
    }
}

impl Deserializable for String {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        input.read_string()
    }
}

/// Fixed-size byte arrays encode as raw bytes with no length prefix; the
/// length is part of the static type.
impl<const N: usize> Serializable for [u8; N] {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_bytes(self);
        Ok(())
    }
}

impl<const N: usize> Deserializable for [u8; N] {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        input.read_array::<N>()
    }
}

/// Sequences encode as a ULEB128 element count followed by each element's
/// encoding in order.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        out.write_uleb128(self.len() as u32);
        for item in self {
            item.serialize(out)?;
        }
        Ok(())
    }
}

impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        let count = input.read_uleb128()? as usize;
        let mut out = Vec::with_capacity(count.min(input.remaining()));
        for _ in 0..count {
            out.push(T::deserialize(input)?);
        }
        Ok(out)
    }
}

/// Optionals encode as a presence byte (`0`/`1`) followed by the value's
/// encoding iff present.
impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        match self {
            Some(value) => {
                out.write_bool(true);
                value.serialize(out)
            }
            None => {
                out.write_bool(false);
                Ok(())
            }
        }
    }
}

impl<T: Deserializable> Deserializable for Option<T> {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        if input.read_bool()? {
            Ok(Some(T::deserialize(input)?))
        } else {
            Ok(None)
        }
    }
}

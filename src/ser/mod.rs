//! Canonical binary serialization engine.
//!
//! The types in this module implement the deterministic little-endian wire
//! format shared by every signed structure: fixed-width integers, single-byte
//! booleans, minimally encoded ULEB128 varints for lengths and variant
//! ordinals, length-prefixed byte sequences and UTF-8 strings, and raw
//! fixed-size byte arrays. Exactly one byte sequence is valid per logical
//! value; alternate encodings are decode errors.

mod error;
mod reader;
mod traits;
mod writer;

pub use error::{SerError, SerResult};
pub use reader::Deserializer;
pub use traits::{Deserializable, Serializable};
pub use writer::Serializer;

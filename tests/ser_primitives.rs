use bcs_auth::ser::{Deserializable, Deserializer, SerError, Serializable, Serializer};
use insta::assert_snapshot;
use proptest::prelude::*;

#[test]
fn roundtrip_unsigned_integers() {
    let mut out = Serializer::new();
    out.write_u8(0xfe);
    out.write_u16(0x1234);
    out.write_u32(0xdead_beef);
    out.write_u64(0x0102_0304_0506_0708);
    out.write_u128(u128::MAX - 1);
    let mut cursor = Deserializer::new(out.as_bytes());
    assert_eq!(cursor.read_u8().unwrap(), 0xfe);
    assert_eq!(cursor.read_u16().unwrap(), 0x1234);
    assert_eq!(cursor.read_u32().unwrap(), 0xdead_beef);
    assert_eq!(cursor.read_u64().unwrap(), 0x0102_0304_0506_0708);
    assert_eq!(cursor.read_u128().unwrap(), u128::MAX - 1);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn roundtrip_signed_integers() {
    let mut out = Serializer::new();
    out.write_i8(-1);
    out.write_i16(-2);
    out.write_i32(i32::MIN);
    out.write_i64(-1_234_567_890_123);
    out.write_i128(i128::MIN + 1);
    let mut cursor = Deserializer::new(out.as_bytes());
    assert_eq!(cursor.read_i8().unwrap(), -1);
    assert_eq!(cursor.read_i16().unwrap(), -2);
    assert_eq!(cursor.read_i32().unwrap(), i32::MIN);
    assert_eq!(cursor.read_i64().unwrap(), -1_234_567_890_123);
    assert_eq!(cursor.read_i128().unwrap(), i128::MIN + 1);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn bool_roundtrip_and_invalid() {
    let mut out = Serializer::new();
    out.write_bool(true);
    out.write_bool(false);
    assert_eq!(out.as_bytes(), &[0x01, 0x00]);
    let mut cursor = Deserializer::new(out.as_bytes());
    assert!(cursor.read_bool().unwrap());
    assert!(!cursor.read_bool().unwrap());

    let mut cursor = Deserializer::new(&[0x02]);
    let err = cursor.read_bool().expect_err("invalid flag");
    assert_eq!(err, SerError::InvalidFlagByte { byte: 0x02 });
}

#[test]
fn uleb128_known_vector() {
    let mut out = Serializer::new();
    out.write_uleb128(300);
    assert_eq!(out.as_bytes(), &[0xac, 0x02]);
    let mut cursor = Deserializer::new(&[0xac, 0x02]);
    assert_eq!(cursor.read_uleb128().unwrap(), 300);
}

#[test]
fn uleb128_rejects_non_minimal_encoding() {
    // Same integer, padded with a zero-precision continuation byte.
    let mut cursor = Deserializer::new(&[0xac, 0x82, 0x00]);
    assert_eq!(
        cursor.read_uleb128().expect_err("non-minimal"),
        SerError::NonCanonicalEncoding
    );

    // Single-byte zero is the canonical zero; a padded zero is not.
    let mut cursor = Deserializer::new(&[0x80, 0x00]);
    assert_eq!(
        cursor.read_uleb128().expect_err("non-minimal zero"),
        SerError::NonCanonicalEncoding
    );
}

#[test]
fn uleb128_rejects_overflowing_encoding() {
    let mut cursor = Deserializer::new(&[0xff, 0xff, 0xff, 0xff, 0x7f]);
    assert_eq!(
        cursor.read_uleb128().expect_err("overflow"),
        SerError::IntegerOverflow { max_bits: 32 }
    );
}

#[test]
fn prefixed_bytes_roundtrip_and_underrun() {
    let payload = [1u8, 2, 3, 4, 5];
    let mut out = Serializer::new();
    out.write_prefixed_bytes(&payload);
    assert_eq!(out.as_bytes()[0], 5);
    let mut cursor = Deserializer::new(out.as_bytes());
    assert_eq!(cursor.read_prefixed_bytes().unwrap(), payload);

    // Length prefix promises more bytes than the buffer holds.
    let mut cursor = Deserializer::new(&[0x05, 1, 2, 3]);
    assert!(matches!(
        cursor.read_prefixed_bytes().expect_err("short buffer"),
        SerError::BufferUnderrun { .. }
    ));
}

#[test]
fn string_roundtrip_with_non_ascii() {
    let text = "héllo";
    let mut out = Serializer::new();
    out.write_string(text);
    let mut cursor = Deserializer::new(out.as_bytes());
    assert_eq!(cursor.read_string().unwrap(), text);
}

#[test]
fn corrupted_utf8_payload_is_rejected() {
    let mut bytes = "héllo".to_bytes().expect("encode");
    // Clobber the continuation byte of 'é'.
    bytes[3] = 0xff;
    let mut cursor = Deserializer::new(&bytes);
    assert_eq!(
        cursor.read_string().expect_err("invalid utf8"),
        SerError::InvalidUtf8
    );
}

#[test]
fn fixed_array_truncation_reports_underrun() {
    let bytes = [0u8; 31];
    let err = <[u8; 32]>::from_bytes(&bytes).expect_err("truncated");
    assert_eq!(
        err,
        SerError::BufferUnderrun {
            needed: 32,
            remaining: 31
        }
    );
}

#[test]
fn from_bytes_rejects_trailing_garbage() {
    let mut bytes = 7u32.to_bytes().expect("encode");
    bytes.push(0x00);
    let err = u32::from_bytes(&bytes).expect_err("trailing");
    assert_eq!(
        err,
        SerError::TrailingBytes {
            consumed: 4,
            remaining: 1
        }
    );
}

#[test]
fn option_roundtrip_and_invalid_presence_byte() {
    let present = Some(0xabcdu16);
    let absent: Option<u16> = None;
    assert_eq!(present.to_bytes().unwrap(), vec![0x01, 0xcd, 0xab]);
    assert_eq!(absent.to_bytes().unwrap(), vec![0x00]);
    assert_eq!(
        Option::<u16>::from_bytes(&[0x01, 0xcd, 0xab]).unwrap(),
        present
    );
    assert_eq!(Option::<u16>::from_bytes(&[0x00]).unwrap(), absent);

    let err = Option::<u16>::from_bytes(&[0x02, 0xcd, 0xab]).expect_err("bad flag");
    assert_eq!(err, SerError::InvalidFlagByte { byte: 0x02 });
}

#[test]
fn snapshot_mixed_primitives() {
    let mut out = Serializer::new();
    out.write_u16(0x1234);
    out.write_uleb128(300);
    out.write_string("héllo");
    out.write_bool(true);
    let hex = out
        .as_bytes()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ");
    assert_snapshot!("mixed_primitives_bytes", hex);
}

#[test]
fn decode_error_serializes_for_reporting() {
    let err = SerError::BufferUnderrun {
        needed: 4,
        remaining: 1,
    };
    assert_eq!(
        serde_json::to_string(&err).expect("json"),
        r#"{"BufferUnderrun":{"needed":4,"remaining":1}}"#
    );
}

proptest! {
    #[test]
    fn prop_u64_roundtrip(value in any::<u64>()) {
        let bytes = value.to_bytes().unwrap();
        prop_assert_eq!(u64::from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn prop_uleb128_roundtrip(value in any::<u32>()) {
        let mut out = Serializer::new();
        out.write_uleb128(value);
        let mut cursor = Deserializer::new(out.as_bytes());
        prop_assert_eq!(cursor.read_uleb128().unwrap(), value);
        prop_assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn prop_string_roundtrip(text in ".{0,64}") {
        let bytes = text.to_bytes().unwrap();
        prop_assert_eq!(String::from_bytes(&bytes).unwrap(), text);
    }

    #[test]
    fn prop_byte_vec_roundtrip(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
        let bytes = payload.to_bytes().unwrap();
        prop_assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), payload);
    }
}

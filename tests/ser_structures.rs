use bcs_auth::address::AccountAddress;
use bcs_auth::ser::{Deserializable, Deserializer, SerError, SerResult, Serializable, Serializer};
use bcs_auth::{from_bytes, to_bytes};

/// Transfer payload exercising field-order composition: fixed-width fields,
/// a varint-prefixed sequence and an optional tail, concatenated in declared
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TransferPayload {
    sender: AccountAddress,
    sequence_number: u64,
    amount: u128,
    recipients: Vec<AccountAddress>,
    memo: Option<String>,
}

impl Serializable for TransferPayload {
    fn serialize(&self, out: &mut Serializer) -> SerResult<()> {
        self.sender.serialize(out)?;
        self.sequence_number.serialize(out)?;
        self.amount.serialize(out)?;
        self.recipients.serialize(out)?;
        self.memo.serialize(out)
    }
}

impl Deserializable for TransferPayload {
    fn deserialize(input: &mut Deserializer<'_>) -> SerResult<Self> {
        Ok(Self {
            sender: input.read_value()?,
            sequence_number: input.read_value()?,
            amount: input.read_value()?,
            recipients: input.read_value()?,
            memo: input.read_value()?,
        })
    }
}

fn sample_payload() -> TransferPayload {
    TransferPayload {
        sender: AccountAddress::new([0x11; 32]),
        sequence_number: 42,
        amount: 1_000_000,
        recipients: vec![
            AccountAddress::new([0x22; 32]),
            AccountAddress::new([0x33; 32]),
        ],
        memo: Some("rent".to_owned()),
    }
}

#[test]
fn composite_roundtrip() {
    let payload = sample_payload();
    let bytes = to_bytes(&payload).expect("encode");
    let decoded: TransferPayload = from_bytes(&bytes).expect("decode");
    assert_eq!(decoded, payload);
}

#[test]
fn layout_matches_declared_field_order() {
    let payload = sample_payload();
    let bytes = to_bytes(&payload).expect("encode");
    let mut cursor = Deserializer::new(&bytes);

    assert_eq!(cursor.read_array::<32>().unwrap(), [0x11; 32]);
    assert_eq!(cursor.read_u64().unwrap(), 42);
    assert_eq!(cursor.read_u128().unwrap(), 1_000_000);
    assert_eq!(cursor.read_uleb128().unwrap(), 2, "recipient count");
    assert_eq!(cursor.read_array::<32>().unwrap(), [0x22; 32]);
    assert_eq!(cursor.read_array::<32>().unwrap(), [0x33; 32]);
    assert!(cursor.read_bool().unwrap(), "memo presence flag");
    assert_eq!(cursor.read_string().unwrap(), "rent");
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn absent_memo_encodes_as_single_zero_byte() {
    let mut payload = sample_payload();
    payload.memo = None;
    let bytes = to_bytes(&payload).expect("encode");
    assert_eq!(bytes.last(), Some(&0x00));
    let decoded: TransferPayload = from_bytes(&bytes).expect("decode");
    assert_eq!(decoded.memo, None);
}

#[test]
fn truncated_composite_reports_underrun() {
    let payload = sample_payload();
    let mut bytes = to_bytes(&payload).expect("encode");
    bytes.truncate(bytes.len() - 1);
    let err = from_bytes::<TransferPayload>(&bytes).expect_err("truncated");
    assert!(matches!(err, SerError::BufferUnderrun { .. }));
}

#[test]
fn trailing_bytes_after_composite_are_rejected() {
    let payload = sample_payload();
    let mut bytes = to_bytes(&payload).expect("encode");
    bytes.extend_from_slice(&[0xde, 0xad]);
    let err = from_bytes::<TransferPayload>(&bytes).expect_err("trailing");
    assert!(matches!(err, SerError::TrailingBytes { remaining: 2, .. }));
}

#[test]
fn encoding_is_deterministic_across_instances() {
    let payload = sample_payload();
    let first = to_bytes(&payload).expect("encode");
    let second = to_bytes(&payload.clone()).expect("encode");
    assert_eq!(first, second);
}

#[test]
fn nested_sequences_roundtrip() {
    let rows: Vec<Vec<u16>> = vec![vec![], vec![1], vec![2, 3, 4]];
    let bytes = to_bytes(&rows).expect("encode");
    // Outer count, then each inner count followed by its elements.
    assert_eq!(bytes[0], 3);
    let decoded: Vec<Vec<u16>> = from_bytes(&bytes).expect("decode");
    assert_eq!(decoded, rows);
}

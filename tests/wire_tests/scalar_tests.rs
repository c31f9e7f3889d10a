//! Scalar Field Codec Tests

use orderwire::wire::{
    decode_length_delimited, decode_varint_field, encode_length_delimited, encode_varint_field,
    length_delimited_len,
};
use orderwire::DecodeError;

// =============================================================================
// Length-Delimited Tests
// =============================================================================

#[test]
fn test_encode_length_delimited() {
    let mut buf = Vec::new();
    encode_length_delimited(b"hello", &mut buf);
    assert_eq!(buf, b"\x05hello");
    assert_eq!(length_delimited_len(5), buf.len());
}

#[test]
fn test_encode_empty_payload() {
    let mut buf = Vec::new();
    encode_length_delimited(b"", &mut buf);
    assert_eq!(buf, vec![0x00]);
}

#[test]
fn test_encode_long_payload_uses_multi_byte_length() {
    let payload = vec![0xAB; 200];
    let mut buf = Vec::new();
    encode_length_delimited(&payload, &mut buf);
    assert_eq!(&buf[..2], &[0xC8, 0x01]);
    assert_eq!(buf.len(), 202);
    assert_eq!(length_delimited_len(200), 202);
}

#[test]
fn test_decode_length_delimited_at_offset() {
    let buf = b"\x0A\x03abc\x01";
    let (payload, consumed) = decode_length_delimited(buf, 1).unwrap();
    assert_eq!(payload, b"abc");
    assert_eq!(consumed, 4);
}

#[test]
fn test_decode_length_delimited_binary_payload() {
    let payload: Vec<u8> = (0..=255).collect();
    let mut buf = Vec::new();
    encode_length_delimited(&payload, &mut buf);

    let (decoded, consumed) = decode_length_delimited(&buf, 0).unwrap();
    assert_eq!(decoded, payload.as_slice());
    assert_eq!(consumed, buf.len());
}

#[test]
fn test_decode_truncated_payload() {
    let buf = b"\x05hel";
    assert_eq!(
        decode_length_delimited(buf, 0),
        Err(DecodeError::TruncatedPayload {
            expected: 5,
            remaining: 3
        })
    );
}

#[test]
fn test_decode_huge_length_prefix_rejected_before_allocation() {
    // Length prefix of u64::MAX with a two-byte body
    let mut buf = vec![0xFF; 9];
    buf.push(0x01);
    buf.extend_from_slice(b"xy");

    let err = decode_length_delimited(&buf, 0).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TruncatedPayload {
            expected: u64::MAX,
            remaining: 2
        }
    );
    assert!(err.is_truncation());
}

#[test]
fn test_decode_missing_length() {
    assert_eq!(
        decode_length_delimited(&[], 0),
        Err(DecodeError::UnexpectedEndOfBuffer)
    );
}

// =============================================================================
// Varint Field Tests
// =============================================================================

#[test]
fn test_varint_field_pass_through() {
    let mut buf = Vec::new();
    encode_varint_field(150, &mut buf);
    assert_eq!(buf, vec![0x96, 0x01]);
    assert_eq!(decode_varint_field(&buf, 0).unwrap(), (150, 2));
}

#[test]
fn test_negative_int64_as_varint_field() {
    let mut buf = Vec::new();
    encode_varint_field(-1i64 as u64, &mut buf);
    assert_eq!(buf.len(), 10);

    let (value, consumed) = decode_varint_field(&buf, 0).unwrap();
    assert_eq!(value as i64, -1);
    assert_eq!(consumed, 10);
}

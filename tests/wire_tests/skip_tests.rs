//! Unknown-Field Skipper Tests
//!
//! These tests verify:
//! - Every wire type is skipped by exactly its payload length
//! - Truncated payloads fail instead of over-reading
//! - Schema-less iteration over raw fields

use orderwire::wire::{fields, skip_field, skip_unknown_field, WireType};
use orderwire::DecodeError;

// =============================================================================
// skip_field Tests
// =============================================================================

#[test]
fn test_skip_varint() {
    let buf = [0x08, 0xAC, 0x02, 0x10];
    assert_eq!(skip_field(&buf, 1, WireType::Varint).unwrap(), 2);
}

#[test]
fn test_skip_length_delimited() {
    let buf = b"\x12\x03abc\x18\x01";
    assert_eq!(skip_field(buf, 1, WireType::LengthDelimited).unwrap(), 4);
}

#[test]
fn test_skip_fixed_widths() {
    let buf = [0u8; 12];
    assert_eq!(skip_field(&buf, 0, WireType::Fixed64).unwrap(), 8);
    assert_eq!(skip_field(&buf, 0, WireType::Fixed32).unwrap(), 4);
}

#[test]
fn test_skip_fixed_truncated() {
    let buf = [0u8; 6];
    assert_eq!(
        skip_field(&buf, 0, WireType::Fixed64),
        Err(DecodeError::UnexpectedEndOfBuffer)
    );
    assert_eq!(
        skip_field(&buf, 3, WireType::Fixed32),
        Err(DecodeError::UnexpectedEndOfBuffer)
    );
}

#[test]
fn test_skip_group() {
    // Field 1 start group, { field 2 varint 5, field 3 "hi" }, field 1 end group
    let buf = [0x0B, 0x10, 0x05, 0x1A, 0x02, b'h', b'i', 0x0C, 0x20, 0x01];
    assert_eq!(skip_field(&buf, 1, WireType::StartGroup).unwrap(), 7);
}

#[test]
fn test_skip_nested_groups() {
    // start 1 { start 2 { field 3 varint } end 2 } end 1
    let buf = [0x0B, 0x13, 0x18, 0x01, 0x14, 0x0C];
    assert_eq!(skip_field(&buf, 1, WireType::StartGroup).unwrap(), 5);
}

#[test]
fn test_skip_unterminated_group() {
    let buf = [0x0B, 0x10, 0x05];
    assert_eq!(
        skip_field(&buf, 1, WireType::StartGroup),
        Err(DecodeError::UnexpectedEndOfBuffer)
    );
}

#[test]
fn test_skip_bare_end_group_is_malformed() {
    let buf = [0x0C];
    let err = skip_field(&buf, 1, WireType::EndGroup).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedMessage { .. }));
}

#[test]
fn test_skip_deeply_nested_groups_hits_limit() {
    let mut buf = vec![0x0B; 200];
    buf.extend(std::iter::repeat(0x0C).take(200));
    let err = skip_field(&buf, 1, WireType::StartGroup).unwrap_err();
    assert!(matches!(err, DecodeError::RecursionLimitExceeded(_)));
}

#[test]
fn test_skip_truncated_length_delimited() {
    let buf = b"\x12\x05ab";
    let err = skip_field(buf, 1, WireType::LengthDelimited).unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn test_skip_unknown_field_includes_tag() {
    let buf = b"\x0A\x02hi\x10\x01";
    let (tag, consumed) = skip_unknown_field(buf, 0).unwrap();
    assert_eq!(tag.field_number, 1);
    assert_eq!(consumed, 4);

    let (tag, consumed) = skip_unknown_field(buf, 4).unwrap();
    assert_eq!(tag.field_number, 2);
    assert_eq!(consumed, 2);
}

// =============================================================================
// Raw Field Iteration Tests
// =============================================================================

#[test]
fn test_fields_iterates_in_order() {
    let buf = b"\x0A\x02hi\x10\x96\x01\x1D\x01\x02\x03\x04";
    let scanned: Vec<_> = fields(buf).collect::<Result<_, _>>().unwrap();

    assert_eq!(scanned.len(), 3);

    assert_eq!(scanned[0].tag.field_number, 1);
    assert_eq!(scanned[0].offset, 0);
    assert_eq!(scanned[0].payload(), b"\x02hi");

    assert_eq!(scanned[1].tag.wire_type, WireType::Varint);
    assert_eq!(scanned[1].raw, b"\x10\x96\x01");

    assert_eq!(scanned[2].tag.field_number, 3);
    assert_eq!(scanned[2].tag.wire_type, WireType::Fixed32);
    assert_eq!(scanned[2].payload(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_fields_stops_after_error() {
    let buf = b"\x0A\x02hi\x12\x09short";
    let mut iter = fields(buf);

    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}

#[test]
fn test_fields_empty_buffer() {
    assert_eq!(fields(&[]).count(), 0);
}

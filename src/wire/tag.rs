//! Field tag codec
//!
//! Packs a (field number, wire type) pair into one varint.

use bytes::BufMut;

use crate::error::{DecodeError, EncodeError};

use super::varint::{decode_varint, encode_varint, encoded_len_varint};
use super::WireType;

/// Largest field number that fits in the 29 bits reserved for it
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// A decoded field tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl Tag {
    /// Create a tag, rejecting field numbers outside `1..=MAX_FIELD_NUMBER`
    pub fn new(field_number: u32, wire_type: WireType) -> Result<Self, EncodeError> {
        if field_number == 0 || field_number > MAX_FIELD_NUMBER {
            return Err(EncodeError::FieldNumberOutOfRange(field_number));
        }
        Ok(Self {
            field_number,
            wire_type,
        })
    }

    /// The packed varint value
    pub fn to_varint(self) -> u64 {
        (u64::from(self.field_number) << 3) | self.wire_type as u64
    }

    /// Whether a known field may carry this wire type
    pub fn is_recognized(self) -> bool {
        self.wire_type.is_recognized()
    }
}

/// Encode a tag for `field_number` / `wire_type` into `buf`
pub fn encode_tag(
    field_number: u32,
    wire_type: WireType,
    buf: &mut (impl BufMut + ?Sized),
) -> Result<(), EncodeError> {
    let tag = Tag::new(field_number, wire_type)?;
    encode_varint(tag.to_varint(), buf);
    Ok(())
}

/// Encode a tag whose field number comes from a checked schema table
pub(crate) fn put_tag(field_number: u32, wire_type: WireType, buf: &mut (impl BufMut + ?Sized)) {
    encode_varint((u64::from(field_number) << 3) | wire_type as u64, buf);
}

/// Encoded size of a tag for `field_number` (wire type never changes it)
pub fn tag_len(field_number: u32) -> usize {
    encoded_len_varint(u64::from(field_number) << 3)
}

/// Split a tag varint into field number and wire type
pub fn decode_tag(value: u64) -> Result<Tag, DecodeError> {
    let wire_type = WireType::try_from((value & 0x7) as u8)?;
    let field_number = value >> 3;

    if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
        return Err(DecodeError::malformed(
            "tag",
            format!("illegal field number {} (wire type {})", field_number, wire_type),
        ));
    }

    Ok(Tag {
        field_number: field_number as u32,
        wire_type,
    })
}

/// Read and decode a tag at `offset`; returns the tag and bytes consumed
pub fn read_tag(buf: &[u8], offset: usize) -> Result<(Tag, usize), DecodeError> {
    let (value, consumed) = decode_varint(buf, offset)?;
    Ok((decode_tag(value)?, consumed))
}

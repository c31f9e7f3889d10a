//! Unknown-field skipper
//!
//! Steps over a field's payload using nothing but its wire type, so fields
//! from newer schema versions can be carried along without interpretation.

use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::error::DecodeError;

use super::scalar::decode_length_delimited;
use super::tag::{read_tag, Tag};
use super::varint::decode_varint;
use super::WireType;

/// Skip the payload of a field whose tag has already been read
///
/// `offset` points just past the tag. Returns the payload's byte count.
pub fn skip_field(buf: &[u8], offset: usize, wire_type: WireType) -> Result<usize, DecodeError> {
    skip_field_with_limit(buf, offset, wire_type, DEFAULT_RECURSION_LIMIT)
}

/// Skip a whole field, tag included, starting at `offset`
pub fn skip_unknown_field(buf: &[u8], offset: usize) -> Result<(Tag, usize), DecodeError> {
    let (tag, tag_len) = read_tag(buf, offset)?;
    if tag.wire_type == WireType::EndGroup {
        return Err(unmatched_end_group());
    }
    let payload_len = skip_field(buf, offset + tag_len, tag.wire_type)?;
    Ok((tag, tag_len + payload_len))
}

/// `skip_field` with an explicit bound on group nesting
pub(crate) fn skip_field_with_limit(
    buf: &[u8],
    offset: usize,
    wire_type: WireType,
    depth_limit: usize,
) -> Result<usize, DecodeError> {
    skip_payload(buf, offset, wire_type, 0, depth_limit)
}

fn skip_payload(
    buf: &[u8],
    offset: usize,
    wire_type: WireType,
    depth: usize,
    depth_limit: usize,
) -> Result<usize, DecodeError> {
    match wire_type {
        WireType::Varint => decode_varint(buf, offset).map(|(_, consumed)| consumed),
        WireType::LengthDelimited => {
            decode_length_delimited(buf, offset).map(|(_, consumed)| consumed)
        }
        WireType::Fixed64 => skip_fixed(buf, offset, 8),
        WireType::Fixed32 => skip_fixed(buf, offset, 4),
        WireType::StartGroup => {
            if depth >= depth_limit {
                return Err(DecodeError::RecursionLimitExceeded(depth_limit));
            }

            let mut pos = offset;
            loop {
                let (tag, tag_len) = read_tag(buf, pos)?;
                pos += tag_len;
                if tag.wire_type == WireType::EndGroup {
                    return Ok(pos - offset);
                }
                pos += skip_payload(buf, pos, tag.wire_type, depth + 1, depth_limit)?;
            }
        }
        WireType::EndGroup => Err(unmatched_end_group()),
    }
}

fn skip_fixed(buf: &[u8], offset: usize, width: usize) -> Result<usize, DecodeError> {
    if buf.len().saturating_sub(offset) < width {
        return Err(DecodeError::UnexpectedEndOfBuffer);
    }
    Ok(width)
}

fn unmatched_end_group() -> DecodeError {
    DecodeError::malformed("group", "end group without matching start group")
}

// =============================================================================
// Raw field iteration
// =============================================================================

/// A field located in a buffer without any schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub tag: Tag,
    /// Offset of the tag within the scanned buffer
    pub offset: usize,
    /// Tag and payload bytes, exactly as they appeared
    pub raw: &'a [u8],
    tag_len: usize,
}

impl<'a> RawField<'a> {
    /// Payload bytes following the tag
    pub fn payload(&self) -> &'a [u8] {
        &self.raw[self.tag_len..]
    }
}

/// Iterator over the top-level fields of a buffer
///
/// Yields an error once and then stops if the buffer is malformed.
#[derive(Debug, Clone)]
pub struct RawFields<'a> {
    buf: &'a [u8],
    offset: usize,
    failed: bool,
}

/// Scan `buf` field by field without a schema
pub fn fields(buf: &[u8]) -> RawFields<'_> {
    RawFields {
        buf,
        offset: 0,
        failed: false,
    }
}

impl<'a> Iterator for RawFields<'a> {
    type Item = Result<RawField<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.buf.len() {
            return None;
        }

        let buf = self.buf;
        let start = self.offset;
        let scanned = read_tag(buf, start).and_then(|(tag, tag_len)| {
            if tag.wire_type == WireType::EndGroup {
                return Err(unmatched_end_group());
            }
            let payload_len = skip_field(buf, start + tag_len, tag.wire_type)?;
            Ok((tag, tag_len, payload_len))
        });

        match scanned {
            Ok((tag, tag_len, payload_len)) => {
                self.offset = start + tag_len + payload_len;
                Some(Ok(RawField {
                    tag,
                    offset: start,
                    raw: &buf[start..self.offset],
                    tag_len,
                }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

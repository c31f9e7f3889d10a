//! Message codec
//!
//! Generic encode, size estimation and decode for any [`Message`].
//! `encoded_len` walks the same fields with the same omit-default rules as
//! `encode_into`, so a buffer reserved with it is always exactly filled.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::config::{DecodeOptions, UnknownFieldPolicy};
use crate::error::DecodeError;
use crate::wire::{
    self, decode_length_delimited, decode_varint_field, encode_length_delimited,
    encode_varint_field, encoded_len_varint, length_delimited_len, read_tag, tag_len, WireType,
};

use super::schema::{find_field, FieldDescriptor};
use super::{FieldMut, FieldRef, Message};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into a new buffer of exactly `encoded_len(record)` bytes
pub fn encode<M: Message>(record: &M) -> Vec<u8> {
    let len = encoded_len(record);
    let mut buf = Vec::with_capacity(len);
    encode_into(record, &mut buf);
    debug_assert_eq!(buf.len(), len, "{} size estimate diverged", M::NAME);
    buf
}

/// Encode a record into an immutable `Bytes`
pub fn encode_to_bytes<M: Message>(record: &M) -> Bytes {
    let mut buf = BytesMut::with_capacity(encoded_len(record));
    encode_into(record, &mut buf);
    buf.freeze()
}

/// Append the encoding of a record to `buf`
pub fn encode_into<M: Message>(record: &M, buf: &mut (impl BufMut + ?Sized)) {
    for descriptor in M::FIELDS {
        if let Some(value) = record.field(descriptor.number) {
            encode_field(descriptor, value, buf);
        }
    }
    buf.put_slice(record.unknown_fields().as_bytes());
}

fn encode_field(descriptor: &FieldDescriptor, value: FieldRef<'_>, buf: &mut (impl BufMut + ?Sized)) {
    let number = descriptor.number;
    match value {
        FieldRef::String(s) => {
            if !s.is_empty() {
                wire::put_tag(number, WireType::LengthDelimited, buf);
                encode_length_delimited(s.as_bytes(), buf);
            }
        }
        FieldRef::Bytes(b) => {
            if !b.is_empty() {
                wire::put_tag(number, WireType::LengthDelimited, buf);
                encode_length_delimited(b, buf);
            }
        }
        FieldRef::Int64(v) => {
            if v != 0 {
                wire::put_tag(number, WireType::Varint, buf);
                // Negative values take the full ten bytes
                encode_varint_field(v as u64, buf);
            }
        }
        FieldRef::UInt64(v) => {
            if v != 0 {
                wire::put_tag(number, WireType::Varint, buf);
                encode_varint_field(v, buf);
            }
        }
        FieldRef::RepeatedString(items) => {
            for item in items {
                wire::put_tag(number, WireType::LengthDelimited, buf);
                encode_length_delimited(item.as_bytes(), buf);
            }
        }
        FieldRef::RepeatedMessage(items) => {
            for index in 0..items.count() {
                wire::put_tag(number, WireType::LengthDelimited, buf);
                encode_varint_field(items.encoded_len_at(index) as u64, buf);
                // `&mut B` is a sized BufMut even when B is not
                let mut target = &mut *buf;
                items.encode_at(index, &mut target);
            }
        }
    }
}

// =============================================================================
// Size Estimation
// =============================================================================

/// Exact encoded size of a record
pub fn encoded_len<M: Message>(record: &M) -> usize {
    let known: usize = M::FIELDS
        .iter()
        .filter_map(|descriptor| {
            record
                .field(descriptor.number)
                .map(|value| field_len(descriptor, value))
        })
        .sum();
    known + record.unknown_fields().len()
}

fn field_len(descriptor: &FieldDescriptor, value: FieldRef<'_>) -> usize {
    let tag = tag_len(descriptor.number);
    match value {
        FieldRef::String(s) if !s.is_empty() => tag + length_delimited_len(s.len()),
        FieldRef::Bytes(b) if !b.is_empty() => tag + length_delimited_len(b.len()),
        FieldRef::Int64(v) if v != 0 => tag + encoded_len_varint(v as u64),
        FieldRef::UInt64(v) if v != 0 => tag + encoded_len_varint(v),
        FieldRef::RepeatedString(items) => items
            .iter()
            .map(|item| tag + length_delimited_len(item.len()))
            .sum(),
        FieldRef::RepeatedMessage(items) => (0..items.count())
            .map(|index| tag + length_delimited_len(items.encoded_len_at(index)))
            .sum(),
        // Defaults are omitted
        _ => 0,
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Nesting state threaded through a decode call
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    options: &'a DecodeOptions,
    depth: usize,
}

impl<'a> DecodeContext<'a> {
    fn new(options: &'a DecodeOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Context for a nested record one level down
    fn enter(self) -> Result<Self, DecodeError> {
        if self.depth >= self.options.recursion_limit {
            return Err(DecodeError::RecursionLimitExceeded(
                self.options.recursion_limit,
            ));
        }
        Ok(Self {
            options: self.options,
            depth: self.depth + 1,
        })
    }

    fn remaining_depth(&self) -> usize {
        self.options.recursion_limit.saturating_sub(self.depth)
    }
}

/// Decode a record with default options
pub fn decode<M: Message>(buf: &[u8]) -> Result<M, DecodeError> {
    decode_with(buf, &DecodeOptions::default())
}

/// Decode a record
///
/// Consumes the whole buffer. On error nothing is returned; there are no
/// partially decoded records. A length prefix running past the end of the
/// input is reported as `UnexpectedEndOfBuffer`.
pub fn decode_with<M: Message>(buf: &[u8], options: &DecodeOptions) -> Result<M, DecodeError> {
    if let Some(max) = options.max_message_size {
        if buf.len() > max {
            return Err(DecodeError::MessageTooLarge {
                size: buf.len(),
                max,
            });
        }
    }

    trace!(record = M::NAME, len = buf.len(), "decoding");

    let mut record = M::default();
    match merge(&mut record, buf, DecodeContext::new(options)).map_err(end_of_input) {
        Ok(()) => Ok(record),
        Err(e) => {
            debug!(record = M::NAME, error = %e, "decode failed");
            Err(e)
        }
    }
}

fn end_of_input(error: DecodeError) -> DecodeError {
    match error {
        DecodeError::TruncatedPayload { .. } => DecodeError::UnexpectedEndOfBuffer,
        other => other,
    }
}

/// Decode a nested record payload one level below `ctx`
pub(crate) fn decode_nested<M: Message>(
    buf: &[u8],
    ctx: DecodeContext<'_>,
) -> Result<M, DecodeError> {
    let ctx = ctx.enter()?;
    let mut record = M::default();
    merge(&mut record, buf, ctx)?;
    Ok(record)
}

fn merge<M: Message>(record: &mut M, buf: &[u8], ctx: DecodeContext<'_>) -> Result<(), DecodeError> {
    let mut offset = 0;

    while offset < buf.len() {
        let field_start = offset;
        let (tag, consumed) = read_tag(buf, offset)?;
        offset += consumed;

        if let Some(descriptor) = find_field(M::FIELDS, tag.field_number) {
            if tag.wire_type != descriptor.kind.wire_type() {
                return Err(DecodeError::malformed(
                    M::NAME,
                    format!(
                        "wrong wire type {} for field {} ({}), expected {}",
                        tag.wire_type,
                        descriptor.name,
                        descriptor.number,
                        descriptor.kind.wire_type()
                    ),
                ));
            }

            let slot = record.field_mut(descriptor.number).ok_or_else(|| {
                DecodeError::malformed(
                    M::NAME,
                    format!("no slot for declared field {}", descriptor.name),
                )
            })?;
            offset += merge_field::<M>(slot, buf, offset, ctx)?;
            continue;
        }

        if tag.wire_type == WireType::EndGroup {
            return Err(DecodeError::malformed(
                M::NAME,
                "end group without matching start group",
            ));
        }

        offset += wire::skip_field_with_limit(buf, offset, tag.wire_type, ctx.remaining_depth())?;

        debug!(
            record = M::NAME,
            field = tag.field_number,
            wire_type = %tag.wire_type,
            len = offset - field_start,
            "unknown field"
        );

        if ctx.options.unknown_fields == UnknownFieldPolicy::Preserve {
            record.unknown_fields_mut().push_raw(&buf[field_start..offset]);
        }
    }

    Ok(())
}

/// Decode one known field payload into its slot; returns bytes consumed
fn merge_field<M: Message>(
    slot: FieldMut<'_>,
    buf: &[u8],
    offset: usize,
    ctx: DecodeContext<'_>,
) -> Result<usize, DecodeError> {
    match slot {
        FieldMut::String(target) => {
            let (payload, consumed) = decode_length_delimited(buf, offset)?;
            *target = utf8::<M>(payload)?;
            Ok(consumed)
        }
        FieldMut::Bytes(target) => {
            let (payload, consumed) = decode_length_delimited(buf, offset)?;
            *target = Bytes::copy_from_slice(payload);
            Ok(consumed)
        }
        FieldMut::Int64(target) => {
            let (value, consumed) = decode_varint_field(buf, offset)?;
            *target = value as i64;
            Ok(consumed)
        }
        FieldMut::UInt64(target) => {
            let (value, consumed) = decode_varint_field(buf, offset)?;
            *target = value;
            Ok(consumed)
        }
        FieldMut::RepeatedString(target) => {
            let (payload, consumed) = decode_length_delimited(buf, offset)?;
            target.push(utf8::<M>(payload)?);
            Ok(consumed)
        }
        FieldMut::RepeatedMessage(target) => {
            let (payload, consumed) = decode_length_delimited(buf, offset)?;
            target.push_decoded(payload, ctx)?;
            Ok(consumed)
        }
    }
}

fn utf8<M: Message>(payload: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(payload)
        .map(str::to_owned)
        .map_err(|e| DecodeError::malformed(M::NAME, format!("invalid UTF-8 in string field: {}", e)))
}

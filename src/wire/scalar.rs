//! Scalar field payloads
//!
//! Length-delimited payloads carry strings, bytes and nested records;
//! varint payloads carry integers.

use bytes::BufMut;

use crate::error::DecodeError;

use super::varint::{decode_varint, encode_varint, encoded_len_varint};

/// Append `len(payload)` as a varint followed by the payload itself
pub fn encode_length_delimited(payload: &[u8], buf: &mut (impl BufMut + ?Sized)) {
    encode_varint(payload.len() as u64, buf);
    buf.put_slice(payload);
}

/// Encoded size of a length-delimited payload of `len` bytes
pub fn length_delimited_len(len: usize) -> usize {
    encoded_len_varint(len as u64) + len
}

/// Decode a length-delimited payload at `offset`
///
/// Returns a borrowed slice of the payload and the total bytes consumed
/// (length prefix included). The declared length is checked against the
/// remaining input before anything is sliced.
pub fn decode_length_delimited(buf: &[u8], offset: usize) -> Result<(&[u8], usize), DecodeError> {
    let (len, header) = decode_varint(buf, offset)?;
    let start = offset + header;
    let remaining = buf.len() - start;

    if len > remaining as u64 {
        return Err(DecodeError::TruncatedPayload {
            expected: len,
            remaining,
        });
    }

    let len = len as usize;
    Ok((&buf[start..start + len], header + len))
}

/// Append an integer payload
pub fn encode_varint_field(value: u64, buf: &mut (impl BufMut + ?Sized)) {
    encode_varint(value, buf);
}

/// Decode an integer payload at `offset`
pub fn decode_varint_field(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    decode_varint(buf, offset)
}

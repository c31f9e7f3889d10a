//! Varint codec
//!
//! Unsigned 64-bit integers, 7 payload bits per byte, least significant
//! group first. Bit 7 of each byte is the continuation flag.

use bytes::BufMut;

use crate::error::DecodeError;

/// Longest possible encoding of a u64
pub const MAX_VARINT_LEN: usize = 10;

/// Append the varint encoding of `value` to `buf`
pub fn encode_varint(mut value: u64, buf: &mut (impl BufMut + ?Sized)) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Number of bytes `encode_varint` emits for `value`
pub fn encoded_len_varint(value: u64) -> usize {
    // (bit length + 6) / 7, with zero taking one byte
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Decode a varint starting at `offset`
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    let bytes = buf.get(offset..).ok_or(DecodeError::UnexpectedEndOfBuffer)?;

    let mut value = 0u64;
    for (i, &byte) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        // The tenth byte may only contribute the single remaining bit
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(DecodeError::IntegerOverflow);
        }

        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte < 0x80 {
            return Ok((value, i + 1));
        }
    }

    // Fewer than ten bytes and none of them terminated the value
    Err(DecodeError::UnexpectedEndOfBuffer)
}

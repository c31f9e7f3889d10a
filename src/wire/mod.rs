//! Wire Module
//!
//! Low-level primitives of the binary wire format. Every record is a flat
//! sequence of fields; every field is a tag followed by a payload.
//!
//! ## Field Format
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────┐
//! │ Tag (varint)             │ Payload                              │
//! │ (field_number << 3) | wt │                                      │
//! └──────────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! ### Payload by Wire Type
//! - 0 VARINT:           varint value
//! - 1 FIXED64:          8 raw bytes (skipped only)
//! - 2 LENGTH_DELIMITED: varint length + that many raw bytes
//! - 3 START_GROUP:      nested fields up to the matching END_GROUP (skipped only)
//! - 4 END_GROUP:        empty
//! - 5 FIXED32:          4 raw bytes (skipped only)
//!
//! Known record fields only ever use VARINT and LENGTH_DELIMITED; the other
//! wire types are understood just well enough to step over them.

mod varint;
mod tag;
mod scalar;
mod skip;

use std::fmt;

use crate::error::DecodeError;

pub use varint::{decode_varint, encode_varint, encoded_len_varint, MAX_VARINT_LEN};
pub use tag::{decode_tag, encode_tag, read_tag, tag_len, Tag, MAX_FIELD_NUMBER};
pub use scalar::{
    decode_length_delimited, decode_varint_field, encode_length_delimited, encode_varint_field,
    length_delimited_len,
};
pub use skip::{fields, skip_field, skip_unknown_field, RawField, RawFields};

pub(crate) use tag::put_tag;
pub(crate) use skip::skip_field_with_limit;

/// Wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    /// Whether known record fields may use this wire type
    pub fn is_recognized(self) -> bool {
        matches!(self, WireType::Varint | WireType::LengthDelimited)
    }
}

impl TryFrom<u8> for WireType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            other => Err(DecodeError::InvalidWireType(other)),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "start-group",
            WireType::EndGroup => "end-group",
            WireType::Fixed32 => "fixed32",
        };
        write!(f, "{} ({})", name, *self as u8)
    }
}

//! Message Module
//!
//! Record-level encoding and decoding on top of the wire primitives.
//!
//! A record type implements [`Message`] by providing:
//! - a static schema table (`FIELDS`), sorted by field number
//! - `field`: field number → borrowed, typed value
//! - `field_mut`: field number → typed slot to decode into
//! - access to its unknown-field tail
//!
//! The generic codec does everything else. There is no runtime registry
//! and no reflection; dispatch is a plain `match` per record type.
//!
//! ## Encoding rules
//! - Fields are written in ascending field-number order
//! - Empty strings/bytes, zero integers and empty sequences are omitted
//! - Repeated fields emit one tag+payload per element, in sequence order
//! - Unknown fields are appended verbatim after all known fields

mod schema;
mod unknown;
mod codec;
pub mod json;

use std::fmt;

use bytes::{BufMut, Bytes};

use crate::error::DecodeError;

pub use schema::{find_field, is_valid_schema, validate_schema, FieldDescriptor, FieldKind};
pub use unknown::UnknownFields;
pub use json::{from_json, to_json, RecordJson, UnknownFieldsJson};
pub use codec::{
    decode, decode_with, encode, encode_into, encode_to_bytes, encoded_len, DecodeContext,
};

/// A record with a fixed schema
pub trait Message: Default + Clone + PartialEq + fmt::Debug + Send + Sync {
    /// Record name used in errors and logs
    const NAME: &'static str;

    /// Schema table, strictly ascending by field number
    const FIELDS: &'static [FieldDescriptor];

    /// Borrow the value of a declared field
    fn field(&self, number: u32) -> Option<FieldRef<'_>>;

    /// Borrow the slot a declared field decodes into
    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>>;

    fn unknown_fields(&self) -> &UnknownFields;

    fn unknown_fields_mut(&mut self) -> &mut UnknownFields;

    /// Encode into a new, exactly sized buffer
    fn encode_to_vec(&self) -> Vec<u8> {
        encode(self)
    }

    /// Exact size of `encode_to_vec`
    fn encoded_len(&self) -> usize {
        encoded_len(self)
    }

    /// Decode with default options
    fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        decode(buf)
    }
}

/// Borrowed value of a record field
pub enum FieldRef<'a> {
    String(&'a str),
    Bytes(&'a [u8]),
    Int64(i64),
    UInt64(u64),
    RepeatedString(&'a [String]),
    RepeatedMessage(&'a dyn NestedMessages),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRef::String(_) => FieldKind::String,
            FieldRef::Bytes(_) => FieldKind::Bytes,
            FieldRef::Int64(_) => FieldKind::Int64,
            FieldRef::UInt64(_) => FieldKind::UInt64,
            FieldRef::RepeatedString(_) => FieldKind::RepeatedString,
            FieldRef::RepeatedMessage(_) => FieldKind::RepeatedMessage,
        }
    }
}

/// Mutable slot of a record field
pub enum FieldMut<'a> {
    String(&'a mut String),
    Bytes(&'a mut Bytes),
    Int64(&'a mut i64),
    UInt64(&'a mut u64),
    RepeatedString(&'a mut Vec<String>),
    RepeatedMessage(&'a mut dyn NestedMessagesMut),
}

impl FieldMut<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldMut::String(_) => FieldKind::String,
            FieldMut::Bytes(_) => FieldKind::Bytes,
            FieldMut::Int64(_) => FieldKind::Int64,
            FieldMut::UInt64(_) => FieldKind::UInt64,
            FieldMut::RepeatedString(_) => FieldKind::RepeatedString,
            FieldMut::RepeatedMessage(_) => FieldKind::RepeatedMessage,
        }
    }
}

/// Read side of a repeated nested-record field
pub trait NestedMessages {
    /// Number of elements
    fn count(&self) -> usize;

    /// Encoded size of element `index`, without tag or length prefix
    fn encoded_len_at(&self, index: usize) -> usize;

    /// Encode element `index` without tag or length prefix
    fn encode_at(&self, index: usize, buf: &mut dyn BufMut);
}

/// Write side of a repeated nested-record field
pub trait NestedMessagesMut {
    /// Decode one element from its payload and append it
    fn push_decoded(&mut self, payload: &[u8], ctx: DecodeContext<'_>) -> Result<(), DecodeError>;
}

impl<M: Message> NestedMessages for Vec<M> {
    fn count(&self) -> usize {
        self.len()
    }

    fn encoded_len_at(&self, index: usize) -> usize {
        encoded_len(&self[index])
    }

    fn encode_at(&self, index: usize, buf: &mut dyn BufMut) {
        encode_into(&self[index], buf)
    }
}

impl<M: Message> NestedMessagesMut for Vec<M> {
    fn push_decoded(&mut self, payload: &[u8], ctx: DecodeContext<'_>) -> Result<(), DecodeError> {
        let element = codec::decode_nested::<M>(payload, ctx)?;
        self.push(element);
        Ok(())
    }
}

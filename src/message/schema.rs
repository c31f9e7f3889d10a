//! Static schema tables
//!
//! Every record type declares its fields once, as a `'static` slice sorted
//! by field number. The table drives encode order and the wire-type check
//! on decode; it is never mutated.

use crate::error::EncodeError;
use crate::wire::{WireType, MAX_FIELD_NUMBER};

/// Declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Bytes,
    Int64,
    UInt64,
    RepeatedMessage,
    RepeatedString,
}

impl FieldKind {
    /// Wire type every occurrence of this field must carry
    pub const fn wire_type(self) -> WireType {
        match self {
            FieldKind::Int64 | FieldKind::UInt64 => WireType::Varint,
            FieldKind::String
            | FieldKind::Bytes
            | FieldKind::RepeatedMessage
            | FieldKind::RepeatedString => WireType::LengthDelimited,
        }
    }
}

/// One entry of a record's schema table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub number: u32,
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self { number, name, kind }
    }
}

/// Compile-time check for schema tables
///
/// Field numbers must lie in `1..=MAX_FIELD_NUMBER` and be strictly
/// ascending. Records assert this in a `const` item so a bad table fails
/// the build.
pub const fn is_valid_schema(fields: &[FieldDescriptor]) -> bool {
    let mut i = 0;
    let mut previous = 0;
    while i < fields.len() {
        let number = fields[i].number;
        if number == 0 || number > MAX_FIELD_NUMBER || number <= previous {
            return false;
        }
        previous = number;
        i += 1;
    }
    true
}

/// Runtime check for schema tables, naming the offending field number
pub fn validate_schema(fields: &[FieldDescriptor]) -> Result<(), EncodeError> {
    let mut previous = 0;
    for field in fields {
        if field.number == 0 || field.number > MAX_FIELD_NUMBER {
            return Err(EncodeError::FieldNumberOutOfRange(field.number));
        }
        if field.number <= previous {
            return Err(EncodeError::UnorderedFieldNumber(field.number));
        }
        previous = field.number;
    }
    Ok(())
}

/// Look up a field by number in a sorted schema table
pub fn find_field(fields: &[FieldDescriptor], number: u32) -> Option<&FieldDescriptor> {
    fields
        .binary_search_by_key(&number, |field| field.number)
        .ok()
        .map(|index| &fields[index])
}

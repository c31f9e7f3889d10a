//! Unknown field storage
//!
//! Raw tag+payload bytes of fields a record's schema does not know,
//! kept in the order they were read and written back after all known
//! fields.

use crate::error::DecodeError;
use crate::wire::{self, RawFields};

use super::schema::find_field;
use super::Message;

/// Opaque tail of unrecognized fields owned by a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnknownFields {
    raw: Vec<u8>,
}

impl UnknownFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap bytes to be carried as the unknown tail of an `M`
    ///
    /// The bytes must be a valid sequence of fields, none of which `M`
    /// declares. A declared field in the tail would be written twice on
    /// encode and read back over the known value.
    pub fn from_raw<M: Message>(raw: Vec<u8>) -> Result<Self, DecodeError> {
        for field in wire::fields(&raw) {
            let field = field?;
            if let Some(descriptor) = find_field(M::FIELDS, field.tag.field_number) {
                return Err(DecodeError::malformed(
                    M::NAME,
                    format!(
                        "unknown tail carries declared field {} ({})",
                        descriptor.name, descriptor.number
                    ),
                ));
            }
        }
        Ok(Self { raw })
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Size of the stored bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Stored fields, in encounter order
    pub fn iter(&self) -> RawFields<'_> {
        wire::fields(&self.raw)
    }

    /// Number of stored fields
    pub fn field_count(&self) -> usize {
        self.iter().filter(|field| field.is_ok()).count()
    }

    pub(crate) fn push_raw(&mut self, field: &[u8]) {
        self.raw.extend_from_slice(field);
    }
}

//! Binary attachment stored alongside an order (receipts, scans)

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::message::{
    is_valid_schema, FieldDescriptor, FieldKind, FieldMut, FieldRef, Message, UnknownFields,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAttachment {
    pub order_id: String,
    pub content: Bytes,
    pub tags: Vec<String>,
    /// Original size in bytes before any compression by the uploader
    pub size: u64,

    #[serde(skip)]
    pub unknown: UnknownFields,
}

const ORDER_ATTACHMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(1, "order_id", FieldKind::String),
    FieldDescriptor::new(2, "content", FieldKind::Bytes),
    FieldDescriptor::new(3, "tags", FieldKind::RepeatedString),
    FieldDescriptor::new(4, "size", FieldKind::UInt64),
];
const _: () = assert!(is_valid_schema(ORDER_ATTACHMENT_FIELDS));

impl Message for OrderAttachment {
    const NAME: &'static str = "OrderAttachment";
    const FIELDS: &'static [FieldDescriptor] = ORDER_ATTACHMENT_FIELDS;

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::String(&self.order_id)),
            2 => Some(FieldRef::Bytes(&self.content)),
            3 => Some(FieldRef::RepeatedString(&self.tags)),
            4 => Some(FieldRef::UInt64(self.size)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::String(&mut self.order_id)),
            2 => Some(FieldMut::Bytes(&mut self.content)),
            3 => Some(FieldMut::RepeatedString(&mut self.tags)),
            4 => Some(FieldMut::UInt64(&mut self.size)),
            _ => None,
        }
    }

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_fields_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }
}

//! Order record and single-order requests

use serde::{Deserialize, Serialize};

use crate::message::{
    is_valid_schema, FieldDescriptor, FieldKind, FieldMut, FieldRef, Message, UnknownFields,
};

/// A single order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub book_id: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,

    #[serde(skip)]
    pub unknown: UnknownFields,
}

const ORDER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(1, "id", FieldKind::String),
    FieldDescriptor::new(2, "book_id", FieldKind::String),
    FieldDescriptor::new(3, "description", FieldKind::String),
    FieldDescriptor::new(4, "created_at", FieldKind::String),
    FieldDescriptor::new(5, "updated_at", FieldKind::String),
    FieldDescriptor::new(6, "deleted_at", FieldKind::String),
];
const _: () = assert!(is_valid_schema(ORDER_FIELDS));

impl Order {
    pub fn new(id: impl Into<String>, book_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            book_id: book_id.into(),
            ..Default::default()
        }
    }
}

impl Message for Order {
    const NAME: &'static str = "Order";
    const FIELDS: &'static [FieldDescriptor] = ORDER_FIELDS;

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        let value = match number {
            1 => &self.id,
            2 => &self.book_id,
            3 => &self.description,
            4 => &self.created_at,
            5 => &self.updated_at,
            6 => &self.deleted_at,
            _ => return None,
        };
        Some(FieldRef::String(value))
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        let slot = match number {
            1 => &mut self.id,
            2 => &mut self.book_id,
            3 => &mut self.description,
            4 => &mut self.created_at,
            5 => &mut self.updated_at,
            6 => &mut self.deleted_at,
            _ => return None,
        };
        Some(FieldMut::String(slot))
    }

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_fields_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }
}

/// Lookup of one order by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOrderByIdReq {
    pub id: String,

    #[serde(skip)]
    pub unknown: UnknownFields,
}

const GET_ORDER_BY_ID_FIELDS: &[FieldDescriptor] =
    &[FieldDescriptor::new(1, "id", FieldKind::String)];
const _: () = assert!(is_valid_schema(GET_ORDER_BY_ID_FIELDS));

impl GetOrderByIdReq {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            unknown: UnknownFields::new(),
        }
    }
}

impl Message for GetOrderByIdReq {
    const NAME: &'static str = "GetOrderByIdReq";
    const FIELDS: &'static [FieldDescriptor] = GET_ORDER_BY_ID_FIELDS;

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::String(&self.id)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::String(&mut self.id)),
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

/// Response without a body (delete/update acknowledgements)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResp {
    #[serde(skip)]
    pub unknown: UnknownFields,
}

impl Message for EmptyResp {
    const NAME: &'static str = "EmptyResp";
    const FIELDS: &'static [FieldDescriptor] = &[];

    fn field(&self, _number: u32) -> Option<FieldRef<'_>> {
        None
    }

    fn field_mut(&mut self, _number: u32) -> Option<FieldMut<'_>> {
        None
    }

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown
    }

    fn unknown_fields_mut(&mut self) -> &mut UnknownFields {
        &mut self.unknown
    }
}

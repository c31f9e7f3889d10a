//! Paged order listing

use serde::{Deserialize, Serialize};

use crate::message::{
    is_valid_schema, FieldDescriptor, FieldKind, FieldMut, FieldRef, Message, UnknownFields,
};

use super::Order;

/// Request for a page of orders, optionally filtered by book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOrderReq {
    pub book_id: String,
    pub page: i64,
    pub limit: i64,

    #[serde(skip)]
    pub unknown: UnknownFields,
}

const LIST_ORDER_REQ_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(1, "book_id", FieldKind::String),
    FieldDescriptor::new(2, "page", FieldKind::Int64),
    FieldDescriptor::new(3, "limit", FieldKind::Int64),
];
const _: () = assert!(is_valid_schema(LIST_ORDER_REQ_FIELDS));

impl ListOrderReq {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }
}

impl Message for ListOrderReq {
    const NAME: &'static str = "ListOrderReq";
    const FIELDS: &'static [FieldDescriptor] = LIST_ORDER_REQ_FIELDS;

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::String(&self.book_id)),
            2 => Some(FieldRef::Int64(self.page)),
            3 => Some(FieldRef::Int64(self.limit)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::String(&mut self.book_id)),
            2 => Some(FieldMut::Int64(&mut self.page)),
            3 => Some(FieldMut::Int64(&mut self.limit)),
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

/// One page of orders plus the total match count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOrderResp {
    pub orders: Vec<Order>,
    pub count: i64,

    #[serde(skip)]
    pub unknown: UnknownFields,
}

const LIST_ORDER_RESP_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(1, "orders", FieldKind::RepeatedMessage),
    FieldDescriptor::new(2, "count", FieldKind::Int64),
];
const _: () = assert!(is_valid_schema(LIST_ORDER_RESP_FIELDS));

impl ListOrderResp {
    /// Response holding `orders`, with `count` set to their number
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let count = orders.len() as i64;
        Self {
            orders,
            count,
            unknown: UnknownFields::new(),
        }
    }
}

impl Message for ListOrderResp {
    const NAME: &'static str = "ListOrderResp";
    const FIELDS: &'static [FieldDescriptor] = LIST_ORDER_RESP_FIELDS;

    fn field(&self, number: u32) -> Option<FieldRef<'_>> {
        match number {
            1 => Some(FieldRef::RepeatedMessage(&self.orders)),
            2 => Some(FieldRef::Int64(self.count)),
            _ => None,
        }
    }

    fn field_mut(&mut self, number: u32) -> Option<FieldMut<'_>> {
        match number {
            1 => Some(FieldMut::RepeatedMessage(&mut self.orders)),
            2 => Some(FieldMut::Int64(&mut self.count)),
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

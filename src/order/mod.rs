//! Order Service Records
//!
//! Data-transfer records exchanged with the order service. Field numbers
//! are permanent; a removed field's number must never be reused.
//!
//! ```text
//! Order            1 id  2 book_id  3 description  4 created_at  5 updated_at  6 deleted_at
//! GetOrderByIdReq  1 id
//! ListOrderReq     1 book_id  2 page (int64)  3 limit (int64)
//! ListOrderResp    1 orders (repeated Order)  2 count (int64)
//! OrderAttachment  1 order_id  2 content (bytes)  3 tags (repeated string)  4 size (uint64)
//! EmptyResp        (no fields)
//! ```

mod order;
mod list;
mod attachment;

pub use order::{EmptyResp, GetOrderByIdReq, Order};
pub use list::{ListOrderReq, ListOrderResp};
pub use attachment::OrderAttachment;

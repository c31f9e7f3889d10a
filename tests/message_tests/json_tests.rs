//! JSON View Tests
//!
//! These tests verify:
//! - Decoded records render with their unknown tail as count + hex
//! - The wrapped form reads back into an identical record
//! - Bare records are still accepted

use orderwire::message::{from_json, to_json, RecordJson};
use orderwire::order::{GetOrderByIdReq, ListOrderResp, Order};
use orderwire::{decode, encode, OrderWireError};
use serde_json::{json, Value};

// GetOrderByIdReq { id: "o1" } followed by unknown field 100 = "xxx"
const WITH_UNKNOWN: &str = "0a026f31a20603787878";

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_json_shape_includes_unknown_fields() {
    let bytes = hex::decode(WITH_UNKNOWN).unwrap();
    let req: GetOrderByIdReq = decode(&bytes).unwrap();

    let value: Value = serde_json::from_str(&to_json(&req).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "record": { "id": "o1" },
            "unknown_fields": { "count": 1, "hex": "a20603787878" }
        })
    );
}

#[test]
fn test_json_without_unknown_fields() {
    let order = Order::new("o1", "b1");
    let value: Value = serde_json::from_str(&to_json(&order).unwrap()).unwrap();

    assert_eq!(value["record"]["book_id"], "b1");
    assert_eq!(value["unknown_fields"]["count"], 0);
    assert_eq!(value["unknown_fields"]["hex"], "");
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_wrapped_json_round_trips_bytes() {
    let bytes = hex::decode(WITH_UNKNOWN).unwrap();
    let req: GetOrderByIdReq = decode(&bytes).unwrap();

    let parsed: GetOrderByIdReq = from_json(&to_json(&req).unwrap()).unwrap();
    assert_eq!(parsed, req);
    assert_eq!(encode(&parsed), bytes);
}

#[test]
fn test_nested_unknown_fields_survive_json() {
    let mut order = Order::new("o1", "b1");
    order.unknown = decode::<GetOrderByIdReq>(&hex::decode(WITH_UNKNOWN).unwrap())
        .unwrap()
        .unknown;
    let resp = ListOrderResp::from_orders(vec![order]);

    let parsed: ListOrderResp = from_json(&to_json(&resp).unwrap()).unwrap();
    assert_eq!(parsed, resp);
    assert_eq!(encode(&parsed), encode(&resp));
}

#[test]
fn test_bare_record_accepted() {
    let order: Order = from_json(r#"{"id": "o1", "book_id": "b1"}"#).unwrap();
    assert_eq!(order, Order::new("o1", "b1"));
}

#[test]
fn test_wrapper_without_unknown_fields_accepted() {
    let req: GetOrderByIdReq = from_json(r#"{"record": {"id": "o9"}}"#).unwrap();
    assert_eq!(req, GetOrderByIdReq::new("o9"));
}

#[test]
fn test_bad_record_in_wrapper_is_an_error() {
    let err = from_json::<Order>(r#"{"record": {"id": 5}}"#).unwrap_err();
    assert!(matches!(err, OrderWireError::Json(_)));
}

#[test]
fn test_invalid_unknown_hex_rejected() {
    let err = from_json::<Order>(r#"{"record": {}, "unknown_fields": {"hex": "zz"}}"#)
        .unwrap_err();
    assert!(matches!(err, OrderWireError::Hex(_)));
}

#[test]
fn test_declared_field_in_unknown_hex_rejected() {
    // 0a02 7a7a is Order.id = "zz"
    let err = from_json::<Order>(r#"{"record": {"id": "o1"}, "unknown_fields": {"hex": "0a027a7a"}}"#)
        .unwrap_err();
    assert!(matches!(err, OrderWireError::Decode(_)));
}

#[test]
fn test_record_json_new_counts_fields() {
    let bytes = hex::decode(WITH_UNKNOWN).unwrap();
    let view = RecordJson::new(decode::<GetOrderByIdReq>(&bytes).unwrap());
    assert_eq!(view.unknown_fields.count, 1);
    assert_eq!(view.record.id, "o1");
}

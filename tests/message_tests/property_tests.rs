//! Property Tests
//!
//! Round-trip, size exactness, truncation and unknown-field preservation
//! over arbitrary records.

use bytes::Bytes;
use orderwire::order::{GetOrderByIdReq, ListOrderReq, ListOrderResp, Order, OrderAttachment};
use orderwire::{decode, encode, encoded_len, DecodeError, Message};
use proptest::prelude::*;

fn arb_order() -> impl Strategy<Value = Order> {
    (
        ".{0,12}",
        ".{0,12}",
        ".{0,40}",
        "[0-9-]{0,10}",
        "[0-9-]{0,10}",
        "[0-9-]{0,10}",
    )
        .prop_map(|(id, book_id, description, created_at, updated_at, deleted_at)| Order {
            id,
            book_id,
            description,
            created_at,
            updated_at,
            deleted_at,
            ..Default::default()
        })
}

fn arb_list_req() -> impl Strategy<Value = ListOrderReq> {
    (".{0,12}", any::<i64>(), any::<i64>()).prop_map(|(book_id, page, limit)| ListOrderReq {
        book_id,
        page,
        limit,
        ..Default::default()
    })
}

fn arb_list_resp() -> impl Strategy<Value = ListOrderResp> {
    (prop::collection::vec(arb_order(), 0..6), any::<i64>()).prop_map(|(orders, count)| {
        ListOrderResp {
            orders,
            count,
            ..Default::default()
        }
    })
}

fn arb_attachment() -> impl Strategy<Value = OrderAttachment> {
    (
        ".{0,12}",
        prop::collection::vec(any::<u8>(), 0..300),
        prop::collection::vec(".{0,8}", 0..5),
        any::<u64>(),
    )
        .prop_map(|(order_id, content, tags, size)| OrderAttachment {
            order_id,
            content: Bytes::from(content),
            tags,
            size,
            ..Default::default()
        })
}

fn check_round_trip<M: Message>(record: &M) -> Result<(), TestCaseError> {
    let bytes = encode(record);
    prop_assert_eq!(encoded_len(record), bytes.len());
    prop_assert_eq!(&decode::<M>(&bytes).unwrap(), record);
    Ok(())
}

fn check_truncation<M: Message>(record: &M) -> Result<(), TestCaseError> {
    let bytes = encode(record);
    if !bytes.is_empty() {
        let err = decode::<M>(&bytes[..bytes.len() - 1]).unwrap_err();
        prop_assert_eq!(err, DecodeError::UnexpectedEndOfBuffer, "{} truncated", M::NAME);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_order_round_trip(order in arb_order()) {
        check_round_trip(&order)?;
    }

    #[test]
    fn prop_list_req_round_trip(req in arb_list_req()) {
        check_round_trip(&req)?;
    }

    #[test]
    fn prop_list_resp_round_trip(resp in arb_list_resp()) {
        check_round_trip(&resp)?;
    }

    #[test]
    fn prop_attachment_round_trip(attachment in arb_attachment()) {
        check_round_trip(&attachment)?;
    }

    #[test]
    fn prop_truncated_buffers_fail(resp in arb_list_resp(), attachment in arb_attachment()) {
        check_truncation(&resp)?;
        check_truncation(&attachment)?;
    }

    #[test]
    fn prop_older_schema_reproduces_bytes(order in arb_order()) {
        let original = encode(&order);
        let req: GetOrderByIdReq = decode(&original).unwrap();
        prop_assert_eq!(encode(&req), original);
    }

    #[test]
    fn prop_unknown_tail_counts_toward_size(resp in arb_list_resp()) {
        // Decode the response as a record that knows none of its fields
        let bytes = encode(&resp);
        let opaque: orderwire::order::EmptyResp = decode(&bytes).unwrap();
        prop_assert_eq!(encoded_len(&opaque), bytes.len());
        prop_assert_eq!(encode(&opaque), bytes);
    }
}

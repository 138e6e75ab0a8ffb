// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::*;
use oxigram_client::types::{LabeledPrice, ShippingOption};
use oxigram_client::{RequestError, Update, tl};

fn shipping_update(query_id: i64) -> tl::enums::Updates {
    tl::types::Updates {
        updates: vec![
            tl::types::UpdateBotShippingQuery {
                query_id,
                user_id: USER_ID,
                payload: b"order-7".to_vec(),
                shipping_address: tl::types::PostAddress {
                    street_line1: "1 Main St".to_string(),
                    street_line2: String::new(),
                    city: "Springfield".to_string(),
                    state: "IL".to_string(),
                    country_iso2: "US".to_string(),
                    post_code: "62701".to_string(),
                }
                .into(),
            }
            .into(),
        ],
        users: vec![user(USER_ID, "Alice")],
        chats: Vec::new(),
        date: 0,
        seq: 0,
    }
    .into()
}

fn options() -> Vec<ShippingOption> {
    vec![ShippingOption::new(
        "post",
        "Regular mail",
        vec![LabeledPrice::new("Shipping", 500), LabeledPrice::new("Box", 50)],
    )]
}

#[tokio::test]
async fn answer_shipping_query_with_options() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    assert!(
        client
            .answer_shipping_query("123456789", true, options(), None)
            .await
            .unwrap()
    );

    assert_eq!(
        sender.requests(),
        vec![tl::Request::MessagesSetBotShippingResults(
            tl::functions::messages::SetBotShippingResults {
                query_id: 123456789,
                error: None,
                shipping_options: Some(vec![
                    tl::types::ShippingOption {
                        id: "post".to_string(),
                        title: "Regular mail".to_string(),
                        prices: vec![
                            tl::types::LabeledPrice {
                                label: "Shipping".to_string(),
                                amount: 500,
                            }
                            .into(),
                            tl::types::LabeledPrice {
                                label: "Box".to_string(),
                                amount: 50,
                            }
                            .into(),
                        ],
                    }
                    .into()
                ]),
            }
        )]
    );
}

#[tokio::test]
async fn reject_shipping_query() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    client
        .answer_shipping_query("1", false, Vec::new(), Some("We do not ship there".to_string()))
        .await
        .unwrap();

    assert_eq!(
        sender.requests(),
        vec![tl::Request::MessagesSetBotShippingResults(
            tl::functions::messages::SetBotShippingResults {
                query_id: 1,
                error: Some("We do not ship there".to_string()),
                shipping_options: None,
            }
        )]
    );
}

#[tokio::test]
async fn accepted_shipping_needs_options() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    let err = client
        .answer_shipping_query("1", true, Vec::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::InvalidArgument(ref m) if m == "Shipping options required."));

    let err = client
        .answer_shipping_query("not-a-number", true, options(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::InvalidArgument(_)));

    assert!(sender.requests().is_empty());
}

#[tokio::test]
async fn shipping_query_answers_itself() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    let query = match client.parse_updates(shipping_update(99)).pop() {
        Some(Update::ShippingQuery(query)) => query,
        other => panic!("unexpected update: {other:?}"),
    };
    assert_eq!(query.id, "99");
    assert_eq!(query.invoice_payload, "order-7");
    assert_eq!(query.shipping_address.country_code, "US");
    assert_eq!(query.from_user.as_ref().map(|u| u.first_name()), Some("Alice"));

    assert!(query.answer(true, options(), None).await.unwrap());
    match &sender.requests()[0] {
        tl::Request::MessagesSetBotShippingResults(request) => assert_eq!(request.query_id, 99),
        other => panic!("unexpected request: {other:?}"),
    }
}

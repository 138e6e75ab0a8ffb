// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::*;
use oxigram_client::RequestError;
use oxigram_client::tl;

#[tokio::test]
async fn set_personal_channel() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    assert!(client.set_personal_channel(Some(MARKED_CHANNEL_ID)).await.unwrap());
    assert_eq!(
        sender.requests(),
        vec![tl::Request::AccountUpdatePersonalChannel(
            tl::functions::account::UpdatePersonalChannel {
                channel: tl::types::InputChannel {
                    channel_id: CHANNEL_ID,
                    access_hash: 0,
                }
                .into(),
            }
        )]
    );
}

#[tokio::test]
async fn remove_personal_channel() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    assert!(client.set_personal_channel(None::<i64>).await.unwrap());
    assert_eq!(
        sender.requests(),
        vec![tl::Request::AccountUpdatePersonalChannel(
            tl::functions::account::UpdatePersonalChannel {
                channel: tl::enums::InputChannel::Empty,
            }
        )]
    );
}

#[tokio::test]
async fn personal_channel_must_be_a_channel() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    assert!(!client.set_personal_channel(Some(USER_ID)).await.unwrap());
    assert!(!client.set_personal_channel(Some(-5i64)).await.unwrap());
    assert!(sender.requests().is_empty());

    let err = client
        .set_personal_channel(Some("@missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::PeerNotFound(_)));
}

#[tokio::test]
async fn personal_channel_from_marked_id_string() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    assert!(client.set_personal_channel(Some("-1000000000042")).await.unwrap());
    match &sender.requests()[0] {
        tl::Request::AccountUpdatePersonalChannel(request) => assert_eq!(
            request.channel,
            tl::types::InputChannel {
                channel_id: CHANNEL_ID,
                access_hash: 0,
            }
            .into()
        ),
        other => panic!("unexpected request: {other:?}"),
    }
}

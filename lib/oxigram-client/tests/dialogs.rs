// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::*;
use oxigram_client::tl;

fn dialog(peer: tl::enums::Peer, top_message: i32, unread_count: i32) -> tl::enums::Dialog {
    tl::types::Dialog {
        pinned: false,
        unread_mark: false,
        view_forum_as_messages: false,
        peer,
        top_message,
        read_inbox_max_id: 0,
        read_outbox_max_id: 0,
        unread_count,
        unread_mentions_count: 0,
        unread_reactions_count: 0,
        pts: None,
        folder_id: None,
        ttl_period: None,
    }
    .into()
}

fn pinned_dialogs(count: usize) -> tl::enums::messages::PeerDialogs {
    tl::types::messages::PeerDialogs {
        dialogs: (0..count)
            .map(|i| dialog(tl::types::PeerUser { user_id: i as i64 }.into(), 0, 0))
            .collect(),
        messages: Vec::new(),
        chats: Vec::new(),
        users: Vec::new(),
        state: tl::types::updates::State {
            pts: 0,
            qts: 0,
            date: 0,
            seq: 0,
            unread_count: 0,
        }
        .into(),
    }
    .into()
}

#[tokio::test]
async fn count_pinned_dialogs_in_folder() {
    let sender = ScriptedSender::new();
    sender.respond(pinned_dialogs(3));
    sender.respond(pinned_dialogs(1));
    let client = client(&sender);

    assert_eq!(client.get_dialogs_count(true, None).await.unwrap(), 3);
    assert_eq!(client.get_dialogs_count(true, Some(true)).await.unwrap(), 1);

    assert_eq!(
        sender.requests(),
        vec![
            tl::Request::MessagesGetPinnedDialogs(tl::functions::messages::GetPinnedDialogs {
                folder_id: 0
            }),
            tl::Request::MessagesGetPinnedDialogs(tl::functions::messages::GetPinnedDialogs {
                folder_id: 1
            }),
        ]
    );
}

#[tokio::test]
async fn count_dialogs_from_slice() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::messages::Dialogs::Slice(
        tl::types::messages::DialogsSlice {
            count: 250,
            dialogs: vec![dialog(user_peer(), 1, 0)],
            messages: Vec::new(),
            chats: Vec::new(),
            users: vec![user(USER_ID, "Alice")],
        },
    ));
    let client = client(&sender);

    assert_eq!(client.get_dialogs_count(false, Some(false)).await.unwrap(), 250);
    assert_eq!(
        sender.requests(),
        vec![tl::Request::MessagesGetDialogs(tl::functions::messages::GetDialogs {
            exclude_pinned: false,
            folder_id: Some(0),
            offset_date: 0,
            offset_id: 0,
            offset_peer: tl::enums::InputPeer::Empty,
            limit: 1,
            hash: 0,
        })]
    );
}

#[tokio::test]
async fn count_dialogs_from_full_list() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::messages::Dialogs::Dialogs(
        tl::types::messages::Dialogs {
            dialogs: vec![dialog(user_peer(), 1, 0), dialog(channel_peer(), 2, 0)],
            messages: Vec::new(),
            chats: Vec::new(),
            users: Vec::new(),
        },
    ));
    let client = client(&sender);

    assert_eq!(client.get_dialogs_count(false, None).await.unwrap(), 2);
}

#[tokio::test]
async fn iter_dialogs_attaches_top_messages() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::messages::Dialogs::Dialogs(
        tl::types::messages::Dialogs {
            dialogs: vec![
                dialog(user_peer(), 10, 2),
                dialog(channel_peer(), 20, 0),
                // Unknown chat, skipped.
                dialog(tl::types::PeerUser { user_id: 1 }.into(), 30, 0),
            ],
            messages: vec![
                message(10, user_peer(), "hi").into(),
                message(20, channel_peer(), "news").into(),
            ],
            chats: vec![channel(CHANNEL_ID, "News")],
            users: vec![user(USER_ID, "Alice")],
        },
    ));
    let client = client(&sender);

    let mut dialogs = client.iter_dialogs(None);

    let first = dialogs.next().await.unwrap().unwrap();
    assert_eq!(first.chat.id(), USER_ID);
    assert_eq!(first.chat.name(), "Alice");
    assert_eq!(first.unread_messages_count, 2);
    assert_eq!(first.top_message.as_ref().map(|m| m.text()), Some("hi"));

    let second = dialogs.next().await.unwrap().unwrap();
    assert_eq!(second.chat.id(), MARKED_CHANNEL_ID);
    assert_eq!(second.top_message.as_ref().map(|m| m.id()), Some(20));

    assert!(dialogs.next().await.unwrap().is_none());
    assert_eq!(dialogs.total().await.unwrap(), 3);
    assert_eq!(sender.requests().len(), 1);
}

#[tokio::test]
async fn iter_dialogs_respects_limit() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::messages::Dialogs::Slice(
        tl::types::messages::DialogsSlice {
            count: 10,
            dialogs: vec![dialog(user_peer(), 10, 0)],
            messages: vec![message(10, user_peer(), "hi").into()],
            chats: Vec::new(),
            users: vec![user(USER_ID, "Alice")],
        },
    ));
    let client = client(&sender);

    let mut dialogs = client.iter_dialogs(Some(true)).limit(1);

    assert!(dialogs.next().await.unwrap().is_some());
    assert!(dialogs.next().await.unwrap().is_none());

    match &sender.requests()[0] {
        tl::Request::MessagesGetDialogs(request) => {
            assert_eq!(request.limit, 1);
            assert_eq!(request.folder_id, Some(1));
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

fn dialogs_slice(
    count: i32,
    dialogs: Vec<tl::enums::Dialog>,
    messages: Vec<tl::enums::Message>,
) -> tl::enums::messages::Dialogs {
    tl::types::messages::DialogsSlice {
        count,
        dialogs,
        messages,
        chats: Vec::new(),
        users: vec![user(USER_ID, "Alice")],
    }
    .into()
}

#[tokio::test]
async fn next_page_starts_after_skipped_dialog() {
    let unknown: tl::enums::Peer = tl::types::PeerUser { user_id: 1 }.into();
    let sender = ScriptedSender::new();
    sender.respond(dialogs_slice(
        10,
        vec![dialog(user_peer(), 10, 0), dialog(unknown.clone(), 5, 0)],
        vec![
            message(10, user_peer(), "hi").into(),
            message(5, unknown, "who?").into(),
        ],
    ));
    sender.respond(dialogs_slice(10, Vec::new(), Vec::new()));
    let client = client(&sender);

    let mut dialogs = client.iter_dialogs(None).limit(2);

    assert_eq!(dialogs.next().await.unwrap().map(|d| d.chat.id()), Some(USER_ID));
    assert!(dialogs.next().await.unwrap().is_none());

    let requests = sender.requests();
    assert_eq!(requests.len(), 2);
    match &requests[1] {
        tl::Request::MessagesGetDialogs(request) => {
            assert_eq!(request.offset_id, 5);
            assert_eq!(request.offset_date, 1_700_000_005);
            assert_eq!(
                request.offset_peer,
                tl::types::InputPeerUser {
                    user_id: 1,
                    access_hash: 0,
                }
                .into()
            );
            assert_eq!(request.limit, 1);
            assert!(request.exclude_pinned);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn page_of_unknown_chats_keeps_iterating() {
    let first: tl::enums::Peer = tl::types::PeerUser { user_id: 1 }.into();
    let second: tl::enums::Peer = tl::types::PeerUser { user_id: 2 }.into();
    let sender = ScriptedSender::new();
    sender.respond(dialogs_slice(
        10,
        vec![dialog(first, 30, 0), dialog(second, 20, 0)],
        Vec::new(),
    ));
    sender.respond(dialogs_slice(
        10,
        vec![dialog(user_peer(), 10, 0)],
        vec![message(10, user_peer(), "hi").into()],
    ));
    let client = client(&sender);

    let mut dialogs = client.iter_dialogs(None).limit(2);

    let dialog = dialogs.next().await.unwrap().unwrap();
    assert_eq!(dialog.chat.name(), "Alice");
    assert!(dialogs.next().await.unwrap().is_none());

    let requests = sender.requests();
    assert_eq!(requests.len(), 2);
    match &requests[1] {
        tl::Request::MessagesGetDialogs(request) => {
            assert_eq!(request.offset_id, 20);
            assert_eq!(
                request.offset_peer,
                tl::types::InputPeerUser {
                    user_id: 2,
                    access_hash: 0,
                }
                .into()
            );
            assert_eq!(request.limit, 2);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

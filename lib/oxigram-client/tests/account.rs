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
use oxigram_client::types::{ChatRef, InputPrivacyRule, PrivacyKey};

fn rules(rules: Vec<tl::enums::PrivacyRule>, users: Vec<tl::enums::User>) -> tl::enums::account::PrivacyRules {
    tl::types::account::PrivacyRules {
        rules,
        chats: vec![channel(CHANNEL_ID, "News")],
        users,
    }
    .into()
}

#[tokio::test]
async fn get_privacy_reshapes_rules() {
    let sender = ScriptedSender::new();
    sender.respond(rules(
        vec![
            tl::enums::PrivacyRule::AllowContacts,
            tl::types::PrivacyValueDisallowUsers {
                users: vec![USER_ID, 12345],
            }
            .into(),
            tl::types::PrivacyValueAllowChatParticipants {
                chats: vec![CHANNEL_ID],
            }
            .into(),
            tl::enums::PrivacyRule::AllowCloseFriends,
        ],
        vec![user(USER_ID, "Alice")],
    ));
    let client = client(&sender);

    let rules = client.get_privacy(PrivacyKey::Status).await.unwrap();

    assert_eq!(
        sender.requests(),
        vec![tl::Request::AccountGetPrivacy(tl::functions::account::GetPrivacy {
            key: tl::enums::InputPrivacyKey::StatusTimestamp,
        })]
    );
    assert_eq!(rules.len(), 4);

    assert_eq!(rules[0].allow_contacts, Some(true));
    assert_eq!(rules[0].users, None);

    // The unknown user is skipped.
    assert_eq!(rules[1].allow_users, Some(false));
    let users = rules[1].users.as_ref().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name(), "Alice");

    assert_eq!(rules[2].allow_chats, Some(true));
    assert_eq!(rules[2].chats.as_ref().map(Vec::len), Some(1));

    assert_eq!(rules[3].allow_all, None);
    assert_eq!(rules[3].allow_contacts, None);
}

#[tokio::test]
async fn set_privacy_resolves_every_chat() {
    let sender = ScriptedSender::new();
    sender.respond(rules(vec![tl::enums::PrivacyRule::AllowAll], Vec::new()));
    let client = client(&sender);

    let rules = client
        .set_privacy(
            PrivacyKey::PhoneNumber,
            vec![
                InputPrivacyRule::AllowUsers(vec![ChatRef::Me, ChatRef::Id(USER_ID)]),
                InputPrivacyRule::DisallowChats(vec![ChatRef::Id(MARKED_CHANNEL_ID), ChatRef::Id(-5)]),
                InputPrivacyRule::AllowPremium,
            ],
        )
        .await
        .unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].allow_all, Some(true));
    assert_eq!(
        sender.requests(),
        vec![tl::Request::AccountSetPrivacy(tl::functions::account::SetPrivacy {
            key: tl::enums::InputPrivacyKey::PhoneNumber,
            rules: vec![
                tl::types::InputPrivacyValueAllowUsers {
                    users: vec![tl::enums::InputUser::UserSelf, input_user()],
                }
                .into(),
                tl::types::InputPrivacyValueDisallowChatParticipants {
                    chats: vec![CHANNEL_ID, 5],
                }
                .into(),
                tl::enums::InputPrivacyRule::AllowPremium,
            ],
        })]
    );
}

#[tokio::test]
async fn set_privacy_rejects_unresolvable_users() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    let err = client
        .set_privacy(
            PrivacyKey::Forwards,
            vec![InputPrivacyRule::AllowUsers(vec![ChatRef::from("@nobody")])],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::PeerNotFound(ChatRef::Username(name)) if name == "nobody"));
    assert!(sender.requests().is_empty());
}

#[tokio::test]
async fn set_privacy_rejects_groups_as_users() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    let err = client
        .set_privacy(
            PrivacyKey::PhoneCall,
            vec![InputPrivacyRule::DisallowUsers(vec![ChatRef::Id(MARKED_CHANNEL_ID)])],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::InvalidArgument(_)));
    assert!(sender.requests().is_empty());
}

#[tokio::test]
async fn account_ttl_round_trip() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::AccountDaysTtl::Ttl(tl::types::AccountDaysTtl {
        days: 180,
    }));
    sender.respond(true);
    let client = client(&sender);

    assert_eq!(client.get_account_ttl().await.unwrap(), 180);
    assert!(client.set_account_ttl(365).await.unwrap());

    assert_eq!(
        sender.requests()[1],
        tl::Request::AccountSetAccountTtl(tl::functions::account::SetAccountTtl {
            ttl: tl::types::AccountDaysTtl { days: 365 }.into(),
        })
    );
}

#[tokio::test]
async fn rpc_errors_name_the_failed_request() {
    let sender = ScriptedSender::new();
    sender.fail(400, "TTL_DAYS_INVALID");
    let client = client(&sender);

    let err = client.set_account_ttl(1).await.unwrap_err();

    assert!(err.is("TTL_DAYS_*"));
    match err {
        oxigram_client::InvocationError::Rpc(rpc) => {
            assert_eq!(rpc.caused_by.as_deref(), Some("account.setAccountTTL"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn mismatched_responses_are_reported() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    let client = client(&sender);

    let err = client.get_account_ttl().await.unwrap_err();

    assert!(matches!(
        err,
        oxigram_client::InvocationError::Deserialize(tl::UnexpectedResponse {
            expected: "AccountDaysTTL",
            got: "Bool",
        })
    ));
}

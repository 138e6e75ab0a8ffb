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
use oxigram_client::types::{ChatRef, InputText};

fn gift(id: i64, stars: i64) -> tl::enums::StarGift {
    tl::types::StarGift {
        limited: true,
        sold_out: false,
        birthday: false,
        id,
        sticker: tl::types::Document {
            id: id * 100,
            access_hash: 0,
            file_reference: Vec::new(),
            date: 0,
            mime_type: "application/x-tgsticker".to_string(),
            size: 0,
            thumbs: None,
            dc_id: 2,
            attributes: vec![
                tl::types::DocumentAttributeSticker {
                    mask: false,
                    alt: "🎁".to_string(),
                    stickerset: tl::enums::InputStickerSet::Empty,
                }
                .into(),
            ],
        }
        .into(),
        stars,
        availability_remains: Some(10),
        availability_total: Some(1000),
        convert_stars: stars / 2,
        first_sale_date: None,
        last_sale_date: None,
    }
    .into()
}

fn invoice() -> tl::enums::Invoice {
    tl::types::Invoice {
        test: false,
        name_requested: false,
        phone_requested: false,
        email_requested: false,
        shipping_address_requested: false,
        flexible: false,
        phone_to_provider: false,
        email_to_provider: false,
        recurring: false,
        currency: "XTR".to_string(),
        prices: vec![
            tl::types::LabeledPrice {
                label: "Gift".to_string(),
                amount: 50,
            }
            .into(),
        ],
        max_tip_amount: None,
        suggested_tip_amounts: None,
        terms_url: None,
    }
    .into()
}

fn paid() -> tl::enums::payments::PaymentResult {
    tl::types::payments::PaymentResult {
        updates: tl::enums::Updates::TooLong,
    }
    .into()
}

#[tokio::test]
async fn send_star_gift_pays_the_gift_form() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::PaymentForm::from(
        tl::types::payments::PaymentFormStarGift {
            form_id: 900,
            invoice: invoice(),
        },
    ));
    sender.respond(paid());
    let client = client(&sender);

    assert!(
        client
            .send_star_gift(USER_ID, 1, Some(InputText::new("Enjoy!")), true)
            .await
            .unwrap()
    );

    let expected_invoice: tl::enums::InputInvoice = tl::types::InputInvoiceStarGift {
        hide_name: true,
        user_id: input_user(),
        gift_id: 1,
        message: Some(
            tl::types::TextWithEntities {
                text: "Enjoy!".to_string(),
                entities: Vec::new(),
            }
            .into(),
        ),
    }
    .into();
    assert_eq!(
        sender.requests(),
        vec![
            tl::Request::PaymentsGetPaymentForm(tl::functions::payments::GetPaymentForm {
                invoice: expected_invoice.clone(),
                theme_params: None,
            }),
            tl::Request::PaymentsSendStarsForm(tl::functions::payments::SendStarsForm {
                form_id: 900,
                invoice: expected_invoice,
            }),
        ]
    );
}

#[tokio::test]
async fn send_star_gift_without_text() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::PaymentForm::from(
        tl::types::payments::PaymentFormStarGift {
            form_id: 901,
            invoice: invoice(),
        },
    ));
    sender.respond(paid());
    let client = client(&sender);

    client
        .send_star_gift("me", 2, Some(InputText::new("")), false)
        .await
        .unwrap();

    match &sender.requests()[0] {
        tl::Request::PaymentsGetPaymentForm(request) => assert_eq!(
            request.invoice,
            tl::types::InputInvoiceStarGift {
                hide_name: false,
                user_id: tl::enums::InputUser::UserSelf,
                gift_id: 2,
                message: None,
            }
            .into()
        ),
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn star_gifts_go_to_users_only() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    let err = client
        .send_star_gift(MARKED_CHANNEL_ID, 1, None, false)
        .await
        .unwrap_err();

    match err {
        RequestError::InvalidArgument(message) => assert_eq!(message, "chat must belong to a user."),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(sender.requests().is_empty());
}

#[tokio::test]
async fn payment_form_from_link_skips_resolution() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::PaymentForm::from(
        tl::types::payments::PaymentFormStars {
            form_id: 5,
            bot_id: USER_ID,
            title: "Coffee".to_string(),
            description: "A cup of coffee".to_string(),
            invoice: invoice(),
            users: vec![user(USER_ID, "Barista")],
        },
    ));
    let client = client(&sender);

    // Usernames are never found by the default resolver.
    let form = client
        .get_payment_form("@unknown", "https://t.me/$abcDEF-123")
        .await
        .unwrap();

    assert_eq!(form.id, 5);
    assert_eq!(form.title.as_deref(), Some("Coffee"));
    assert_eq!(form.bot.as_ref().map(|bot| bot.first_name().to_string()), Some("Barista".to_string()));
    assert_eq!(form.total_amount(), 50);
    assert_eq!(
        sender.requests(),
        vec![tl::Request::PaymentsGetPaymentForm(
            tl::functions::payments::GetPaymentForm {
                invoice: tl::types::InputInvoiceSlug {
                    slug: "abcDEF-123".to_string()
                }
                .into(),
                theme_params: None,
            }
        )]
    );
}

#[tokio::test]
async fn payment_form_from_message_resolves_chat() {
    let sender = ScriptedSender::new();
    let client = client(&sender);

    let err = client.get_payment_form("@shop_bot", 12).await.unwrap_err();
    assert!(matches!(err, RequestError::PeerNotFound(ChatRef::Username(_))));

    sender.respond(tl::enums::payments::PaymentForm::from(
        tl::types::payments::PaymentFormStarGift {
            form_id: 6,
            invoice: invoice(),
        },
    ));
    client.get_payment_form(MARKED_CHANNEL_ID, 12).await.unwrap();

    assert_eq!(
        sender.requests(),
        vec![tl::Request::PaymentsGetPaymentForm(
            tl::functions::payments::GetPaymentForm {
                invoice: tl::types::InputInvoiceMessage {
                    peer: input_channel_peer(),
                    msg_id: 12,
                }
                .into(),
                theme_params: None,
            }
        )]
    );
}

#[tokio::test]
async fn payment_needing_verification_fails() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::PaymentForm::from(
        tl::types::payments::PaymentFormStarGift {
            form_id: 7,
            invoice: invoice(),
        },
    ));
    sender.respond(tl::enums::payments::PaymentResult::from(
        tl::types::payments::PaymentVerificationNeeded {
            url: "https://example.com/verify".to_string(),
        },
    ));
    let client = client(&sender);

    let err = client
        .send_payment_form(MARKED_CHANNEL_ID, 3)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::InvalidArgument(ref m) if m.contains("example.com")));
}

#[tokio::test]
async fn get_star_gifts_lists_catalogue() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::StarGifts::from(
        tl::types::payments::StarGifts {
            hash: 1,
            gifts: vec![gift(1, 50), gift(2, 100)],
        },
    ));
    sender.respond(tl::enums::payments::StarGifts::NotModified);
    let client = client(&sender);

    let gifts = client.get_star_gifts().await.unwrap();
    assert_eq!(gifts.len(), 2);
    assert_eq!(gifts[1].id, 2);
    assert_eq!(gifts[1].price, 100);
    assert_eq!(gifts[1].convert_price, 50);
    assert_eq!(gifts[1].available_amount, Some(10));
    assert!(gifts[1].is_limited);
    assert_eq!(gifts[0].sticker.as_ref().map(|s| s.emoji()), Some("🎁"));
    assert_eq!(gifts[0].from_user, None);

    assert!(client.get_star_gifts().await.unwrap().is_empty());
}

#[tokio::test]
async fn catalogue_gifts_cannot_be_saved() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::StarGifts::from(
        tl::types::payments::StarGifts {
            hash: 1,
            gifts: vec![gift(1, 50)],
        },
    ));
    let client = client(&sender);

    let gifts = client.get_star_gifts().await.unwrap();
    let err = gifts[0].save().await.unwrap_err();

    assert!(matches!(err, RequestError::InvalidArgument(_)));
    assert_eq!(sender.requests().len(), 1);
}

fn user_gifts(
    count: i32,
    ids: Vec<i64>,
    next_offset: Option<&str>,
) -> tl::enums::payments::UserStarGifts {
    tl::types::payments::UserStarGifts {
        count,
        gifts: ids
            .into_iter()
            .map(|id| {
                tl::types::UserStarGift {
                    name_hidden: false,
                    unsaved: id % 2 == 0,
                    from_id: Some(USER_ID),
                    date: 1_700_000_000,
                    gift: gift(id, 10),
                    message: None,
                    msg_id: Some(id as i32 + 1000),
                    convert_stars: Some(8),
                }
                .into()
            })
            .collect(),
        next_offset: next_offset.map(str::to_string),
        users: vec![user(USER_ID, "Alice")],
    }
    .into()
}

#[tokio::test]
async fn iter_user_star_gifts_follows_offsets() {
    let sender = ScriptedSender::new();
    sender.respond(user_gifts(3, vec![1, 2], Some("next")));
    sender.respond(user_gifts(3, vec![3], None));
    let client = client(&sender);

    let mut gifts = client.iter_user_star_gifts(USER_ID).await.unwrap();
    let mut seen = Vec::new();
    while let Some(gift) = gifts.next().await.unwrap() {
        assert_eq!(gift.from_user.as_ref().map(|u| u.id()), Some(USER_ID));
        assert_eq!(gift.convert_price, 8);
        seen.push((gift.id, gift.is_saved));
    }

    assert_eq!(
        seen,
        vec![(1, Some(true)), (2, Some(false)), (3, Some(true))]
    );
    assert_eq!(gifts.total().await.unwrap(), 3);

    let requests = sender.requests();
    assert_eq!(requests.len(), 2);
    match (&requests[0], &requests[1]) {
        (
            tl::Request::PaymentsGetUserStarGifts(first),
            tl::Request::PaymentsGetUserStarGifts(second),
        ) => {
            assert_eq!(first.offset, "");
            assert_eq!(first.limit, 100);
            assert_eq!(second.offset, "next");
            assert_eq!(second.user_id, input_user());
        }
        other => panic!("unexpected requests: {other:?}"),
    }
}

#[tokio::test]
async fn received_gift_can_be_saved_and_converted() {
    let sender = ScriptedSender::new();
    sender.respond(user_gifts(1, vec![4], None));
    sender.respond(true);
    sender.respond(true);
    let client = client(&sender);

    let mut gifts = client.iter_user_star_gifts("me").await.unwrap();
    let gift = gifts.next().await.unwrap().unwrap();

    assert!(gift.save().await.unwrap());
    assert!(gift.convert().await.unwrap());

    let requests = sender.requests();
    assert_eq!(
        requests[1],
        tl::Request::PaymentsSaveStarGift(tl::functions::payments::SaveStarGift {
            unsave: false,
            user_id: tl::types::InputUser {
                user_id: USER_ID,
                access_hash: USER_ID * 10,
            }
            .into(),
            msg_id: 1004,
        })
    );
    assert!(matches!(
        &requests[2],
        tl::Request::PaymentsConvertStarGift(convert) if convert.msg_id == 1004
    ));
}

#[tokio::test]
async fn count_user_star_gifts() {
    let sender = ScriptedSender::new();
    sender.respond(user_gifts(42, vec![1], None));
    let client = client(&sender);

    assert_eq!(client.get_user_star_gifts_count(USER_ID).await.unwrap(), 42);
    match &sender.requests()[0] {
        tl::Request::PaymentsGetUserStarGifts(request) => assert_eq!(request.limit, 1),
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn show_hide_and_convert_by_message() {
    let sender = ScriptedSender::new();
    sender.respond(true);
    sender.respond(true);
    sender.respond(true);
    let client = client(&sender);

    assert!(client.show_star_gift(USER_ID, 55).await.unwrap());
    assert!(client.hide_star_gift(USER_ID, 55).await.unwrap());
    assert!(client.convert_star_gift(USER_ID, 55).await.unwrap());
    assert_eq!(
        sender.requests(),
        vec![
            tl::Request::PaymentsSaveStarGift(tl::functions::payments::SaveStarGift {
                unsave: false,
                user_id: input_user(),
                msg_id: 55,
            }),
            tl::Request::PaymentsSaveStarGift(tl::functions::payments::SaveStarGift {
                unsave: true,
                user_id: input_user(),
                msg_id: 55,
            }),
            tl::Request::PaymentsConvertStarGift(tl::functions::payments::ConvertStarGift {
                user_id: input_user(),
                msg_id: 55,
            }),
        ]
    );
}

#[tokio::test]
async fn gift_codes_accept_links() {
    let sender = ScriptedSender::new();
    sender.respond(tl::enums::payments::CheckedGiftCode::from(
        tl::types::payments::CheckedGiftCode {
            via_giveaway: true,
            from_id: Some(channel_peer()),
            giveaway_msg_id: Some(3),
            to_id: Some(USER_ID),
            date: 1_700_000_000,
            months: 6,
            used_date: None,
            chats: vec![channel(CHANNEL_ID, "News")],
            users: vec![user(USER_ID, "Alice")],
        },
    ));
    sender.respond(tl::enums::Updates::TooLong);
    let client = client(&sender);

    let code = client
        .check_gift_code("https://t.me/giftcode/Abc123")
        .await
        .unwrap();
    assert_eq!(code.months, 6);
    assert!(code.via_giveaway);
    assert!(!code.is_used());
    assert_eq!(code.from_chat.as_ref().map(|c| c.id()), Some(MARKED_CHANNEL_ID));
    assert_eq!(code.winner.as_ref().map(|u| u.id()), Some(USER_ID));

    assert!(client.apply_gift_code("t.me/+Abc123").await.unwrap());

    assert_eq!(
        sender.requests(),
        vec![
            tl::Request::PaymentsCheckGiftCode(tl::functions::payments::CheckGiftCode {
                slug: "Abc123".to_string()
            }),
            tl::Request::PaymentsApplyGiftCode(tl::functions::payments::ApplyGiftCode {
                slug: "Abc123".to_string()
            }),
        ]
    );
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, ChatMap, User};
use crate::utils::{self, Date};
use oxigram_tl_types as tl;

/// A Telegram Premium gift code, received through a service message.
#[derive(Clone, Debug, PartialEq)]
pub struct GiftCode {
    /// Number of months of subscription.
    pub months: i32,
    pub slug: String,
    pub text: Option<String>,
    pub entities: Option<Vec<tl::enums::MessageEntity>>,
    /// True if the code was won in a giveaway.
    pub via_giveaway: bool,
    /// True if the giveaway ended without a winner for this code.
    pub is_unclaimed: bool,
    /// The channel that created the code, if known.
    pub boosted_chat: Option<Chat>,
}

impl GiftCode {
    pub(crate) fn from_raw(action: tl::types::MessageActionGiftCode, chats: &ChatMap) -> Self {
        let (text, entities) = utils::text_with_entities(action.message);

        Self {
            months: action.months,
            slug: action.slug,
            text,
            entities,
            via_giveaway: action.via_giveaway,
            is_unclaimed: action.unclaimed,
            boosted_chat: action
                .boost_peer
                .as_ref()
                .and_then(|peer| chats.get(peer))
                .cloned(),
        }
    }

    /// Link that can be shared so others can apply the code.
    pub fn link(&self) -> String {
        format!("https://t.me/giftcode/{}", self.slug)
    }
}

/// Information about a gift code, as returned by
/// [`Client::check_gift_code`](crate::Client::check_gift_code).
#[derive(Clone, Debug, PartialEq)]
pub struct CheckedGiftCode {
    pub date: Date,
    pub months: i32,
    pub via_giveaway: bool,
    /// The chat that created the code.
    pub from_chat: Option<Chat>,
    pub giveaway_message_id: Option<i32>,
    /// The user the code was given to, if any.
    pub winner: Option<User>,
    /// When the code was applied, if it was.
    pub used_date: Option<Date>,
}

impl CheckedGiftCode {
    pub(crate) fn from_raw(code: tl::enums::payments::CheckedGiftCode) -> Self {
        let tl::enums::payments::CheckedGiftCode::Code(code) = code;
        let chats = ChatMap::new(code.users, code.chats);

        Self {
            date: utils::date(code.date),
            months: code.months,
            via_giveaway: code.via_giveaway,
            from_chat: code
                .from_id
                .as_ref()
                .and_then(|peer| chats.get(peer))
                .cloned(),
            giveaway_message_id: code.giveaway_msg_id,
            winner: code.to_id.and_then(|id| chats.get_user(id)).cloned(),
            used_date: code.used_date.and_then(utils::optional_date),
        }
    }

    /// Whether the code was already applied by someone.
    pub fn is_used(&self) -> bool {
        self.used_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_gift_code_link() {
        let code = GiftCode::from_raw(
            tl::types::MessageActionGiftCode {
                via_giveaway: true,
                unclaimed: false,
                boost_peer: Some(tl::types::PeerChannel { channel_id: 5 }.into()),
                months: 3,
                slug: "AbCdEf".into(),
                currency: None,
                amount: None,
                crypto_currency: None,
                crypto_amount: None,
                message: Some(
                    tl::types::TextWithEntities {
                        text: "enjoy".into(),
                        entities: vec![],
                    }
                    .into(),
                ),
            },
            &ChatMap::empty(),
        );

        assert_eq!(code.link(), "https://t.me/giftcode/AbCdEf");
        assert_eq!(code.text.as_deref(), Some("enjoy"));
        assert_eq!(code.entities, None);
        assert_eq!(code.boosted_chat, None);
        assert!(code.via_giveaway);
    }

    #[test]
    fn check_unused_code() {
        let code = CheckedGiftCode::from_raw(
            tl::types::payments::CheckedGiftCode {
                via_giveaway: false,
                from_id: None,
                giveaway_msg_id: None,
                to_id: None,
                date: 1_700_000_000,
                months: 12,
                used_date: None,
                chats: vec![],
                users: vec![],
            }
            .into(),
        );

        assert!(!code.is_used());
        assert_eq!(code.months, 12);
        assert_eq!(code.date.timestamp(), 1_700_000_000);
    }
}

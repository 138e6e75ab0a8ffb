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

/// One or more boosts applied to a channel by a specific user.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatBoost {
    /// Unique identifier for this set of boosts.
    pub id: String,
    pub date: Date,
    pub expire_date: Date,
    /// How many boosts this counts as.
    pub multiplier: i32,
    pub from_user: Option<User>,
    /// The channel gifted a subscription to the user.
    pub is_gift: bool,
    /// The user was chosen in a giveaway started by the channel.
    pub is_giveaway: bool,
    /// The subscription gifted by the channel has not been claimed yet.
    pub is_unclaimed: bool,
    pub giveaway_message_id: Option<i32>,
    /// The gift code created for this boost, if it is visible to the current account.
    pub used_gift_slug: Option<String>,
}

impl ChatBoost {
    pub(crate) fn from_raw(boost: tl::enums::Boost, chats: &ChatMap) -> Self {
        let tl::enums::Boost::Boost(boost) = boost;

        Self {
            id: boost.id,
            date: utils::date(boost.date),
            expire_date: utils::date(boost.expires),
            multiplier: boost.multiplier.unwrap_or(1),
            from_user: boost.user_id.and_then(|id| chats.get_user(id)).cloned(),
            is_gift: boost.gift,
            is_giveaway: boost.giveaway,
            is_unclaimed: boost.unclaimed,
            giveaway_message_id: boost.giveaway_msg_id,
            used_gift_slug: boost.used_gift_slug,
        }
    }
}

/// A boost was added to or changed in a chat the bot administers.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatBoostUpdated {
    pub chat: Option<Chat>,
    pub boost: ChatBoost,
}

impl ChatBoostUpdated {
    pub(crate) fn from_raw(update: tl::types::UpdateBotChatBoost, chats: &ChatMap) -> Self {
        Self {
            chat: chats.get(&update.peer).cloned(),
            boost: ChatBoost::from_raw(update.boost, chats),
        }
    }
}

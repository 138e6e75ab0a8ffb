// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turning the updates returned by requests into friendly types.
use super::Client;
use crate::types::{ChatBoostUpdated, ChatMap, Message, ShippingQuery, Update};
use oxigram_tl_types as tl;
use std::sync::Arc;

impl Client {
    /// Parse the updates returned by a request or pushed by the server.
    ///
    /// Updates carrying no data of their own, such as the acknowledgement of a sent message,
    /// are returned as [`Update::Raw`].
    pub fn parse_updates(&self, updates: tl::enums::Updates) -> Vec<Update> {
        use tl::enums::Updates as U;

        let (updates, chats) = match updates {
            U::UpdateShort(short) => (vec![short.update], ChatMap::empty()),
            U::Combined(combined) => (combined.updates, ChatMap::new(combined.users, combined.chats)),
            U::Updates(updates) => (updates.updates, ChatMap::new(updates.users, updates.chats)),
            U::TooLong | U::UpdateShortSentMessage(_) => return Vec::new(),
        };

        updates
            .into_iter()
            .map(|update| self.parse_update(update, &chats))
            .collect()
    }

    fn parse_update(&self, update: tl::enums::Update, chats: &Arc<ChatMap>) -> Update {
        use tl::enums::Update as U;

        match update {
            U::NewMessage(update) => Update::NewMessage(Message::from_raw(self, update.message, chats)),
            U::NewChannelMessage(update) => {
                Update::NewMessage(Message::from_raw(self, update.message, chats))
            }
            U::NewScheduledMessage(update) => {
                Update::NewMessage(Message::from_raw(self, update.message, chats))
            }
            U::BotNewBusinessMessage(update) => Update::NewMessage(
                Message::from_raw(self, update.message, chats)
                    .with_business_connection(update.connection_id),
            ),
            U::BotChatBoost(update) => Update::ChatBoost(ChatBoostUpdated::from_raw(update, chats)),
            U::BotShippingQuery(update) => {
                Update::ShippingQuery(ShippingQuery::from_raw(self, update, chats))
            }
            update => Update::Raw(update),
        }
    }

    /// The messages delivered by the updates a request returned.
    pub(crate) fn messages_from_updates(&self, updates: tl::enums::Updates) -> Vec<Message> {
        self.parse_updates(updates)
            .into_iter()
            .filter_map(|update| match update {
                Update::NewMessage(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

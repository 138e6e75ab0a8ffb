// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::chat_map::Peer;
use super::{Chat, ChatMap, Message};
use log::warn;
use oxigram_tl_types as tl;
use std::collections::HashMap;

/// A conversation in the account's chat list.
#[derive(Clone, Debug)]
pub struct Dialog {
    pub chat: Chat,
    /// The last message sent in the dialog.
    pub top_message: Option<Message>,
    pub unread_messages_count: i32,
    pub unread_mentions_count: i32,
    pub unread_reactions_count: i32,
    /// The dialog was manually marked as unread.
    pub unread_mark: bool,
    pub is_pinned: bool,
    pub folder_id: Option<i32>,
    /// Time-to-live of the messages sent in this dialog, in seconds.
    pub ttl_period: Option<i32>,
    pub raw: tl::types::Dialog,
}

impl Dialog {
    /// Build the dialog, taking its top message out of `messages`.
    ///
    /// Returns `None` if the dialog refers to a chat missing from `chats`.
    pub(crate) fn from_raw(
        dialog: tl::types::Dialog,
        messages: &mut HashMap<Peer, Message>,
        chats: &ChatMap,
    ) -> Option<Self> {
        let Some(chat) = chats.get(&dialog.peer).cloned() else {
            warn!("dialog refers to unknown peer {:?}", dialog.peer);
            return None;
        };

        Some(Self {
            chat,
            top_message: messages.remove(&Peer::from(&dialog.peer)),
            unread_messages_count: dialog.unread_count,
            unread_mentions_count: dialog.unread_mentions_count,
            unread_reactions_count: dialog.unread_reactions_count,
            unread_mark: dialog.unread_mark,
            is_pinned: dialog.pinned,
            folder_id: dialog.folder_id,
            ttl_period: dialog.ttl_period,
            raw: dialog,
        })
    }
}

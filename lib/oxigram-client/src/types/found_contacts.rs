// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, ChatMap};
use log::warn;
use oxigram_tl_types as tl;

/// Chats found by [`Client::search_contacts`](crate::Client::search_contacts).
#[derive(Clone, Debug, PartialEq)]
pub struct FoundContacts {
    /// Results among the chats the account already knows.
    pub my_results: Option<Vec<Chat>>,
    /// Public results.
    pub global_results: Option<Vec<Chat>>,
}

impl FoundContacts {
    pub(crate) fn from_raw(found: tl::enums::contacts::Found) -> Self {
        let tl::enums::contacts::Found::Found(found) = found;
        let chats = ChatMap::new(found.users, found.chats);

        Self {
            my_results: collect(&found.my_results, &chats),
            global_results: collect(&found.results, &chats),
        }
    }
}

fn collect(peers: &[tl::enums::Peer], chats: &ChatMap) -> Option<Vec<Chat>> {
    let found = peers
        .iter()
        .filter_map(|peer| {
            let chat = chats.get(peer).cloned();
            if chat.is_none() {
                warn!("search result refers to unknown peer {peer:?}");
            }
            chat
        })
        .collect::<Vec<_>>();

    (!found.is_empty()).then_some(found)
}

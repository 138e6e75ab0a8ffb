// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::utils;
use oxigram_tl_types as tl;

/// A broadcast channel.
///
/// In a broadcast channel, only administrators can broadcast messages to all the subscribers.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub raw: tl::types::Channel,
}

impl Channel {
    pub(crate) fn from_raw(chat: tl::types::Channel) -> Self {
        Self { raw: chat }
    }

    pub(crate) fn from_forbidden(chat: tl::types::ChannelForbidden) -> Self {
        Self {
            raw: tl::types::Channel {
                creator: false,
                left: true,
                broadcast: chat.broadcast,
                verified: false,
                megagroup: chat.megagroup,
                restricted: false,
                scam: false,
                fake: false,
                gigagroup: false,
                noforwards: false,
                forum: false,
                id: chat.id,
                access_hash: Some(chat.access_hash),
                title: chat.title,
                username: None,
                date: 0,
                participants_count: None,
            },
        }
    }

    pub(crate) fn to_peer(&self) -> tl::enums::Peer {
        tl::types::PeerChannel {
            channel_id: self.raw.id,
        }
        .into()
    }

    pub(crate) fn to_input_peer(&self) -> tl::enums::InputPeer {
        tl::types::InputPeerChannel {
            channel_id: self.raw.id,
            access_hash: self.raw.access_hash.unwrap_or(0),
        }
        .into()
    }

    /// Return the unique identifier for this channel, in the marked format.
    pub fn id(&self) -> i64 {
        utils::peer_id(&self.to_peer())
    }

    pub fn title(&self) -> &str {
        self.raw.title.as_str()
    }

    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::utils;
use oxigram_tl_types as tl;

/// A group chat.
///
/// Telegram's API internally distinguishes between "small group chats" and "megagroups", also
/// known as "supergroups" in the UI of Telegram applications. Both are represented here.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub raw: tl::enums::Chat,
}

impl Group {
    pub(crate) fn from_raw(chat: tl::enums::Chat) -> Self {
        Self { raw: chat }
    }

    pub(crate) fn to_peer(&self) -> tl::enums::Peer {
        use tl::enums::Chat as C;

        match &self.raw {
            C::Empty(chat) => tl::types::PeerChat { chat_id: chat.id }.into(),
            C::Chat(chat) => tl::types::PeerChat { chat_id: chat.id }.into(),
            C::Forbidden(chat) => tl::types::PeerChat { chat_id: chat.id }.into(),
            C::Channel(channel) => tl::types::PeerChannel {
                channel_id: channel.id,
            }
            .into(),
            C::ChannelForbidden(channel) => tl::types::PeerChannel {
                channel_id: channel.id,
            }
            .into(),
        }
    }

    pub(crate) fn to_input_peer(&self) -> tl::enums::InputPeer {
        use tl::enums::Chat as C;

        match &self.raw {
            C::Empty(chat) => tl::types::InputPeerChat { chat_id: chat.id }.into(),
            C::Chat(chat) => tl::types::InputPeerChat { chat_id: chat.id }.into(),
            C::Forbidden(chat) => tl::types::InputPeerChat { chat_id: chat.id }.into(),
            C::Channel(channel) => tl::types::InputPeerChannel {
                channel_id: channel.id,
                access_hash: channel.access_hash.unwrap_or(0),
            }
            .into(),
            C::ChannelForbidden(channel) => tl::types::InputPeerChannel {
                channel_id: channel.id,
                access_hash: channel.access_hash,
            }
            .into(),
        }
    }

    /// Return the unique identifier for this group, in the marked format.
    pub fn id(&self) -> i64 {
        utils::peer_id(&self.to_peer())
    }

    /// Return the title of this group.
    ///
    /// The title may be empty if the group is not accessible.
    pub fn title(&self) -> &str {
        use tl::enums::Chat as C;

        match &self.raw {
            C::Empty(_) => "",
            C::Chat(chat) => chat.title.as_str(),
            C::Forbidden(chat) => chat.title.as_str(),
            C::Channel(channel) => channel.title.as_str(),
            C::ChannelForbidden(channel) => channel.title.as_str(),
        }
    }

    /// Is this group a megagroup (also known as supergroup)?
    pub fn is_megagroup(&self) -> bool {
        matches!(
            self.raw,
            tl::enums::Chat::Channel(_) | tl::enums::Chat::ChannelForbidden(_)
        )
    }
}

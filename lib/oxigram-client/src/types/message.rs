// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, ChatMap, Document, GiftCode, Invoice, PaidMediaInfo, Photo, StarGift, Video};
use crate::Client;
use crate::utils::{self, Date};
use oxigram_tl_types as tl;
use std::fmt;
use std::sync::Arc;

/// Represents a Telegram message, which includes text messages, messages with media, and
/// service messages (message actions).
#[derive(Clone)]
pub struct Message {
    pub raw: tl::enums::Message,
    pub(crate) client: Client,
    pub(crate) business_connection_id: Option<String>,
    // A single server response carries every chat its messages mention. Sharing the whole set
    // keeps clones cheap and lets accessors resolve chats lazily.
    pub(crate) chats: Arc<ChatMap>,
}

impl Message {
    pub fn from_raw(client: &Client, message: tl::enums::Message, chats: &Arc<ChatMap>) -> Self {
        Self {
            raw: message,
            client: client.clone(),
            business_connection_id: None,
            chats: Arc::clone(chats),
        }
    }

    pub(crate) fn with_business_connection(mut self, connection_id: String) -> Self {
        self.business_connection_id = Some(connection_id);
        self
    }

    /// The ID of this message.
    ///
    /// Message identifiers are counters that start at 1 and grow by 1 for each message sent.
    /// Private chats and small groups share one counter per account; channels have their own.
    pub fn id(&self) -> i32 {
        match &self.raw {
            tl::enums::Message::Empty(message) => message.id,
            tl::enums::Message::Message(message) => message.id,
            tl::enums::Message::Service(message) => message.id,
        }
    }

    fn peer_id(&self) -> Option<&tl::enums::Peer> {
        match &self.raw {
            tl::enums::Message::Empty(message) => message.peer_id.as_ref(),
            tl::enums::Message::Message(message) => Some(&message.peer_id),
            tl::enums::Message::Service(message) => Some(&message.peer_id),
        }
    }

    /// The chat where this message was sent to.
    pub fn chat(&self) -> Option<Chat> {
        self.peer_id()
            .and_then(|peer| self.chats.get(peer))
            .cloned()
    }

    /// The sender of this message, if known.
    ///
    /// Incoming messages in private conversations are sent by the chat itself.
    pub fn sender(&self) -> Option<Chat> {
        let from_id = match &self.raw {
            tl::enums::Message::Empty(_) => None,
            tl::enums::Message::Message(message) => message.from_id.as_ref(),
            tl::enums::Message::Service(message) => message.from_id.as_ref(),
        };

        match from_id {
            Some(peer) => self.chats.get(peer).cloned(),
            None if !self.outgoing() => match self.peer_id() {
                Some(peer @ tl::enums::Peer::User(_)) => self.chats.get(peer).cloned(),
                _ => None,
            },
            None => None,
        }
    }

    /// The date when this message was sent. Empty messages report the epoch.
    pub fn date(&self) -> Date {
        utils::date(match &self.raw {
            tl::enums::Message::Empty(_) => 0,
            tl::enums::Message::Message(message) => message.date,
            tl::enums::Message::Service(message) => message.date,
        })
    }

    /// Whether the message is outgoing (i.e. you sent it) or incoming.
    pub fn outgoing(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(message) => message.out,
            tl::enums::Message::Service(message) => message.out,
        }
    }

    pub fn silent(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(message) => message.silent,
            tl::enums::Message::Service(message) => message.silent,
        }
    }

    /// The message can't be forwarded or saved.
    pub fn has_protected_content(&self) -> bool {
        matches!(&self.raw, tl::enums::Message::Message(message) if message.noforwards)
    }

    /// The caption is shown above the media.
    pub fn show_caption_above_media(&self) -> bool {
        matches!(&self.raw, tl::enums::Message::Message(message) if message.invert_media)
    }

    /// The text of the message, or the caption of its media. Empty for service messages.
    pub fn text(&self) -> &str {
        match &self.raw {
            tl::enums::Message::Message(message) => message.message.as_str(),
            _ => "",
        }
    }

    /// The formatting entities used in the text.
    pub fn entities(&self) -> Option<&Vec<tl::enums::MessageEntity>> {
        match &self.raw {
            tl::enums::Message::Message(message) => message.entities.as_ref(),
            _ => None,
        }
    }

    /// Identifier of the message this one replies to, if any.
    pub fn reply_to_message_id(&self) -> Option<i32> {
        let reply_to = match &self.raw {
            tl::enums::Message::Empty(_) => None,
            tl::enums::Message::Message(message) => message.reply_to.as_ref(),
            tl::enums::Message::Service(message) => message.reply_to.as_ref(),
        };

        match reply_to {
            Some(tl::enums::MessageReplyHeader::Header(header)) => header.reply_to_msg_id,
            None => None,
        }
    }

    /// Messages sent together as an album share this identifier.
    pub fn grouped_id(&self) -> Option<i64> {
        match &self.raw {
            tl::enums::Message::Message(message) => message.grouped_id,
            _ => None,
        }
    }

    /// The business connection the message was received or sent through.
    pub fn business_connection_id(&self) -> Option<&str> {
        self.business_connection_id.as_deref()
    }

    fn media(&self) -> Option<&tl::enums::MessageMedia> {
        match &self.raw {
            tl::enums::Message::Message(message) => message.media.as_ref(),
            _ => None,
        }
    }

    fn action(&self) -> Option<&tl::enums::MessageAction> {
        match &self.raw {
            tl::enums::Message::Service(message) => Some(&message.action),
            _ => None,
        }
    }

    pub fn photo(&self) -> Option<Photo> {
        match self.media() {
            Some(tl::enums::MessageMedia::Photo(photo)) => Some(Photo::from_raw_media(photo.clone())),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<Video> {
        match self.media() {
            Some(tl::enums::MessageMedia::Document(document)) => {
                Video::from_document(Document::from_raw_media(document.clone()))
            }
            _ => None,
        }
    }

    /// The media that must be paid for before it can be viewed.
    pub fn paid_media(&self) -> Option<PaidMediaInfo> {
        match self.media() {
            Some(tl::enums::MessageMedia::PaidMedia(paid)) => {
                Some(PaidMediaInfo::from_raw(paid.clone()))
            }
            _ => None,
        }
    }

    pub fn invoice(&self) -> Option<Invoice> {
        match self.media() {
            Some(tl::enums::MessageMedia::Invoice(invoice)) => {
                Some(Invoice::from_raw(invoice.clone()))
            }
            _ => None,
        }
    }

    /// The Telegram Premium gift code this service message delivered.
    pub fn gift_code(&self) -> Option<GiftCode> {
        match self.action() {
            Some(tl::enums::MessageAction::GiftCode(action)) => {
                Some(GiftCode::from_raw(action.clone(), &self.chats))
            }
            _ => None,
        }
    }

    /// The star gift this service message delivered.
    pub fn star_gift(&self) -> Option<StarGift> {
        match &self.raw {
            tl::enums::Message::Service(message) => match &message.action {
                tl::enums::MessageAction::StarGift(action) => Some(StarGift::from_action(
                    &self.client,
                    action.clone(),
                    message,
                    &self.chats,
                )),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id())
            .field("outgoing", &self.outgoing())
            .field("date", &self.date())
            .field("text", &self.text())
            .field("chat", &self.chat())
            .field("sender", &self.sender())
            .field("reply_to_message_id", &self.reply_to_message_id())
            .field("business_connection_id", &self.business_connection_id)
            .field("paid_media", &self.paid_media())
            .field("invoice", &self.invoice())
            .field("gift_code", &self.gift_code())
            .finish()
    }
}

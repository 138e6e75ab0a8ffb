// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Concrete constructors of the schema, one `struct` per constructor.
//!
//! Constructors without parameters are represented as unit variants of their
//! boxed type in [`crate::enums`] and have no `struct` here.
use crate::enums;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PeerUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PeerChannel {
    pub channel_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPeerUser {
    pub user_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPeerChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputUser {
    pub user_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UserEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct User {
    pub is_self: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub bot: bool,
    pub verified: bool,
    pub restricted: bool,
    pub scam: bool,
    pub fake: bool,
    pub premium: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub lang_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ChatEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Chat {
    pub creator: bool,
    pub left: bool,
    pub deactivated: bool,
    pub noforwards: bool,
    pub id: i64,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Channel {
    pub creator: bool,
    pub left: bool,
    pub broadcast: bool,
    pub verified: bool,
    pub megagroup: bool,
    pub restricted: bool,
    pub scam: bool,
    pub fake: bool,
    pub gigagroup: bool,
    pub noforwards: bool,
    pub forum: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: i32,
    pub participants_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    pub until_date: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPrivacyValueAllowUsers {
    pub users: Vec<enums::InputUser>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPrivacyValueDisallowUsers {
    pub users: Vec<enums::InputUser>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPrivacyValueAllowChatParticipants {
    pub chats: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPrivacyValueDisallowChatParticipants {
    pub chats: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PrivacyValueAllowUsers {
    pub users: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PrivacyValueDisallowUsers {
    pub users: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PrivacyValueAllowChatParticipants {
    pub chats: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PrivacyValueDisallowChatParticipants {
    pub chats: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct AccountDaysTtl {
    pub days: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct LabeledPrice {
    pub label: String,
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<enums::LabeledPrice>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PostAddress {
    pub street_line1: String,
    pub street_line2: String,
    pub city: String,
    pub state: String,
    pub country_iso2: String,
    pub post_code: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Invoice {
    pub test: bool,
    pub name_requested: bool,
    pub phone_requested: bool,
    pub email_requested: bool,
    pub shipping_address_requested: bool,
    pub flexible: bool,
    pub phone_to_provider: bool,
    pub email_to_provider: bool,
    pub recurring: bool,
    pub currency: String,
    pub prices: Vec<enums::LabeledPrice>,
    pub max_tip_amount: Option<i64>,
    pub suggested_tip_amounts: Option<Vec<i64>>,
    pub terms_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Folder {
    pub id: i32,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Dialog {
    pub pinned: bool,
    pub unread_mark: bool,
    pub view_forum_as_messages: bool,
    pub peer: enums::Peer,
    pub top_message: i32,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    pub unread_count: i32,
    pub unread_mentions_count: i32,
    pub unread_reactions_count: i32,
    pub pts: Option<i32>,
    pub folder_id: Option<i32>,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DialogFolder {
    pub pinned: bool,
    pub folder: enums::Folder,
    pub peer: enums::Peer,
    pub top_message: i32,
    pub unread_muted_peers_count: i32,
    pub unread_unmuted_peers_count: i32,
    pub unread_muted_messages_count: i32,
    pub unread_unmuted_messages_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct TextWithEntities {
    pub text: String,
    pub entities: Vec<enums::MessageEntity>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityUnknown {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityMention {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityHashtag {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityBotCommand {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityUrl {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityEmail {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityBold {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityItalic {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityCode {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityPre {
    pub offset: i32,
    pub length: i32,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityTextUrl {
    pub offset: i32,
    pub length: i32,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityMentionName {
    pub offset: i32,
    pub length: i32,
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityUnderline {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityStrike {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntitySpoiler {
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityCustomEmoji {
    pub offset: i32,
    pub length: i32,
    pub document_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEntityBlockquote {
    pub collapsed: bool,
    pub offset: i32,
    pub length: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PhotoSizeEmpty {
    pub r#type: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PhotoSize {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PhotoStrippedSize {
    pub r#type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct PhotoEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Photo {
    pub has_stickers: bool,
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
    pub dc_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DocumentEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub mime_type: String,
    pub size: i64,
    pub thumbs: Option<Vec<enums::PhotoSize>>,
    pub dc_id: i32,
    pub attributes: Vec<enums::DocumentAttribute>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DocumentAttributeImageSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DocumentAttributeSticker {
    pub mask: bool,
    pub alt: String,
    pub stickerset: enums::InputStickerSet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DocumentAttributeVideo {
    pub round_message: bool,
    pub supports_streaming: bool,
    pub nosound: bool,
    pub duration: f64,
    pub w: i32,
    pub h: i32,
    pub preload_prefix_size: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct DocumentAttributeFilename {
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputStickerSetId {
    pub id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputStickerSetShortName {
    pub short_name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputFile {
    pub id: i64,
    pub parts: i32,
    pub name: String,
    pub md5_checksum: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputFileBig {
    pub id: i64,
    pub parts: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputPhoto {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputDocument {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputMediaUploadedPhoto {
    pub spoiler: bool,
    pub file: enums::InputFile,
    pub stickers: Option<Vec<enums::InputDocument>>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputMediaPhoto {
    pub spoiler: bool,
    pub id: enums::InputPhoto,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputMediaUploadedDocument {
    pub nosound_video: bool,
    pub force_file: bool,
    pub spoiler: bool,
    pub file: enums::InputFile,
    pub thumb: Option<enums::InputFile>,
    pub mime_type: String,
    pub attributes: Vec<enums::DocumentAttribute>,
    pub stickers: Option<Vec<enums::InputDocument>>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputMediaDocument {
    pub spoiler: bool,
    pub id: enums::InputDocument,
    pub ttl_seconds: Option<i32>,
    pub query: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputMediaPaidMedia {
    pub stars_amount: i64,
    pub extended_media: Vec<enums::InputMedia>,
    pub payload: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputReplyToMessage {
    pub reply_to_msg_id: i32,
    pub top_msg_id: Option<i32>,
    pub reply_to_peer_id: Option<enums::InputPeer>,
    pub quote_text: Option<String>,
    pub quote_entities: Option<Vec<enums::MessageEntity>>,
    pub quote_offset: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputReplyToStory {
    pub peer: enums::InputPeer,
    pub story_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageReplyHeader {
    pub reply_to_scheduled: bool,
    pub forum_topic: bool,
    pub quote: bool,
    pub reply_to_msg_id: Option<i32>,
    pub reply_to_peer_id: Option<enums::Peer>,
    pub reply_to_top_id: Option<i32>,
    pub quote_text: Option<String>,
    pub quote_entities: Option<Vec<enums::MessageEntity>>,
    pub quote_offset: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageMediaPhoto {
    pub spoiler: bool,
    pub photo: Option<enums::Photo>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageMediaDocument {
    pub nopremium: bool,
    pub spoiler: bool,
    pub video: bool,
    pub round: bool,
    pub voice: bool,
    pub document: Option<enums::Document>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageMediaInvoice {
    pub shipping_address_requested: bool,
    pub test: bool,
    pub title: String,
    pub description: String,
    pub receipt_msg_id: Option<i32>,
    pub currency: String,
    pub total_amount: i64,
    pub start_param: String,
    pub extended_media: Option<Box<enums::MessageExtendedMedia>>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageMediaPaidMedia {
    pub stars_amount: i64,
    pub extended_media: Vec<enums::MessageExtendedMedia>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageExtendedMediaPreview {
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub thumb: Option<enums::PhotoSize>,
    pub video_duration: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageExtendedMedia {
    pub media: enums::MessageMedia,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageActionChatEditTitle {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageActionGiftCode {
    pub via_giveaway: bool,
    pub unclaimed: bool,
    pub boost_peer: Option<enums::Peer>,
    pub months: i32,
    pub slug: String,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub crypto_currency: Option<String>,
    pub crypto_amount: Option<i64>,
    pub message: Option<enums::TextWithEntities>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageActionStarGift {
    pub name_hidden: bool,
    pub saved: bool,
    pub converted: bool,
    pub gift: enums::StarGift,
    pub message: Option<enums::TextWithEntities>,
    pub convert_stars: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageEmpty {
    pub id: i32,
    pub peer_id: Option<enums::Peer>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Message {
    pub out: bool,
    pub mentioned: bool,
    pub silent: bool,
    pub post: bool,
    pub from_scheduled: bool,
    pub pinned: bool,
    pub noforwards: bool,
    pub invert_media: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub reply_to: Option<enums::MessageReplyHeader>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub views: Option<i32>,
    pub forwards: Option<i32>,
    pub edit_date: Option<i32>,
    pub post_author: Option<String>,
    pub grouped_id: Option<i64>,
    pub ttl_period: Option<i32>,
    pub via_business_bot_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct MessageService {
    pub out: bool,
    pub mentioned: bool,
    pub silent: bool,
    pub post: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub reply_to: Option<enums::MessageReplyHeader>,
    pub date: i32,
    pub action: enums::MessageAction,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Boost {
    pub gift: bool,
    pub giveaway: bool,
    pub unclaimed: bool,
    pub id: String,
    pub user_id: Option<i64>,
    pub giveaway_msg_id: Option<i32>,
    pub date: i32,
    pub expires: i32,
    pub used_gift_slug: Option<String>,
    pub multiplier: Option<i32>,
    pub stars: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateNewMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateNewChannelMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateNewScheduledMessage {
    pub message: enums::Message,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateBotNewBusinessMessage {
    pub connection_id: String,
    pub message: enums::Message,
    pub reply_to_message: Option<enums::Message>,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateMessageId {
    pub id: i32,
    pub random_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateBotChatBoost {
    pub peer: enums::Peer,
    pub boost: enums::Boost,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateBotShippingQuery {
    pub query_id: i64,
    pub user_id: i64,
    pub payload: Vec<u8>,
    pub shipping_address: enums::PostAddress,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateShort {
    pub update: enums::Update,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdatesCombined {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq_start: i32,
    pub seq: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Updates {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UpdateShortSentMessage {
    pub out: bool,
    pub id: i32,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub media: Option<enums::MessageMedia>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputInvoiceMessage {
    pub peer: enums::InputPeer,
    pub msg_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputInvoiceSlug {
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InputInvoiceStarGift {
    pub hide_name: bool,
    pub user_id: enums::InputUser,
    pub gift_id: i64,
    pub message: Option<enums::TextWithEntities>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct StarGift {
    pub limited: bool,
    pub sold_out: bool,
    pub birthday: bool,
    pub id: i64,
    pub sticker: enums::Document,
    pub stars: i64,
    pub availability_remains: Option<i32>,
    pub availability_total: Option<i32>,
    pub convert_stars: i64,
    pub first_sale_date: Option<i32>,
    pub last_sale_date: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct UserStarGift {
    pub name_hidden: bool,
    pub unsaved: bool,
    pub from_id: Option<i64>,
    pub date: i32,
    pub gift: enums::StarGift,
    pub message: Option<enums::TextWithEntities>,
    pub msg_id: Option<i32>,
    pub convert_stars: Option<i64>,
}

pub mod account {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PrivacyRules {
        pub rules: Vec<enums::PrivacyRule>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

pub mod contacts {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct Found {
        pub my_results: Vec<enums::Peer>,
        pub results: Vec<enums::Peer>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

pub mod updates {
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct State {
        pub pts: i32,
        pub qts: i32,
        pub date: i32,
        pub seq: i32,
        pub unread_count: i32,
    }
}

pub mod messages {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct Dialogs {
        pub dialogs: Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct DialogsSlice {
        pub count: i32,
        pub dialogs: Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct DialogsNotModified {
        pub count: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PeerDialogs {
        pub dialogs: Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub state: enums::updates::State,
    }
}

pub mod payments {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PaymentForm {
        pub can_save_credentials: bool,
        pub password_missing: bool,
        pub form_id: i64,
        pub bot_id: i64,
        pub title: String,
        pub description: String,
        pub invoice: enums::Invoice,
        pub provider_id: i64,
        pub url: String,
        pub native_provider: Option<String>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PaymentFormStars {
        pub form_id: i64,
        pub bot_id: i64,
        pub title: String,
        pub description: String,
        pub invoice: enums::Invoice,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PaymentFormStarGift {
        pub form_id: i64,
        pub invoice: enums::Invoice,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PaymentResult {
        pub updates: enums::Updates,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct PaymentVerificationNeeded {
        pub url: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct StarGifts {
        pub hash: i32,
        pub gifts: Vec<enums::StarGift>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct UserStarGifts {
        pub count: i32,
        pub gifts: Vec<enums::UserStarGift>,
        pub next_offset: Option<String>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct CheckedGiftCode {
        pub via_giveaway: bool,
        pub from_id: Option<enums::Peer>,
        pub giveaway_msg_id: Option<i32>,
        pub to_id: Option<i64>,
        pub date: i32,
        pub months: i32,
        pub used_date: Option<i32>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Custom types extending those provided by Telegram.
//!
//! Properties containing raw types are public and will either be called "raw" or prefixed with
//! "raw_". Keep in mind that **these fields are not part of the semantic versioning guarantees**.
mod boost;
mod chat;
mod chat_map;
mod chat_ref;
mod dialog;
mod found_contacts;
mod gift_code;
mod input_media;
mod input_text;
mod invoice;
mod iter_buffer;
mod media;
mod message;
mod privacy;
mod shipping;
mod star_gift;
pub mod update;

pub use boost::{ChatBoost, ChatBoostUpdated};
pub use chat::{Channel, Chat, Group, User};
pub(crate) use chat_map::Peer;
pub use chat_map::ChatMap;
pub use chat_ref::ChatRef;
pub use dialog::Dialog;
pub use found_contacts::FoundContacts;
pub use gift_code::{CheckedGiftCode, GiftCode};
pub use input_media::{FileSource, InputMedia, InputPaidMedia, RemoteFile, Uploadable};
pub use input_text::{InputText, ParseMode};
pub use invoice::{Invoice, InvoiceRef, PaymentForm};
pub use iter_buffer::IterBuffer;
pub use media::{
    Document, PaidMedia, PaidMediaInfo, PaidMediaPreview, Photo, Sticker, StrippedThumbnail, Video,
};
pub use message::Message;
pub use privacy::{InputPrivacyRule, PrivacyKey, PrivacyRule};
pub use shipping::{LabeledPrice, ShippingAddress, ShippingOption, ShippingQuery};
pub use star_gift::StarGift;
pub use update::Update;

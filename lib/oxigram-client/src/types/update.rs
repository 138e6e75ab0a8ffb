// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{ChatBoostUpdated, Message, ShippingQuery};
use oxigram_tl_types as tl;

/// An update that the client understands, as returned by
/// [`Client::parse_updates`](crate::Client::parse_updates).
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Update {
    /// Occurs whenever a new message arrives, including scheduled messages and messages sent
    /// through a business connection.
    NewMessage(Message),
    /// Occurs whenever a chat the bot administers is boosted.
    ChatBoost(ChatBoostUpdated),
    /// Occurs whenever a user submits a shipping address to a bot's flexible invoice.
    ShippingQuery(ShippingQuery),
    /// Raw events are not actively supported by the library, but are still available.
    Raw(tl::enums::Update),
}

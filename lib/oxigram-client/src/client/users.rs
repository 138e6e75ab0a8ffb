// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, RequestError};
use crate::types::ChatRef;
use crate::utils;
use log::warn;
use oxigram_tl_types as tl;

impl Client {
    /// Set the channel shown on the account's profile, or remove it with `None`.
    ///
    /// Returns `false` without sending anything if the chat is not a channel.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// client.set_personal_channel(Some("@my_channel")).await?;
    /// client.set_personal_channel(None::<&str>).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_personal_channel<C: Into<ChatRef>>(
        &self,
        chat: Option<C>,
    ) -> Result<bool, RequestError> {
        let channel = match chat {
            Some(chat) => {
                let peer = self.resolve_peer(chat).await?;
                match utils::input_channel_from_peer(&peer) {
                    Some(channel) => channel,
                    None => {
                        warn!("personal channel must be a channel, got {peer:?}");
                        return Ok(false);
                    }
                }
            }
            None => tl::enums::InputChannel::Empty,
        };

        Ok(self
            .invoke(&tl::functions::account::UpdatePersonalChannel { channel })
            .await?)
    }
}

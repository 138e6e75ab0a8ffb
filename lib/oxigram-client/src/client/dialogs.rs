// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::Client;
use crate::types::{ChatMap, Dialog, IterBuffer, Message, Peer};
use crate::utils;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;
use std::collections::HashMap;

const MAX_LIMIT: usize = 100;

pub type DialogIter = IterBuffer<tl::functions::messages::GetDialogs, Dialog>;

fn folder_id(from_archive: bool) -> i32 {
    if from_archive { 1 } else { 0 }
}

impl DialogIter {
    fn new(client: &Client, from_archive: Option<bool>) -> Self {
        Self::from_request(
            client,
            MAX_LIMIT,
            tl::functions::messages::GetDialogs {
                exclude_pinned: false,
                folder_id: from_archive.map(folder_id),
                offset_date: 0,
                offset_id: 0,
                offset_peer: tl::enums::InputPeer::Empty,
                limit: 0,
                hash: 0,
            },
        )
    }

    /// Determines how many dialogs there are in total.
    ///
    /// This only performs a network call if `next` has not been called before.
    pub async fn total(&mut self) -> Result<usize, InvocationError> {
        if let Some(total) = self.total {
            return Ok(total);
        }

        let mut request = self.request.clone();
        request.limit = 1;
        let total = dialogs_count(self.client.invoke(&request).await?);
        self.total = Some(total);
        Ok(total)
    }

    /// Return the next `Dialog` from the internal buffer, filling the buffer previously if it's
    /// empty.
    ///
    /// Returns `None` if the `limit` is reached or there are no dialogs left.
    pub async fn next(&mut self) -> Result<Option<Dialog>, InvocationError> {
        loop {
            if let Some(result) = self.next_raw() {
                return result;
            }
            // Pages where every dialog was skipped leave the buffer empty.
            self.fill_buffer().await?;
        }
    }

    async fn fill_buffer(&mut self) -> Result<(), InvocationError> {
        use tl::enums::messages::Dialogs;

        self.request.limit = self.determine_limit(MAX_LIMIT);
        let (dialogs, messages, users, chats) = match self.client.invoke(&self.request).await? {
            Dialogs::Dialogs(d) => {
                self.last_chunk = true;
                self.total = Some(d.dialogs.len());
                (d.dialogs, d.messages, d.users, d.chats)
            }
            Dialogs::Slice(d) => {
                self.last_chunk = d.dialogs.len() < self.request.limit as usize;
                self.total = Some(d.count as usize);
                (d.dialogs, d.messages, d.users, d.chats)
            }
            Dialogs::NotModified(d) => {
                self.last_chunk = true;
                self.total = Some(d.count as usize);
                (Vec::new(), Vec::new(), Vec::new(), Vec::new())
            }
        };

        let chats = ChatMap::new(users, chats);
        let mut messages = messages
            .into_iter()
            .map(|m| Message::from_raw(&self.client, m, &chats))
            .filter_map(|m| {
                let peer: Peer = match &m.raw {
                    tl::enums::Message::Message(raw) => (&raw.peer_id).into(),
                    tl::enums::Message::Service(raw) => (&raw.peer_id).into(),
                    tl::enums::Message::Empty(_) => return None,
                };
                Some((peer, m))
            })
            .collect::<HashMap<_, _>>();

        if dialogs.is_empty() {
            self.last_chunk = true;
        }

        // The next page starts after the last dialog received, even if it gets skipped.
        if !self.last_chunk {
            let last = dialogs.iter().rev().find_map(|dialog| match dialog {
                tl::enums::Dialog::Dialog(dialog) => Some(dialog),
                tl::enums::Dialog::Folder(_) => None,
            });
            if let Some(last) = last {
                self.request.exclude_pinned = true;
                self.request.offset_id = last.top_message;
                let peer: Peer = (&last.peer).into();
                if let Some(message) = messages.get(&peer) {
                    self.request.offset_date = message.date().timestamp() as i32;
                }
                self.request.offset_peer = match chats.get(&last.peer) {
                    Some(chat) => chat.to_input_peer(),
                    None => utils::ambient_input_peer(&last.peer),
                };
            }
        }

        for dialog in dialogs {
            // Folders group other dialogs and have no chat of their own.
            let tl::enums::Dialog::Dialog(dialog) = dialog else {
                continue;
            };
            if let Some(dialog) = Dialog::from_raw(dialog, &mut messages, &chats) {
                self.buffer.push_back(dialog);
            }
        }

        Ok(())
    }
}

fn dialogs_count(dialogs: tl::enums::messages::Dialogs) -> usize {
    use tl::enums::messages::Dialogs;

    match dialogs {
        Dialogs::Dialogs(dialogs) => dialogs.dialogs.len(),
        Dialogs::Slice(dialogs) => dialogs.count as usize,
        Dialogs::NotModified(dialogs) => dialogs.count as usize,
    }
}

impl Client {
    /// Get the total count of your dialogs.
    ///
    /// With `pinned_only`, only pinned dialogs are counted. `from_archive` picks the archived
    /// (`Some(true)`) or main (`Some(false)`) folder; `None` counts every folder, except when
    /// counting pinned dialogs where it means the main folder.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let count = client.get_dialogs_count(false, None).await?;
    /// println!("{count} dialogs");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_dialogs_count(
        &self,
        pinned_only: bool,
        from_archive: Option<bool>,
    ) -> Result<usize, InvocationError> {
        if pinned_only {
            let tl::enums::messages::PeerDialogs::Dialogs(dialogs) = self
                .invoke(&tl::functions::messages::GetPinnedDialogs {
                    folder_id: folder_id(from_archive.unwrap_or(false)),
                })
                .await?;
            Ok(dialogs.dialogs.len())
        } else {
            let mut request = DialogIter::new(self, from_archive).request;
            request.limit = 1;
            Ok(dialogs_count(self.invoke(&request).await?))
        }
    }

    /// Returns a new iterator over the dialogs, most recent first.
    ///
    /// `from_archive` works as in [`Client::get_dialogs_count`]. Dialogs whose chat is missing
    /// from the response are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let mut dialogs = client.iter_dialogs(None);
    ///
    /// while let Some(dialog) = dialogs.next().await? {
    ///     println!("{} has {} unread messages", dialog.chat.name(), dialog.unread_messages_count);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter_dialogs(&self, from_archive: Option<bool>) -> DialogIter {
        DialogIter::new(self, from_archive)
    }
}

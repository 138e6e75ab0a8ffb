// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Collaborators the [`Client`](crate::Client) delegates to for work that needs state it does
//! not own: a peer cache, a file upload pipeline and a markup parser.
use crate::types::{ChatRef, ParseMode, Uploadable};
use crate::utils;
use async_trait::async_trait;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;
use std::io;

/// Turns loosely-typed chat references into protocol-level peers.
#[async_trait]
pub trait PeerResolver: Send + Sync {
    /// Resolve the reference, returning `None` if no such peer is known.
    async fn resolve_peer(
        &self,
        chat: &ChatRef,
    ) -> Result<Option<tl::enums::InputPeer>, InvocationError>;
}

/// Uploads local files, returning the handle that media requests refer to.
#[async_trait]
pub trait FileUploader: Send + Sync {
    async fn save_file(&self, file: &Uploadable) -> io::Result<tl::enums::InputFile>;
}

/// Splits formatted text into plain text and its entities.
pub trait EntityParser: Send + Sync {
    fn parse(&self, text: &str, mode: ParseMode) -> (String, Vec<tl::enums::MessageEntity>);
}

/// Resolver that only knows what can be derived without a peer cache.
///
/// `Me` resolves to the logged-in account and marked identifiers resolve to peers with a zero
/// access hash, which the server accepts for bots and for peers it has seen recently.
/// Usernames and phone numbers are never found.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientResolver;

#[async_trait]
impl PeerResolver for AmbientResolver {
    async fn resolve_peer(
        &self,
        chat: &ChatRef,
    ) -> Result<Option<tl::enums::InputPeer>, InvocationError> {
        Ok(match chat {
            ChatRef::Me => Some(tl::enums::InputPeer::PeerSelf),
            ChatRef::Id(id) => Some(utils::ambient_input_peer(&utils::unmark_peer_id(*id))),
            ChatRef::Username(_) | ChatRef::PhoneNumber(_) => None,
        })
    }
}

/// Uploader for clients that never send local files.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUploads;

#[async_trait]
impl FileUploader for NoUploads {
    async fn save_file(&self, file: &Uploadable) -> io::Result<tl::enums::InputFile> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no uploader configured to send {}", file.name()),
        ))
    }
}

/// Parser that leaves the text untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainText;

impl EntityParser for PlainText {
    fn parse(&self, text: &str, _mode: ParseMode) -> (String, Vec<tl::enums::MessageEntity>) {
        (text.to_string(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn resolve(chat: ChatRef) -> Option<tl::enums::InputPeer> {
        AmbientResolver.resolve_peer(&chat).await.unwrap()
    }

    #[tokio::test]
    async fn check_ambient_resolver() {
        assert_eq!(resolve(ChatRef::Me).await, Some(tl::enums::InputPeer::PeerSelf));
        assert_eq!(
            resolve(ChatRef::Id(42)).await,
            Some(
                tl::types::InputPeerUser {
                    user_id: 42,
                    access_hash: 0
                }
                .into()
            )
        );
        assert_eq!(
            resolve(ChatRef::Id(-42)).await,
            Some(tl::types::InputPeerChat { chat_id: 42 }.into())
        );
        assert_eq!(
            resolve(ChatRef::Id(-1000000000042)).await,
            Some(
                tl::types::InputPeerChannel {
                    channel_id: 42,
                    access_hash: 0
                }
                .into()
            )
        );
        assert_eq!(resolve(ChatRef::from("@durov")).await, None);
    }

    #[tokio::test]
    async fn check_no_uploads_fails() {
        let file = Uploadable::Bytes {
            name: "a.jpg".into(),
            data: vec![1, 2, 3],
        };
        let err = NoUploads.save_file(&file).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn check_plain_text_keeps_markup() {
        let (text, entities) = PlainText.parse("**bold**", ParseMode::Markdown);
        assert_eq!(text, "**bold**");
        assert!(entities.is_empty());
    }
}

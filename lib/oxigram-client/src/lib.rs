// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A high-level client for the account, payments and paid media parts of [Telegram's API].
//!
//! Every method maps to a single remote call (or a short, fixed sequence of them): chat
//! references are resolved into peers, the request is built and sent through the configured
//! [`Sender`], and the raw response is reshaped into the friendly types found in [`types`].
//!
//! # Collaborators
//!
//! The [`Client`] owns no connection, cache or upload pipeline of its own. Instead, it is built
//! from a [`Config`] holding the pieces it delegates to:
//!
//! * a [`Sender`] that actually delivers requests to Telegram,
//! * a [`PeerResolver`] turning usernames and identifiers into peers,
//! * a [`FileUploader`] for local files sent as paid media,
//! * an [`EntityParser`] for formatted captions and gift messages.
//!
//! Only the sender is required. The defaults resolve what can be known without a peer cache,
//! refuse uploads, and leave text untouched.
//!
//! # Raw API
//!
//! The schema definitions are re-exported under the [`tl`] namespace. When a friendly method
//! is missing, any of the [`tl::functions`] can be sent with [`Client::invoke`]. Raw types are
//! **not part of the semantic versioning**.
//!
//! [Telegram's API]: https://core.telegram.org/#telegram-api
//! [`Sender`]: sender::Sender

#![deny(unsafe_code)]

mod client;
pub mod types;
pub(crate) mod utils;

pub use client::{
    AmbientResolver, Client, Config, DialogIter, EntityParser, FileUploader, InitParams,
    NoUploads, PeerResolver, PlainText, RequestError, StarGiftIter,
};
pub use oxigram_mtsender::{self as sender, InvocationError, RpcError};
pub use oxigram_tl_types as tl;
pub use types::Update;

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contains client-specific configuration and the methods mapping to each remote call.
mod account;
mod bots;
#[allow(clippy::module_inception)]
mod client;
mod contacts;
mod dialogs;
mod errors;
mod messages;
mod net;
mod payments;
mod services;
mod updates;
mod users;

pub use client::{Client, Config, InitParams};
pub use dialogs::DialogIter;
pub use errors::RequestError;
pub use payments::StarGiftIter;
pub use services::{AmbientResolver, EntityParser, FileUploader, NoUploads, PeerResolver, PlainText};

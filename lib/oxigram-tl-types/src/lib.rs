// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the subset of Telegram's
//! [`types`] and [`functions`] consumed by `oxigram-client`, in the form of
//! `struct` and `enum`.
//!
//! Functions implement [`RemoteCall`] and convert into a [`Request`], which is
//! what a transport receives. Whatever the transport answers is a
//! [`Response`], which converts back into the call's `Return` type.
//!
//! # Features
//!
//! * `impl-serde`: implements `serde::Serialize` and `serde::Deserialize`
//!   for every type, function, request and response.
//!
//! [`types`]: types/index.html
//! [`functions`]: functions/index.html
mod call;
pub mod enums;
pub mod functions;
pub mod types;

pub use call::{RemoteCall, Request, Response, UnexpectedResponse};

/// The schema layer these definitions were taken from.
pub const LAYER: i32 = 192;

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that may occur when using the client.
use crate::types::ChatRef;
use oxigram_mtsender::InvocationError;
use std::error::Error;
use std::fmt;
use std::io;

/// Error returned by methods that do more than invoking a single request: resolving chats,
/// uploading files or validating their input first.
#[derive(Debug)]
pub enum RequestError {
    /// The request itself failed.
    Invocation(InvocationError),

    /// The chat could not be resolved into a peer.
    PeerNotFound(ChatRef),

    /// A file could not be uploaded.
    Upload(io::Error),

    /// The arguments were rejected before sending anything.
    InvalidArgument(String),
}

impl RequestError {
    /// Matches on the name of the RPC error, if this is one.
    ///
    /// See [`oxigram_mtsender::RpcError::is`] for the accepted wildcards.
    pub fn is(&self, rpc_error: &str) -> bool {
        match self {
            Self::Invocation(err) => err.is(rpc_error),
            _ => false,
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invocation(err) => Some(err),
            Self::Upload(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invocation(err) => write!(f, "{err}"),
            Self::PeerNotFound(chat) => write!(f, "request error, peer not found: {chat}"),
            Self::Upload(err) => write!(f, "request error, upload failed: {err}"),
            Self::InvalidArgument(msg) => write!(f, "request error, invalid argument: {msg}"),
        }
    }
}

impl From<InvocationError> for RequestError {
    fn from(err: InvocationError) -> Self {
        Self::Invocation(err)
    }
}

impl From<io::Error> for RequestError {
    fn from(err: io::Error) -> Self {
        Self::Upload(err)
    }
}

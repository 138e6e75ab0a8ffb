// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam between `oxigram-client` and whatever moves requests over the
//! network.
//!
//! Connection management, encryption, retries and flood-wait handling all
//! live behind [`Sender`]; this crate only fixes its shape and the errors it
//! may report.
mod errors;

pub use errors::{InvocationError, RpcError};

use async_trait::async_trait;
use oxigram_tl_types as tl;
use std::sync::Arc;

/// Anything able to perform a remote call and hand back the raw response.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn invoke(&self, request: tl::Request) -> Result<tl::Response, InvocationError>;
}

#[async_trait]
impl<S: Sender + ?Sized> Sender for Arc<S> {
    async fn invoke(&self, request: tl::Request) -> Result<tl::Response, InvocationError> {
        (**self).invoke(request).await
    }
}

#[async_trait]
impl<S: Sender + ?Sized> Sender for Box<S> {
    async fn invoke(&self, request: tl::Request) -> Result<tl::Response, InvocationError> {
        (**self).invoke(request).await
    }
}

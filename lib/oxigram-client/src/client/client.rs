// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::services::{
    AmbientResolver, EntityParser, FileUploader, NoUploads, PeerResolver, PlainText,
};
use crate::types::ParseMode;
use oxigram_mtsender::Sender;
use std::fmt;
use std::sync::Arc;

/// Everything the [`Client`] needs to operate.
pub struct Config {
    /// Transport used to invoke every request.
    pub sender: Arc<dyn Sender>,

    /// Turns chat references into peers. Defaults to [`AmbientResolver`].
    pub resolver: Arc<dyn PeerResolver>,

    /// Uploads local files before sending them as media. Defaults to [`NoUploads`].
    pub uploader: Arc<dyn FileUploader>,

    /// Extracts formatting entities from text. Defaults to [`PlainText`].
    pub parser: Arc<dyn EntityParser>,

    /// Additional parameters that can have sane defaults.
    pub params: InitParams,
}

#[derive(Clone, Debug, Default)]
pub struct InitParams {
    /// How text is parsed when a call does not specify it.
    pub parse_mode: ParseMode,
}

impl Config {
    pub fn new<S: Sender + 'static>(sender: S) -> Self {
        Self {
            sender: Arc::new(sender),
            resolver: Arc::new(AmbientResolver),
            uploader: Arc::new(NoUploads),
            parser: Arc::new(PlainText),
            params: InitParams::default(),
        }
    }

    pub fn resolver<R: PeerResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn uploader<U: FileUploader + 'static>(mut self, uploader: U) -> Self {
        self.uploader = Arc::new(uploader);
        self
    }

    pub fn parser<P: EntityParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.params.parse_mode = mode;
        self
    }
}

pub(crate) struct ClientInner {
    pub(crate) config: Config,
}

/// A client capable of invoking requests through the configured [`Sender`].
///
/// Cloning the client is cheap, and every clone shares the same configuration.
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

impl Client {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(ClientInner { config }))
    }

    pub(crate) fn config(&self) -> &Config {
        &self.0.config
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("params", &self.0.config.params)
            .finish_non_exhaustive()
    }
}

/// Two clients are equal if they share the same configuration.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

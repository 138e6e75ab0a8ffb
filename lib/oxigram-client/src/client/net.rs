// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, RequestError};
use crate::types::{ChatRef, InputText, ParseMode};
use log::debug;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;

/// Method implementations directly related with network operations.
impl Client {
    /// Invoke a raw API call. This directly sends the request to Telegram's servers.
    ///
    /// Using function definitions corresponding to a different layer is likely to cause the
    /// responses to the request to not be understood.
    ///
    /// <div class="stab unstable">
    ///
    /// **Warning**: this method is **not** part of the stability guarantees of semantic
    /// versioning. It **may** break during *minor* version changes (but not on patch version
    /// changes). Use with care.
    ///
    /// </div>
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use oxigram_tl_types as tl;
    ///
    /// dbg!(client.invoke(&tl::functions::account::GetAccountTtl {}).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: tl::RemoteCall>(
        &self,
        request: &R,
    ) -> Result<R::Return, InvocationError> {
        let request: tl::Request = request.clone().into();
        debug!("invoking {}", request.name());

        let response = match self.config().sender.invoke(request.clone()).await {
            Ok(response) => response,
            Err(InvocationError::Rpc(err)) if err.caused_by.is_none() => {
                return Err(InvocationError::Rpc(err.with_caused_by(&request)));
            }
            Err(err) => return Err(err),
        };

        R::Return::try_from(response).map_err(InvocationError::from)
    }

    /// Invoke a raw API call on behalf of the business account behind `connection_id`.
    pub async fn invoke_with_business_connection<R: tl::RemoteCall>(
        &self,
        request: &R,
        connection_id: &str,
    ) -> Result<R::Return, InvocationError> {
        self.invoke(&tl::functions::InvokeWithBusinessConnection {
            connection_id: connection_id.to_string(),
            query: request.clone(),
        })
        .await
    }

    /// Invoke the call directly, or through the business connection if there is one.
    pub(crate) async fn invoke_maybe_business<R: tl::RemoteCall>(
        &self,
        request: &R,
        connection_id: Option<&str>,
    ) -> Result<R::Return, InvocationError> {
        match connection_id {
            Some(id) => self.invoke_with_business_connection(request, id).await,
            None => self.invoke(request).await,
        }
    }

    /// Resolve a chat reference into the peer requests expect, using the configured
    /// [`PeerResolver`](crate::PeerResolver).
    pub async fn resolve_peer<C: Into<ChatRef>>(
        &self,
        chat: C,
    ) -> Result<tl::enums::InputPeer, RequestError> {
        let chat = chat.into();
        match self.config().resolver.resolve_peer(&chat).await? {
            Some(peer) => Ok(peer),
            None => Err(RequestError::PeerNotFound(chat)),
        }
    }

    /// Split the text into plain text and entities.
    ///
    /// Explicit entities win over the parse mode, which in turn defaults to the client's.
    pub(crate) fn parse_text(&self, text: &InputText) -> (String, Vec<tl::enums::MessageEntity>) {
        if let Some(entities) = &text.entities {
            return (text.text.clone(), entities.clone());
        }

        match text.parse_mode.unwrap_or(self.config().params.parse_mode) {
            ParseMode::Disabled => (text.text.clone(), Vec::new()),
            mode => self.config().parser.parse(&text.text, mode),
        }
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::Client;
use crate::types::FoundContacts;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;

const MAX_LIMIT: i32 = 100;

impl Client {
    /// Search chats by name or username, both among the known chats and globally.
    ///
    /// A `limit` of 0 asks for as many results as the server allows in one request.
    pub async fn search_contacts(
        &self,
        query: &str,
        limit: i32,
    ) -> Result<FoundContacts, InvocationError> {
        let total = if limit <= 0 { i32::MAX } else { limit };
        let found = self
            .invoke(&tl::functions::contacts::Search {
                q: query.to_string(),
                limit: total.min(MAX_LIMIT),
            })
            .await?;
        Ok(FoundContacts::from_raw(found))
    }
}

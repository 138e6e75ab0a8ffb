// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, RequestError};
use crate::types::ShippingOption;
use oxigram_tl_types as tl;

impl Client {
    /// Reply to a shipping query received by the bot.
    ///
    /// When `ok` is true, `shipping_options` must not be empty. Otherwise, `error_message`
    /// explains to the user why the order cannot be completed.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client, query_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    /// use oxigram_client::types::{LabeledPrice, ShippingOption};
    ///
    /// let options = vec![ShippingOption::new(
    ///     "post",
    ///     "Regular mail",
    ///     vec![LabeledPrice::new("Shipping", 500)],
    /// )];
    /// client.answer_shipping_query(query_id, true, options, None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn answer_shipping_query(
        &self,
        shipping_query_id: &str,
        ok: bool,
        shipping_options: Vec<ShippingOption>,
        error_message: Option<String>,
    ) -> Result<bool, RequestError> {
        if ok && shipping_options.is_empty() {
            return Err(RequestError::InvalidArgument(
                "Shipping options required.".to_string(),
            ));
        }

        let query_id = shipping_query_id.parse::<i64>().map_err(|_| {
            RequestError::InvalidArgument(format!(
                "invalid shipping query id: {shipping_query_id}"
            ))
        })?;

        Ok(self
            .invoke(&tl::functions::messages::SetBotShippingResults {
                query_id,
                error: error_message,
                shipping_options: (!shipping_options.is_empty())
                    .then(|| shipping_options.into_iter().map(Into::into).collect()),
            })
            .await?)
    }
}

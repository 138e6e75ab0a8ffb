// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{ChatMap, User};
use crate::{Client, RequestError};
use oxigram_tl_types as tl;
use std::fmt;

/// A portion of the price for goods or services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledPrice {
    pub label: String,
    /// Price in the smallest units of the currency.
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    pub(crate) fn from_raw(price: tl::enums::LabeledPrice) -> Self {
        let tl::enums::LabeledPrice::Price(price) = price;
        Self {
            label: price.label,
            amount: price.amount,
        }
    }
}

impl From<LabeledPrice> for tl::enums::LabeledPrice {
    fn from(price: LabeledPrice) -> Self {
        tl::types::LabeledPrice {
            label: price.label,
            amount: price.amount,
        }
        .into()
    }
}

/// One shipping option offered to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

impl ShippingOption {
    pub fn new(id: impl Into<String>, title: impl Into<String>, prices: Vec<LabeledPrice>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prices,
        }
    }
}

impl From<ShippingOption> for tl::enums::ShippingOption {
    fn from(option: ShippingOption) -> Self {
        tl::types::ShippingOption {
            id: option.id,
            title: option.title,
            prices: option.prices.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Two-letter ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

impl ShippingAddress {
    fn from_raw(address: tl::enums::PostAddress) -> Self {
        let tl::enums::PostAddress::Address(address) = address;
        Self {
            country_code: address.country_iso2,
            state: address.state,
            city: address.city,
            street_line1: address.street_line1,
            street_line2: address.street_line2,
            post_code: address.post_code,
        }
    }
}

/// A bot received a shipping address for an invoice with flexible pricing, and must answer
/// with the available options.
#[derive(Clone)]
pub struct ShippingQuery {
    client: Client,
    pub id: String,
    pub from_user: Option<User>,
    /// Bot-specified invoice payload.
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

impl ShippingQuery {
    pub(crate) fn from_raw(
        client: &Client,
        query: tl::types::UpdateBotShippingQuery,
        chats: &ChatMap,
    ) -> Self {
        Self {
            client: client.clone(),
            id: query.query_id.to_string(),
            from_user: chats.get_user(query.user_id).cloned(),
            invoice_payload: String::from_utf8_lossy(&query.payload).into_owned(),
            shipping_address: ShippingAddress::from_raw(query.shipping_address),
        }
    }

    /// Answer the query, see [`Client::answer_shipping_query`].
    pub async fn answer(
        &self,
        ok: bool,
        shipping_options: Vec<ShippingOption>,
        error_message: Option<String>,
    ) -> Result<bool, RequestError> {
        self.client
            .answer_shipping_query(&self.id, ok, shipping_options, error_message)
            .await
    }
}

impl fmt::Debug for ShippingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShippingQuery")
            .field("id", &self.id)
            .field("from_user", &self.from_user)
            .field("invoice_payload", &self.invoice_payload)
            .field("shipping_address", &self.shipping_address)
            .finish()
    }
}

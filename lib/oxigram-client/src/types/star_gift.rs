// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{ChatMap, Document, Sticker, User};
use crate::utils::{self, Date};
use crate::{Client, RequestError};
use log::warn;
use oxigram_tl_types as tl;
use std::fmt;

/// A gift that can be bought with Telegram Stars, either from the catalogue or one received
/// by a user.
///
/// Gifts that were received also know who sent them and in which message, which makes the
/// bound methods [`StarGift::save`], [`StarGift::hide`] and [`StarGift::convert`] usable.
#[derive(Clone)]
pub struct StarGift {
    client: Client,
    pub id: i64,
    pub sticker: Option<Sticker>,
    pub text: Option<String>,
    pub entities: Option<Vec<tl::enums::MessageEntity>>,
    pub message_id: Option<i32>,
    pub date: Option<Date>,
    pub from_user: Option<User>,
    /// Price of this gift in stars.
    pub price: i64,
    /// The number of stars you get if you convert this gift.
    pub convert_price: i64,
    /// How many are left for purchase, only known for limited gifts.
    pub available_amount: Option<i32>,
    pub total_amount: Option<i32>,
    pub is_limited: bool,
    pub is_name_hidden: Option<bool>,
    pub is_saved: Option<bool>,
}

impl StarGift {
    /// A gift from the catalogue of gifts available for purchase.
    pub(crate) fn from_raw(client: &Client, gift: tl::enums::StarGift) -> Self {
        let tl::enums::StarGift::Gift(gift) = gift;
        let sticker = Sticker::from_document(&Document::from_raw(gift.sticker));
        if sticker.is_none() {
            warn!("star gift {} has no sticker attributes", gift.id);
        }

        Self {
            client: client.clone(),
            id: gift.id,
            sticker,
            text: None,
            entities: None,
            message_id: None,
            date: None,
            from_user: None,
            price: gift.stars,
            convert_price: gift.convert_stars,
            available_amount: gift.availability_remains,
            total_amount: gift.availability_total,
            is_limited: gift.limited,
            is_name_hidden: None,
            is_saved: None,
        }
    }

    /// A gift shown on a user's profile.
    pub(crate) fn from_user_gift(
        client: &Client,
        gift: tl::enums::UserStarGift,
        chats: &ChatMap,
    ) -> Self {
        let tl::enums::UserStarGift::Gift(gift) = gift;
        let (text, entities) = utils::text_with_entities(gift.message);
        let base = Self::from_raw(client, gift.gift);

        Self {
            text,
            entities,
            message_id: gift.msg_id,
            date: Some(utils::date(gift.date)),
            from_user: gift.from_id.and_then(|id| chats.get_user(id)).cloned(),
            is_name_hidden: Some(gift.name_hidden),
            is_saved: Some(!gift.unsaved),
            convert_price: gift.convert_stars.unwrap_or(base.convert_price),
            ..base
        }
    }

    /// A gift received through a service message.
    pub(crate) fn from_action(
        client: &Client,
        action: tl::types::MessageActionStarGift,
        message: &tl::types::MessageService,
        chats: &ChatMap,
    ) -> Self {
        let (text, entities) = utils::text_with_entities(action.message);
        let gift = Self::from_raw(client, action.gift);
        let convert_price = action.convert_stars.unwrap_or(gift.convert_price);

        Self {
            text,
            entities,
            message_id: Some(message.id),
            date: Some(utils::date(message.date)),
            from_user: match &message.peer_id {
                tl::enums::Peer::User(user) => chats.get_user(user.user_id).cloned(),
                _ => None,
            },
            is_name_hidden: Some(action.name_hidden),
            is_saved: Some(action.saved),
            convert_price,
            ..gift
        }
    }

    /// The sender of the gift, using the access hash it came with, and its message.
    fn received_from(&self) -> Result<(tl::enums::InputUser, i32), RequestError> {
        match (&self.from_user, self.message_id) {
            (Some(user), Some(message_id)) => Ok((user.to_input_user(), message_id)),
            _ => Err(RequestError::InvalidArgument(
                "The gift was not received by the current account.".to_string(),
            )),
        }
    }

    async fn set_saved(&self, unsave: bool) -> Result<bool, RequestError> {
        let (user_id, msg_id) = self.received_from()?;
        Ok(self
            .client
            .invoke(&tl::functions::payments::SaveStarGift {
                unsave,
                user_id,
                msg_id,
            })
            .await?)
    }

    /// Display the gift on the profile of the account that received it.
    pub async fn save(&self) -> Result<bool, RequestError> {
        self.set_saved(false).await
    }

    /// Stop displaying the gift on the profile of the account that received it.
    pub async fn hide(&self) -> Result<bool, RequestError> {
        self.set_saved(true).await
    }

    /// Trade the gift for [`StarGift::convert_price`] stars.
    pub async fn convert(&self) -> Result<bool, RequestError> {
        let (user_id, msg_id) = self.received_from()?;
        Ok(self
            .client
            .invoke(&tl::functions::payments::ConvertStarGift { user_id, msg_id })
            .await?)
    }
}

impl fmt::Debug for StarGift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarGift")
            .field("id", &self.id)
            .field("sticker", &self.sticker)
            .field("text", &self.text)
            .field("message_id", &self.message_id)
            .field("date", &self.date)
            .field("from_user", &self.from_user)
            .field("price", &self.price)
            .field("convert_price", &self.convert_price)
            .field("available_amount", &self.available_amount)
            .field("total_amount", &self.total_amount)
            .field("is_limited", &self.is_limited)
            .field("is_name_hidden", &self.is_name_hidden)
            .field("is_saved", &self.is_saved)
            .finish()
    }
}

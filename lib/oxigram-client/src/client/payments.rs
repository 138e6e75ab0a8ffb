// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to invoices, Telegram Stars and gifts.
use super::{Client, RequestError};
use crate::types::{
    ChatMap, ChatRef, CheckedGiftCode, InputText, InvoiceRef, IterBuffer, PaymentForm, StarGift,
};
use crate::utils;
use log::warn;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;

const MAX_LIMIT: usize = 100;

pub type StarGiftIter = IterBuffer<tl::functions::payments::GetUserStarGifts, StarGift>;

impl StarGiftIter {
    fn new(client: &Client, user_id: tl::enums::InputUser) -> Self {
        Self::from_request(
            client,
            MAX_LIMIT,
            tl::functions::payments::GetUserStarGifts {
                user_id,
                offset: String::new(),
                limit: 0,
            },
        )
    }

    /// Determines how many gifts the user has received in total.
    ///
    /// This only performs a network call if `next` has not been called before.
    pub async fn total(&mut self) -> Result<usize, InvocationError> {
        if let Some(total) = self.total {
            return Ok(total);
        }

        let mut request = self.request.clone();
        request.limit = 1;
        let tl::enums::payments::UserStarGifts::Gifts(gifts) =
            self.client.invoke(&request).await?;
        let total = gifts.count as usize;
        self.total = Some(total);
        Ok(total)
    }

    /// Return the next `StarGift` from the internal buffer, filling the buffer previously if
    /// it's empty.
    ///
    /// Returns `None` if the `limit` is reached or there are no gifts left.
    pub async fn next(&mut self) -> Result<Option<StarGift>, InvocationError> {
        if let Some(result) = self.next_raw() {
            return result;
        }

        self.request.limit = self.determine_limit(MAX_LIMIT);
        let tl::enums::payments::UserStarGifts::Gifts(gifts) =
            self.client.invoke(&self.request).await?;

        self.total = Some(gifts.count as usize);
        let chats = ChatMap::new(gifts.users, Vec::new());
        self.buffer.extend(
            gifts
                .gifts
                .into_iter()
                .map(|gift| StarGift::from_user_gift(&self.client, gift, &chats)),
        );

        match gifts.next_offset {
            Some(offset) if !offset.is_empty() && !self.buffer.is_empty() => {
                self.request.offset = offset;
            }
            _ => self.last_chunk = true,
        }

        Ok(self.pop_item())
    }
}

impl Client {
    /// Resolve the chat into the user that payments and gifts require.
    async fn resolve_user<C: Into<ChatRef>>(
        &self,
        chat: C,
    ) -> Result<tl::enums::InputUser, RequestError> {
        let peer = self.resolve_peer(chat).await?;
        utils::input_user_from_peer(&peer).ok_or_else(|| {
            RequestError::InvalidArgument("chat must belong to a user.".to_string())
        })
    }

    async fn input_invoice<C: Into<ChatRef>>(
        &self,
        chat: C,
        invoice: InvoiceRef,
    ) -> Result<tl::enums::InputInvoice, RequestError> {
        Ok(match invoice {
            InvoiceRef::Message(msg_id) => tl::types::InputInvoiceMessage {
                peer: self.resolve_peer(chat).await?,
                msg_id,
            }
            .into(),
            InvoiceRef::Link(link) => tl::types::InputInvoiceSlug {
                slug: utils::invoice_slug(&link),
            }
            .into(),
        })
    }

    /// Get information about an invoice, either attached to a message or behind an invoice
    /// link.
    ///
    /// The chat is only used for invoices attached to messages.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// // From a message in the chat.
    /// let form = client.get_payment_form("@shop_bot", 123).await?;
    ///
    /// // From an invoice link.
    /// let form = client.get_payment_form("me", "https://t.me/$xvbzUtt5sUlJCAAATqZrWRy9Yzk").await?;
    /// println!("{} costs {} {}", form.title.as_deref().unwrap_or_default(), form.total_amount(), form.currency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_payment_form<C: Into<ChatRef>, I: Into<InvoiceRef>>(
        &self,
        chat: C,
        invoice: I,
    ) -> Result<PaymentForm, RequestError> {
        let invoice = self.input_invoice(chat, invoice.into()).await?;
        let form = self
            .invoke(&tl::functions::payments::GetPaymentForm {
                invoice,
                theme_params: None,
            })
            .await?;
        Ok(PaymentForm::from_raw(form))
    }

    /// Pay an invoice priced in Telegram Stars.
    ///
    /// Invoices that need a payment provider cannot be paid this way and are rejected by the
    /// server.
    pub async fn send_payment_form<C: Into<ChatRef>, I: Into<InvoiceRef>>(
        &self,
        chat: C,
        invoice: I,
    ) -> Result<bool, RequestError> {
        let invoice = self.input_invoice(chat, invoice.into()).await?;
        self.pay_stars_invoice(invoice).await
    }

    /// Fetch the form for the invoice and pay it with stars.
    async fn pay_stars_invoice(
        &self,
        invoice: tl::enums::InputInvoice,
    ) -> Result<bool, RequestError> {
        let form = self
            .invoke(&tl::functions::payments::GetPaymentForm {
                invoice: invoice.clone(),
                theme_params: None,
            })
            .await?;

        let result = self
            .invoke(&tl::functions::payments::SendStarsForm {
                form_id: form.form_id(),
                invoice,
            })
            .await?;

        match result {
            tl::enums::payments::PaymentResult::Result(_) => Ok(true),
            tl::enums::payments::PaymentResult::VerificationNeeded(needed) => {
                Err(RequestError::InvalidArgument(format!(
                    "payment needs verification at {}",
                    needed.url
                )))
            }
        }
    }

    /// Send a gift from the catalogue to a user, paying for it with stars.
    ///
    /// The optional `text` is shown alongside the gift. With `hide_my_name`, only the
    /// receiver can see who sent the gift.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let gifts = client.get_star_gifts().await?;
    /// if let Some(gift) = gifts.first() {
    ///     client.send_star_gift("@friend", gift.id, Some("Happy birthday!".into()), false).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_star_gift<C: Into<ChatRef>>(
        &self,
        chat: C,
        gift_id: i64,
        text: Option<InputText>,
        hide_my_name: bool,
    ) -> Result<bool, RequestError> {
        let user_id = self.resolve_user(chat).await?;

        let message = text
            .map(|text| self.parse_text(&text))
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, entities)| tl::types::TextWithEntities { text, entities }.into());

        self.pay_stars_invoice(
            tl::types::InputInvoiceStarGift {
                hide_name: hide_my_name,
                user_id,
                gift_id,
                message,
            }
            .into(),
        )
        .await
    }

    /// Get every gift currently available for purchase.
    pub async fn get_star_gifts(&self) -> Result<Vec<StarGift>, InvocationError> {
        let gifts = self
            .invoke(&tl::functions::payments::GetStarGifts { hash: 0 })
            .await?;

        Ok(match gifts {
            tl::enums::payments::StarGifts::Gifts(gifts) => gifts
                .gifts
                .into_iter()
                .map(|gift| StarGift::from_raw(self, gift))
                .collect(),
            tl::enums::payments::StarGifts::NotModified => {
                warn!("star gifts were not modified despite asking for all of them");
                Vec::new()
            }
        })
    }

    /// Iterate over the gifts shown on a user's profile, most recent first.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let mut gifts = client.iter_user_star_gifts("me").await?.limit(20);
    ///
    /// while let Some(gift) = gifts.next().await? {
    ///     println!("gift {} worth {} stars", gift.id, gift.price);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn iter_user_star_gifts<C: Into<ChatRef>>(
        &self,
        chat: C,
    ) -> Result<StarGiftIter, RequestError> {
        let user_id = self.resolve_user(chat).await?;
        Ok(StarGiftIter::new(self, user_id))
    }

    /// Get how many gifts are shown on a user's profile.
    pub async fn get_user_star_gifts_count<C: Into<ChatRef>>(
        &self,
        chat: C,
    ) -> Result<usize, RequestError> {
        let user_id = self.resolve_user(chat).await?;
        Ok(StarGiftIter::new(self, user_id).total().await?)
    }

    async fn save_star_gift<C: Into<ChatRef>>(
        &self,
        chat: C,
        message_id: i32,
        unsave: bool,
    ) -> Result<bool, RequestError> {
        let user_id = self.resolve_user(chat).await?;
        Ok(self
            .invoke(&tl::functions::payments::SaveStarGift {
                unsave,
                user_id,
                msg_id: message_id,
            })
            .await?)
    }

    /// Display a received gift on the profile of the current account.
    ///
    /// `chat` is the sender of the gift and `message_id` the service message it arrived in.
    pub async fn show_star_gift<C: Into<ChatRef>>(
        &self,
        chat: C,
        message_id: i32,
    ) -> Result<bool, RequestError> {
        self.save_star_gift(chat, message_id, false).await
    }

    /// Stop displaying a received gift on the profile of the current account.
    pub async fn hide_star_gift<C: Into<ChatRef>>(
        &self,
        chat: C,
        message_id: i32,
    ) -> Result<bool, RequestError> {
        self.save_star_gift(chat, message_id, true).await
    }

    /// Trade a received gift for stars. The gift disappears from the profile.
    pub async fn convert_star_gift<C: Into<ChatRef>>(
        &self,
        chat: C,
        message_id: i32,
    ) -> Result<bool, RequestError> {
        let user_id = self.resolve_user(chat).await?;
        Ok(self
            .invoke(&tl::functions::payments::ConvertStarGift {
                user_id,
                msg_id: message_id,
            })
            .await?)
    }

    /// Get information about a gift code, given its link (`t.me/giftcode/slug`) or slug.
    pub async fn check_gift_code(&self, link: &str) -> Result<CheckedGiftCode, InvocationError> {
        let code = self
            .invoke(&tl::functions::payments::CheckGiftCode {
                slug: utils::gift_code_slug(link),
            })
            .await?;
        Ok(CheckedGiftCode::from_raw(code))
    }

    /// Claim the Telegram Premium subscription behind a gift code.
    pub async fn apply_gift_code(&self, link: &str) -> Result<bool, InvocationError> {
        self.invoke(&tl::functions::payments::ApplyGiftCode {
            slug: utils::gift_code_slug(link),
        })
        .await?;
        Ok(true)
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{ChatMap, LabeledPrice, User};
use oxigram_tl_types as tl;

/// Basic information about an invoice attached to a message.
#[derive(Clone, Debug, PartialEq)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    /// Three-letter ISO 4217 currency code, or `XTR` for Telegram Stars.
    pub currency: String,
    /// Total price in the smallest units of the currency.
    pub total_amount: i64,
    /// Deep-linking parameter that can be used to generate this invoice.
    pub start_parameter: Option<String>,
    pub is_shipping_address_requested: bool,
    pub is_test: bool,
}

impl Invoice {
    pub(crate) fn from_raw(invoice: tl::types::MessageMediaInvoice) -> Self {
        Self {
            title: invoice.title,
            description: invoice.description,
            currency: invoice.currency,
            total_amount: invoice.total_amount,
            start_parameter: Some(invoice.start_param).filter(|param| !param.is_empty()),
            is_shipping_address_requested: invoice.shipping_address_requested,
            is_test: invoice.test,
        }
    }
}

/// Which invoice to fetch a payment form for.
#[derive(Clone, Debug, PartialEq)]
pub enum InvoiceRef {
    /// The invoice attached to a message in the chat.
    Message(i32),
    /// An invoice link (`t.me/$slug`) or the slug itself.
    Link(String),
}

impl From<i32> for InvoiceRef {
    fn from(message_id: i32) -> Self {
        Self::Message(message_id)
    }
}

impl From<&str> for InvoiceRef {
    fn from(link: &str) -> Self {
        Self::Link(link.to_string())
    }
}

impl From<String> for InvoiceRef {
    fn from(link: String) -> Self {
        Self::Link(link)
    }
}

/// A form to pay for an invoice, as returned by
/// [`Client::get_payment_form`](crate::Client::get_payment_form).
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentForm {
    /// Identifier needed to pay the form.
    pub id: i64,
    /// The bot that issued the invoice. Unknown for gift forms.
    pub bot: Option<User>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub is_test: bool,
    /// Link to the payment provider, for forms not paid with stars.
    pub url: Option<String>,
    pub can_save_credentials: bool,
    pub is_password_missing: bool,
    pub raw: tl::enums::payments::PaymentForm,
}

impl PaymentForm {
    pub(crate) fn from_raw(form: tl::enums::payments::PaymentForm) -> Self {
        use tl::enums::payments::PaymentForm as F;

        let (bot, title, description, invoice, url, can_save_credentials, is_password_missing) =
            match &form {
                F::Form(f) => {
                    let chats = ChatMap::new(f.users.clone(), Vec::new());
                    (
                        chats.get_user(f.bot_id).cloned(),
                        Some(f.title.clone()),
                        Some(f.description.clone()),
                        &f.invoice,
                        Some(f.url.clone()),
                        f.can_save_credentials,
                        f.password_missing,
                    )
                }
                F::Stars(f) => {
                    let chats = ChatMap::new(f.users.clone(), Vec::new());
                    (
                        chats.get_user(f.bot_id).cloned(),
                        Some(f.title.clone()),
                        Some(f.description.clone()),
                        &f.invoice,
                        None,
                        false,
                        false,
                    )
                }
                F::StarGift(f) => (None, None, None, &f.invoice, None, false, false),
            };
        let tl::enums::Invoice::Invoice(invoice) = invoice;

        Self {
            id: form.form_id(),
            bot,
            title,
            description,
            currency: invoice.currency.clone(),
            prices: invoice
                .prices
                .iter()
                .cloned()
                .map(LabeledPrice::from_raw)
                .collect(),
            is_test: invoice.test,
            url,
            can_save_credentials,
            is_password_missing,
            raw: form,
        }
    }

    /// Sum of every price in the form.
    pub fn total_amount(&self) -> i64 {
        self.prices.iter().map(|price| price.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(prices: Vec<(&str, i64)>) -> tl::enums::Invoice {
        tl::types::Invoice {
            test: true,
            name_requested: false,
            phone_requested: false,
            email_requested: false,
            shipping_address_requested: false,
            flexible: false,
            phone_to_provider: false,
            email_to_provider: false,
            recurring: false,
            currency: "XTR".into(),
            prices: prices
                .into_iter()
                .map(|(label, amount)| {
                    tl::types::LabeledPrice {
                        label: label.into(),
                        amount,
                    }
                    .into()
                })
                .collect(),
            max_tip_amount: None,
            suggested_tip_amounts: None,
            terms_url: None,
        }
        .into()
    }

    #[test]
    fn check_star_gift_form() {
        let form = PaymentForm::from_raw(
            tl::types::payments::PaymentFormStarGift {
                form_id: 42,
                invoice: invoice(vec![("Gift", 25)]),
            }
            .into(),
        );

        assert_eq!(form.id, 42);
        assert_eq!(form.bot, None);
        assert_eq!(form.currency, "XTR");
        assert_eq!(form.total_amount(), 25);
        assert!(form.is_test);
    }

    #[test]
    fn check_empty_start_parameter_is_none() {
        let invoice = Invoice::from_raw(tl::types::MessageMediaInvoice {
            shipping_address_requested: true,
            test: false,
            title: "Box".into(),
            description: "A box".into(),
            receipt_msg_id: None,
            currency: "EUR".into(),
            total_amount: 1050,
            start_param: String::new(),
            extended_media: None,
        });

        assert_eq!(invoice.start_parameter, None);
        assert!(invoice.is_shipping_address_requested);
        assert_eq!(invoice.total_amount, 1050);
    }
}

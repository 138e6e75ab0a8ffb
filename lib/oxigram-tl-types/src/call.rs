// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::{enums, functions};
use std::error::Error;
use std::fmt;

/// Structures implementing this trait indicate that they are suitable for
/// use to perform Remote Procedure Calls (RPC), and know what the type of
/// the response will be.
pub trait RemoteCall: Clone + Into<Request> {
    /// The type of the "return" value coming from the other end of the
    /// connection.
    type Return: TryFrom<Response, Error = UnexpectedResponse>;
}

/// The error type indicating the transport answered a call with a response
/// of a different kind than the one the call returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnexpectedResponse {
    pub expected: &'static str,
    pub got: &'static str,
}

impl Error for UnexpectedResponse {}

impl fmt::Display for UnexpectedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} response, got {}", self.expected, self.got)
    }
}

macro_rules! responses {
    ($($variant:ident($ty:ty) = $name:literal,)*) => {
        /// Every kind of value the calls in [`crate::functions`] may return.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        pub enum Response {
            $($variant($ty),)*
        }

        impl Response {
            /// Name of the schema type carried by this response.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $name,)*
                }
            }
        }

        $(
            impl From<$ty> for Response {
                fn from(x: $ty) -> Self {
                    Self::$variant(x)
                }
            }

            impl TryFrom<Response> for $ty {
                type Error = UnexpectedResponse;

                fn try_from(response: Response) -> Result<Self, Self::Error> {
                    match response {
                        Response::$variant(x) => Ok(x),
                        #[allow(unreachable_patterns)]
                        other => Err(UnexpectedResponse {
                            expected: $name,
                            got: other.name(),
                        }),
                    }
                }
            }
        )*
    };
}

macro_rules! functions {
    ($($variant:ident($func:ty) = $name:literal -> $ret:ty,)*) => {
        /// Every call the client may hand to the transport.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        pub enum Request {
            $($variant($func),)*
            InvokeWithBusinessConnection(functions::InvokeWithBusinessConnection<Box<Request>>),
        }

        impl Request {
            /// Name of the schema function this request invokes.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $name,)*
                    Self::InvokeWithBusinessConnection(_) => "invokeWithBusinessConnection",
                }
            }

            /// The request that will actually run, skipping any wrappers.
            pub fn innermost(&self) -> &Request {
                match self {
                    Self::InvokeWithBusinessConnection(call) => call.query.innermost(),
                    other => other,
                }
            }
        }

        $(
            impl From<$func> for Request {
                fn from(call: $func) -> Self {
                    Self::$variant(call)
                }
            }

            impl RemoteCall for $func {
                type Return = $ret;
            }
        )*
    };
}

responses! {
    Bool(bool) = "Bool",
    PrivacyRules(enums::account::PrivacyRules) = "account.PrivacyRules",
    AccountDaysTtl(enums::AccountDaysTtl) = "AccountDaysTTL",
    Found(enums::contacts::Found) = "contacts.Found",
    Dialogs(enums::messages::Dialogs) = "messages.Dialogs",
    PeerDialogs(enums::messages::PeerDialogs) = "messages.PeerDialogs",
    MessageMedia(enums::MessageMedia) = "MessageMedia",
    Updates(enums::Updates) = "Updates",
    PaymentForm(enums::payments::PaymentForm) = "payments.PaymentForm",
    PaymentResult(enums::payments::PaymentResult) = "payments.PaymentResult",
    StarGifts(enums::payments::StarGifts) = "payments.StarGifts",
    UserStarGifts(enums::payments::UserStarGifts) = "payments.UserStarGifts",
    CheckedGiftCode(enums::payments::CheckedGiftCode) = "payments.CheckedGiftCode",
}

functions! {
    AccountGetPrivacy(functions::account::GetPrivacy) = "account.getPrivacy"
        -> enums::account::PrivacyRules,
    AccountSetPrivacy(functions::account::SetPrivacy) = "account.setPrivacy"
        -> enums::account::PrivacyRules,
    AccountGetAccountTtl(functions::account::GetAccountTtl) = "account.getAccountTTL"
        -> enums::AccountDaysTtl,
    AccountSetAccountTtl(functions::account::SetAccountTtl) = "account.setAccountTTL" -> bool,
    AccountUpdatePersonalChannel(functions::account::UpdatePersonalChannel) = "account.updatePersonalChannel"
        -> bool,
    ContactsSearch(functions::contacts::Search) = "contacts.search" -> enums::contacts::Found,
    MessagesSetBotShippingResults(functions::messages::SetBotShippingResults) = "messages.setBotShippingResults"
        -> bool,
    MessagesGetDialogs(functions::messages::GetDialogs) = "messages.getDialogs"
        -> enums::messages::Dialogs,
    MessagesGetPinnedDialogs(functions::messages::GetPinnedDialogs) = "messages.getPinnedDialogs"
        -> enums::messages::PeerDialogs,
    MessagesUploadMedia(functions::messages::UploadMedia) = "messages.uploadMedia"
        -> enums::MessageMedia,
    MessagesSendMedia(functions::messages::SendMedia) = "messages.sendMedia" -> enums::Updates,
    MessagesSendPaidReaction(functions::messages::SendPaidReaction) = "messages.sendPaidReaction"
        -> enums::Updates,
    PaymentsGetPaymentForm(functions::payments::GetPaymentForm) = "payments.getPaymentForm"
        -> enums::payments::PaymentForm,
    PaymentsSendStarsForm(functions::payments::SendStarsForm) = "payments.sendStarsForm"
        -> enums::payments::PaymentResult,
    PaymentsGetStarGifts(functions::payments::GetStarGifts) = "payments.getStarGifts"
        -> enums::payments::StarGifts,
    PaymentsGetUserStarGifts(functions::payments::GetUserStarGifts) = "payments.getUserStarGifts"
        -> enums::payments::UserStarGifts,
    PaymentsSaveStarGift(functions::payments::SaveStarGift) = "payments.saveStarGift" -> bool,
    PaymentsConvertStarGift(functions::payments::ConvertStarGift) = "payments.convertStarGift"
        -> bool,
    PaymentsCheckGiftCode(functions::payments::CheckGiftCode) = "payments.checkGiftCode"
        -> enums::payments::CheckedGiftCode,
    PaymentsApplyGiftCode(functions::payments::ApplyGiftCode) = "payments.applyGiftCode"
        -> enums::Updates,
}

impl<X: RemoteCall> From<functions::InvokeWithBusinessConnection<X>> for Request {
    fn from(call: functions::InvokeWithBusinessConnection<X>) -> Self {
        Self::InvokeWithBusinessConnection(functions::InvokeWithBusinessConnection {
            connection_id: call.connection_id,
            query: Box::new(call.query.into()),
        })
    }
}

impl<X: RemoteCall> RemoteCall for functions::InvokeWithBusinessConnection<X> {
    type Return = X::Return;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn response_converts_back_into_its_kind() {
        let response = Response::from(true);
        assert_eq!(bool::try_from(response), Ok(true));
    }

    #[test]
    fn mismatched_response_names_both_kinds() {
        let response = Response::from(enums::AccountDaysTtl::Ttl(types::AccountDaysTtl {
            days: 180,
        }));
        assert_eq!(
            bool::try_from(response),
            Err(UnexpectedResponse {
                expected: "Bool",
                got: "AccountDaysTTL",
            })
        );
    }

    #[test]
    fn business_connection_wraps_the_inner_request() {
        let request: Request = functions::InvokeWithBusinessConnection {
            connection_id: "conn".to_string(),
            query: functions::payments::GetStarGifts { hash: 0 },
        }
        .into();

        assert_eq!(request.name(), "invokeWithBusinessConnection");
        assert_eq!(request.innermost().name(), "payments.getStarGifts");
        match request {
            Request::InvokeWithBusinessConnection(call) => {
                assert_eq!(call.connection_id, "conn");
                assert_eq!(
                    *call.query,
                    Request::PaymentsGetStarGifts(functions::payments::GetStarGifts { hash: 0 })
                );
            }
            _ => panic!("request was not wrapped"),
        }
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Remote procedure calls. Every function implements [`crate::RemoteCall`]
//! and converts into a [`crate::Request`].

/// Runs the wrapped query on behalf of a business connection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct InvokeWithBusinessConnection<X> {
    pub connection_id: String,
    pub query: X,
}

pub mod account {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetPrivacy {
        pub key: enums::InputPrivacyKey,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SetPrivacy {
        pub key: enums::InputPrivacyKey,
        pub rules: Vec<enums::InputPrivacyRule>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetAccountTtl {}

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SetAccountTtl {
        pub ttl: enums::AccountDaysTtl,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct UpdatePersonalChannel {
        pub channel: enums::InputChannel,
    }
}

pub mod contacts {
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct Search {
        pub q: String,
        pub limit: i32,
    }
}

pub mod messages {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SetBotShippingResults {
        pub query_id: i64,
        pub error: Option<String>,
        pub shipping_options: Option<Vec<enums::ShippingOption>>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetDialogs {
        pub exclude_pinned: bool,
        pub folder_id: Option<i32>,
        pub offset_date: i32,
        pub offset_id: i32,
        pub offset_peer: enums::InputPeer,
        pub limit: i32,
        pub hash: i64,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetPinnedDialogs {
        pub folder_id: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct UploadMedia {
        pub business_connection_id: Option<String>,
        pub peer: enums::InputPeer,
        pub media: enums::InputMedia,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SendMedia {
        pub silent: bool,
        pub background: bool,
        pub clear_draft: bool,
        pub noforwards: bool,
        pub update_stickersets_order: bool,
        pub invert_media: bool,
        pub peer: enums::InputPeer,
        pub reply_to: Option<enums::InputReplyTo>,
        pub media: enums::InputMedia,
        pub message: String,
        pub random_id: i64,
        pub entities: Option<Vec<enums::MessageEntity>>,
        pub schedule_date: Option<i32>,
        pub send_as: Option<enums::InputPeer>,
        pub effect: Option<i64>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SendPaidReaction {
        pub peer: enums::InputPeer,
        pub msg_id: i32,
        pub count: i32,
        pub random_id: i64,
        pub private: Option<bool>,
    }
}

pub mod payments {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetPaymentForm {
        pub invoice: enums::InputInvoice,
        pub theme_params: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SendStarsForm {
        pub form_id: i64,
        pub invoice: enums::InputInvoice,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetStarGifts {
        pub hash: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct GetUserStarGifts {
        pub user_id: enums::InputUser,
        pub offset: String,
        pub limit: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct SaveStarGift {
        pub unsave: bool,
        pub user_id: enums::InputUser,
        pub msg_id: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct ConvertStarGift {
        pub user_id: enums::InputUser,
        pub msg_id: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct CheckGiftCode {
        pub slug: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub struct ApplyGiftCode {
        pub slug: String,
    }
}

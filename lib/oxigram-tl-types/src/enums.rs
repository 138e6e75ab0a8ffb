// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boxed types of the schema. Each `enum` lists every constructor that may
//! stand in for the boxed type, and every concrete type converts into it.
use crate::types;

macro_rules! from_types {
    ($enum:ident { $($variant:ident($ty:path)),* $(,)? }) => {
        $(
            impl From<$ty> for $enum {
                fn from(x: $ty) -> Self {
                    $enum::$variant(x)
                }
            }
        )*
    };
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}
from_types!(Peer { User(types::PeerUser), Chat(types::PeerChat), Channel(types::PeerChannel) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputPeer {
    Empty,
    PeerSelf,
    Chat(types::InputPeerChat),
    User(types::InputPeerUser),
    Channel(types::InputPeerChannel),
}
from_types!(InputPeer {
    Chat(types::InputPeerChat),
    User(types::InputPeerUser),
    Channel(types::InputPeerChannel),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputUser {
    Empty,
    UserSelf,
    User(types::InputUser),
}
from_types!(InputUser { User(types::InputUser) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputChannel {
    Empty,
    Channel(types::InputChannel),
}
from_types!(InputChannel { Channel(types::InputChannel) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}
from_types!(User { Empty(types::UserEmpty), User(types::User) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}
from_types!(Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputPrivacyKey {
    StatusTimestamp,
    ChatInvite,
    PhoneCall,
    PhoneP2P,
    Forwards,
    ProfilePhoto,
    PhoneNumber,
    AddedByPhone,
    VoiceMessages,
    About,
    Birthday,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputPrivacyRule {
    AllowContacts,
    AllowAll,
    AllowUsers(types::InputPrivacyValueAllowUsers),
    DisallowContacts,
    DisallowAll,
    DisallowUsers(types::InputPrivacyValueDisallowUsers),
    AllowChatParticipants(types::InputPrivacyValueAllowChatParticipants),
    DisallowChatParticipants(types::InputPrivacyValueDisallowChatParticipants),
    AllowCloseFriends,
    AllowPremium,
}
from_types!(InputPrivacyRule {
    AllowUsers(types::InputPrivacyValueAllowUsers),
    DisallowUsers(types::InputPrivacyValueDisallowUsers),
    AllowChatParticipants(types::InputPrivacyValueAllowChatParticipants),
    DisallowChatParticipants(types::InputPrivacyValueDisallowChatParticipants),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum PrivacyRule {
    AllowContacts,
    AllowAll,
    AllowUsers(types::PrivacyValueAllowUsers),
    DisallowContacts,
    DisallowAll,
    DisallowUsers(types::PrivacyValueDisallowUsers),
    AllowChatParticipants(types::PrivacyValueAllowChatParticipants),
    DisallowChatParticipants(types::PrivacyValueDisallowChatParticipants),
    AllowCloseFriends,
    AllowPremium,
}
from_types!(PrivacyRule {
    AllowUsers(types::PrivacyValueAllowUsers),
    DisallowUsers(types::PrivacyValueDisallowUsers),
    AllowChatParticipants(types::PrivacyValueAllowChatParticipants),
    DisallowChatParticipants(types::PrivacyValueDisallowChatParticipants),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum AccountDaysTtl {
    Ttl(types::AccountDaysTtl),
}
from_types!(AccountDaysTtl { Ttl(types::AccountDaysTtl) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum LabeledPrice {
    Price(types::LabeledPrice),
}
from_types!(LabeledPrice { Price(types::LabeledPrice) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum ShippingOption {
    Option(types::ShippingOption),
}
from_types!(ShippingOption { Option(types::ShippingOption) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum PostAddress {
    Address(types::PostAddress),
}
from_types!(PostAddress { Address(types::PostAddress) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Invoice {
    Invoice(types::Invoice),
}
from_types!(Invoice { Invoice(types::Invoice) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Folder {
    Folder(types::Folder),
}
from_types!(Folder { Folder(types::Folder) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Dialog {
    Dialog(types::Dialog),
    Folder(types::DialogFolder),
}
from_types!(Dialog { Dialog(types::Dialog), Folder(types::DialogFolder) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum TextWithEntities {
    Text(types::TextWithEntities),
}
from_types!(TextWithEntities { Text(types::TextWithEntities) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum MessageEntity {
    Unknown(types::MessageEntityUnknown),
    Mention(types::MessageEntityMention),
    Hashtag(types::MessageEntityHashtag),
    BotCommand(types::MessageEntityBotCommand),
    Url(types::MessageEntityUrl),
    Email(types::MessageEntityEmail),
    Bold(types::MessageEntityBold),
    Italic(types::MessageEntityItalic),
    Code(types::MessageEntityCode),
    Pre(types::MessageEntityPre),
    TextUrl(types::MessageEntityTextUrl),
    MentionName(types::MessageEntityMentionName),
    Underline(types::MessageEntityUnderline),
    Strike(types::MessageEntityStrike),
    Spoiler(types::MessageEntitySpoiler),
    CustomEmoji(types::MessageEntityCustomEmoji),
    Blockquote(types::MessageEntityBlockquote),
}
from_types!(MessageEntity {
    Unknown(types::MessageEntityUnknown),
    Mention(types::MessageEntityMention),
    Hashtag(types::MessageEntityHashtag),
    BotCommand(types::MessageEntityBotCommand),
    Url(types::MessageEntityUrl),
    Email(types::MessageEntityEmail),
    Bold(types::MessageEntityBold),
    Italic(types::MessageEntityItalic),
    Code(types::MessageEntityCode),
    Pre(types::MessageEntityPre),
    TextUrl(types::MessageEntityTextUrl),
    MentionName(types::MessageEntityMentionName),
    Underline(types::MessageEntityUnderline),
    Strike(types::MessageEntityStrike),
    Spoiler(types::MessageEntitySpoiler),
    CustomEmoji(types::MessageEntityCustomEmoji),
    Blockquote(types::MessageEntityBlockquote),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum PhotoSize {
    Empty(types::PhotoSizeEmpty),
    Size(types::PhotoSize),
    PhotoStrippedSize(types::PhotoStrippedSize),
}
from_types!(PhotoSize {
    Empty(types::PhotoSizeEmpty),
    Size(types::PhotoSize),
    PhotoStrippedSize(types::PhotoStrippedSize),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Photo {
    Empty(types::PhotoEmpty),
    Photo(types::Photo),
}
from_types!(Photo { Empty(types::PhotoEmpty), Photo(types::Photo) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Document {
    Empty(types::DocumentEmpty),
    Document(types::Document),
}
from_types!(Document { Empty(types::DocumentEmpty), Document(types::Document) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum DocumentAttribute {
    ImageSize(types::DocumentAttributeImageSize),
    Animated,
    Sticker(types::DocumentAttributeSticker),
    Video(types::DocumentAttributeVideo),
    Filename(types::DocumentAttributeFilename),
}
from_types!(DocumentAttribute {
    ImageSize(types::DocumentAttributeImageSize),
    Sticker(types::DocumentAttributeSticker),
    Video(types::DocumentAttributeVideo),
    Filename(types::DocumentAttributeFilename),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputStickerSet {
    Empty,
    Id(types::InputStickerSetId),
    ShortName(types::InputStickerSetShortName),
}
from_types!(InputStickerSet {
    Id(types::InputStickerSetId),
    ShortName(types::InputStickerSetShortName),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputFile {
    File(types::InputFile),
    Big(types::InputFileBig),
}
from_types!(InputFile { File(types::InputFile), Big(types::InputFileBig) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputPhoto {
    Empty,
    Photo(types::InputPhoto),
}
from_types!(InputPhoto { Photo(types::InputPhoto) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputDocument {
    Empty,
    Document(types::InputDocument),
}
from_types!(InputDocument { Document(types::InputDocument) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputMedia {
    Empty,
    UploadedPhoto(types::InputMediaUploadedPhoto),
    Photo(types::InputMediaPhoto),
    UploadedDocument(types::InputMediaUploadedDocument),
    Document(types::InputMediaDocument),
    PaidMedia(types::InputMediaPaidMedia),
}
from_types!(InputMedia {
    UploadedPhoto(types::InputMediaUploadedPhoto),
    Photo(types::InputMediaPhoto),
    UploadedDocument(types::InputMediaUploadedDocument),
    Document(types::InputMediaDocument),
    PaidMedia(types::InputMediaPaidMedia),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputReplyTo {
    Message(types::InputReplyToMessage),
    Story(types::InputReplyToStory),
}
from_types!(InputReplyTo {
    Message(types::InputReplyToMessage),
    Story(types::InputReplyToStory),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum MessageReplyHeader {
    Header(types::MessageReplyHeader),
}
from_types!(MessageReplyHeader { Header(types::MessageReplyHeader) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum MessageMedia {
    Empty,
    Unsupported,
    Photo(types::MessageMediaPhoto),
    Document(types::MessageMediaDocument),
    Invoice(types::MessageMediaInvoice),
    PaidMedia(types::MessageMediaPaidMedia),
}
from_types!(MessageMedia {
    Photo(types::MessageMediaPhoto),
    Document(types::MessageMediaDocument),
    Invoice(types::MessageMediaInvoice),
    PaidMedia(types::MessageMediaPaidMedia),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum MessageExtendedMedia {
    Preview(types::MessageExtendedMediaPreview),
    Media(types::MessageExtendedMedia),
}
from_types!(MessageExtendedMedia {
    Preview(types::MessageExtendedMediaPreview),
    Media(types::MessageExtendedMedia),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum MessageAction {
    Empty,
    ChatEditTitle(types::MessageActionChatEditTitle),
    PinMessage,
    GiftCode(types::MessageActionGiftCode),
    StarGift(types::MessageActionStarGift),
}
from_types!(MessageAction {
    ChatEditTitle(types::MessageActionChatEditTitle),
    GiftCode(types::MessageActionGiftCode),
    StarGift(types::MessageActionStarGift),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}
from_types!(Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Boost {
    Boost(types::Boost),
}
from_types!(Boost { Boost(types::Boost) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Update {
    NewMessage(types::UpdateNewMessage),
    NewChannelMessage(types::UpdateNewChannelMessage),
    NewScheduledMessage(types::UpdateNewScheduledMessage),
    BotNewBusinessMessage(types::UpdateBotNewBusinessMessage),
    MessageId(types::UpdateMessageId),
    BotChatBoost(types::UpdateBotChatBoost),
    BotShippingQuery(types::UpdateBotShippingQuery),
}
from_types!(Update {
    NewMessage(types::UpdateNewMessage),
    NewChannelMessage(types::UpdateNewChannelMessage),
    NewScheduledMessage(types::UpdateNewScheduledMessage),
    BotNewBusinessMessage(types::UpdateBotNewBusinessMessage),
    MessageId(types::UpdateMessageId),
    BotChatBoost(types::UpdateBotChatBoost),
    BotShippingQuery(types::UpdateBotShippingQuery),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Updates {
    TooLong,
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    UpdateShortSentMessage(types::UpdateShortSentMessage),
}
from_types!(Updates {
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    UpdateShortSentMessage(types::UpdateShortSentMessage),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputInvoice {
    Message(types::InputInvoiceMessage),
    Slug(types::InputInvoiceSlug),
    StarGift(types::InputInvoiceStarGift),
}
from_types!(InputInvoice {
    Message(types::InputInvoiceMessage),
    Slug(types::InputInvoiceSlug),
    StarGift(types::InputInvoiceStarGift),
});

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum StarGift {
    Gift(types::StarGift),
}
from_types!(StarGift { Gift(types::StarGift) });

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum UserStarGift {
    Gift(types::UserStarGift),
}
from_types!(UserStarGift { Gift(types::UserStarGift) });

pub mod account {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum PrivacyRules {
        Rules(types::account::PrivacyRules),
    }
    from_types!(PrivacyRules { Rules(types::account::PrivacyRules) });
}

pub mod contacts {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum Found {
        Found(types::contacts::Found),
    }
    from_types!(Found { Found(types::contacts::Found) });
}

pub mod updates {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum State {
        State(types::updates::State),
    }
    from_types!(State { State(types::updates::State) });
}

pub mod messages {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum Dialogs {
        Dialogs(types::messages::Dialogs),
        Slice(types::messages::DialogsSlice),
        NotModified(types::messages::DialogsNotModified),
    }
    from_types!(Dialogs {
        Dialogs(types::messages::Dialogs),
        Slice(types::messages::DialogsSlice),
        NotModified(types::messages::DialogsNotModified),
    });

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum PeerDialogs {
        Dialogs(types::messages::PeerDialogs),
    }
    from_types!(PeerDialogs { Dialogs(types::messages::PeerDialogs) });
}

pub mod payments {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum PaymentForm {
        Form(types::payments::PaymentForm),
        Stars(types::payments::PaymentFormStars),
        StarGift(types::payments::PaymentFormStarGift),
    }
    from_types!(PaymentForm {
        Form(types::payments::PaymentForm),
        Stars(types::payments::PaymentFormStars),
        StarGift(types::payments::PaymentFormStarGift),
    });

    impl PaymentForm {
        /// Identifier of the form, needed to pay it.
        pub fn form_id(&self) -> i64 {
            match self {
                Self::Form(form) => form.form_id,
                Self::Stars(form) => form.form_id,
                Self::StarGift(form) => form.form_id,
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum PaymentResult {
        Result(types::payments::PaymentResult),
        VerificationNeeded(types::payments::PaymentVerificationNeeded),
    }
    from_types!(PaymentResult {
        Result(types::payments::PaymentResult),
        VerificationNeeded(types::payments::PaymentVerificationNeeded),
    });

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum StarGifts {
        NotModified,
        Gifts(types::payments::StarGifts),
    }
    from_types!(StarGifts { Gifts(types::payments::StarGifts) });

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum UserStarGifts {
        Gifts(types::payments::UserStarGifts),
    }
    from_types!(UserStarGifts { Gifts(types::payments::UserStarGifts) });

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "impl-serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
    pub enum CheckedGiftCode {
        Code(types::payments::CheckedGiftCode),
    }
    from_types!(CheckedGiftCode { Code(types::payments::CheckedGiftCode) });
}

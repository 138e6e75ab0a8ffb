// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use oxigram_tl_types as tl;

/// A user.
///
/// Users include your contacts, members of a group, bot accounts created by [@BotFather], or
/// anyone with a Telegram account.
///
/// [@BotFather]: https://t.me/BotFather
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub raw: tl::types::User,
}

impl User {
    pub(crate) fn from_raw(user: tl::enums::User) -> Self {
        Self {
            raw: match user {
                tl::enums::User::Empty(empty) => tl::types::User {
                    is_self: false,
                    contact: false,
                    mutual_contact: false,
                    deleted: false,
                    bot: false,
                    verified: false,
                    restricted: false,
                    scam: false,
                    fake: false,
                    premium: false,
                    id: empty.id,
                    access_hash: None,
                    first_name: None,
                    last_name: None,
                    username: None,
                    phone: None,
                    lang_code: None,
                },
                tl::enums::User::User(user) => user,
            },
        }
    }

    pub(crate) fn to_peer(&self) -> tl::enums::Peer {
        tl::types::PeerUser {
            user_id: self.raw.id,
        }
        .into()
    }

    pub(crate) fn to_input_peer(&self) -> tl::enums::InputPeer {
        if self.raw.is_self {
            return tl::enums::InputPeer::PeerSelf;
        }
        tl::types::InputPeerUser {
            user_id: self.raw.id,
            access_hash: self.raw.access_hash.unwrap_or(0),
        }
        .into()
    }

    pub(crate) fn to_input_user(&self) -> tl::enums::InputUser {
        if self.raw.is_self {
            return tl::enums::InputUser::UserSelf;
        }
        tl::types::InputUser {
            user_id: self.raw.id,
            access_hash: self.raw.access_hash.unwrap_or(0),
        }
        .into()
    }

    /// Return the unique identifier for this user.
    pub fn id(&self) -> i64 {
        self.raw.id
    }

    /// Return the first name of this user.
    ///
    /// The name will be empty if the account was deleted.
    pub fn first_name(&self) -> &str {
        self.raw.first_name.as_deref().unwrap_or("")
    }

    pub fn last_name(&self) -> Option<&str> {
        self.raw.last_name.as_deref()
    }

    /// Return the full name of this user, joining the first and last names.
    pub fn full_name(&self) -> String {
        match self.last_name() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name(), last),
            _ => self.first_name().to_string(),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.raw.phone.as_deref()
    }

    /// Does this user represent the account that's currently logged in?
    pub fn is_self(&self) -> bool {
        self.raw.is_self
    }

    pub fn is_bot(&self) -> bool {
        self.raw.bot
    }

    pub fn is_deleted(&self) -> bool {
        self.raw.deleted
    }

    pub fn is_premium(&self) -> bool {
        self.raw.premium
    }
}

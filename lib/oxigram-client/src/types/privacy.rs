// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Chat, ChatMap, ChatRef, User};
use log::warn;
use oxigram_tl_types as tl;

/// The setting a privacy rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrivacyKey {
    /// Whether people can see your bio.
    About,
    /// Whether people can add you to their contact list by your phone number.
    AddedByPhone,
    Birthday,
    /// Whether you can be invited to chats.
    ChatInvite,
    /// Whether messages forwarded from you will be anonymous.
    Forwards,
    PhoneCall,
    PhoneNumber,
    /// Whether to allow peer-to-peer connections during calls.
    PhoneP2P,
    ProfilePhoto,
    /// Whether people will be able to see your exact last online timestamp.
    Status,
    VoiceMessages,
}

impl From<PrivacyKey> for tl::enums::InputPrivacyKey {
    fn from(key: PrivacyKey) -> Self {
        use tl::enums::InputPrivacyKey as K;

        match key {
            PrivacyKey::About => K::About,
            PrivacyKey::AddedByPhone => K::AddedByPhone,
            PrivacyKey::Birthday => K::Birthday,
            PrivacyKey::ChatInvite => K::ChatInvite,
            PrivacyKey::Forwards => K::Forwards,
            PrivacyKey::PhoneCall => K::PhoneCall,
            PrivacyKey::PhoneNumber => K::PhoneNumber,
            PrivacyKey::PhoneP2P => K::PhoneP2P,
            PrivacyKey::ProfilePhoto => K::ProfilePhoto,
            PrivacyKey::Status => K::StatusTimestamp,
            PrivacyKey::VoiceMessages => K::VoiceMessages,
        }
    }
}

/// A privacy rule to apply with [`Client::set_privacy`](crate::Client::set_privacy).
#[derive(Clone, Debug, PartialEq)]
pub enum InputPrivacyRule {
    AllowAll,
    AllowContacts,
    AllowPremium,
    AllowUsers(Vec<ChatRef>),
    /// Allow the participants of the given groups.
    AllowChats(Vec<ChatRef>),
    DisallowAll,
    DisallowContacts,
    DisallowUsers(Vec<ChatRef>),
    DisallowChats(Vec<ChatRef>),
}

/// A privacy rule currently in effect.
///
/// Each flag is `Some(true)` for an allow rule, `Some(false)` for the matching disallow rule,
/// and `None` when the rule is about something else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrivacyRule {
    pub allow_all: Option<bool>,
    pub allow_chats: Option<bool>,
    pub allow_contacts: Option<bool>,
    pub allow_premium: Option<bool>,
    pub allow_users: Option<bool>,
    /// Users the rule applies to, for user rules.
    pub users: Option<Vec<User>>,
    /// Chats whose participants the rule applies to, for chat rules.
    pub chats: Option<Vec<Chat>>,
}

impl PrivacyRule {
    pub(crate) fn from_raw(rule: tl::enums::PrivacyRule, chats: &ChatMap) -> Self {
        use tl::enums::PrivacyRule as R;

        match rule {
            R::AllowAll => Self {
                allow_all: Some(true),
                ..Self::default()
            },
            R::DisallowAll => Self {
                allow_all: Some(false),
                ..Self::default()
            },
            R::AllowContacts => Self {
                allow_contacts: Some(true),
                ..Self::default()
            },
            R::DisallowContacts => Self {
                allow_contacts: Some(false),
                ..Self::default()
            },
            R::AllowPremium => Self {
                allow_premium: Some(true),
                ..Self::default()
            },
            R::AllowUsers(rule) => Self {
                allow_users: Some(true),
                users: collect_users(&rule.users, chats),
                ..Self::default()
            },
            R::DisallowUsers(rule) => Self {
                allow_users: Some(false),
                users: collect_users(&rule.users, chats),
                ..Self::default()
            },
            R::AllowChatParticipants(rule) => Self {
                allow_chats: Some(true),
                chats: collect_chats(&rule.chats, chats),
                ..Self::default()
            },
            R::DisallowChatParticipants(rule) => Self {
                allow_chats: Some(false),
                chats: collect_chats(&rule.chats, chats),
                ..Self::default()
            },
            R::AllowCloseFriends => Self::default(),
        }
    }
}

fn collect_users(ids: &[i64], chats: &ChatMap) -> Option<Vec<User>> {
    let users = ids
        .iter()
        .filter_map(|&id| {
            let user = chats.get_user(id).cloned();
            if user.is_none() {
                warn!("privacy rule refers to unknown user {id}");
            }
            user
        })
        .collect::<Vec<_>>();

    (!users.is_empty()).then_some(users)
}

fn collect_chats(ids: &[i64], chats: &ChatMap) -> Option<Vec<Chat>> {
    let found = ids
        .iter()
        .filter_map(|&id| {
            let chat = chats.get_bare_chat(id).cloned();
            if chat.is_none() {
                warn!("privacy rule refers to unknown chat {id}");
            }
            chat
        })
        .collect::<Vec<_>>();

    (!found.is_empty()).then_some(found)
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to the account's privacy and lifetime settings.
use super::{Client, RequestError};
use crate::types::{ChatMap, ChatRef, InputPrivacyRule, PrivacyKey, PrivacyRule};
use crate::utils;
use futures_util::future::try_join_all;
use oxigram_mtsender::InvocationError;
use oxigram_tl_types as tl;

fn privacy_rules(rules: tl::enums::account::PrivacyRules) -> Vec<PrivacyRule> {
    let tl::enums::account::PrivacyRules::Rules(rules) = rules;
    let chats = ChatMap::new(rules.users, rules.chats);
    rules
        .rules
        .into_iter()
        .map(|rule| PrivacyRule::from_raw(rule, &chats))
        .collect()
}

impl Client {
    /// Get the privacy rules currently applied to the given setting.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: oxigram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use oxigram_client::types::PrivacyKey;
    ///
    /// for rule in client.get_privacy(PrivacyKey::PhoneNumber).await? {
    ///     println!("{:?}", rule);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_privacy(&self, key: PrivacyKey) -> Result<Vec<PrivacyRule>, InvocationError> {
        let rules = self
            .invoke(&tl::functions::account::GetPrivacy { key: key.into() })
            .await?;
        Ok(privacy_rules(rules))
    }

    /// Replace the privacy rules of the given setting, returning the rules now in effect.
    ///
    /// Every chat named by the rules is resolved before sending anything.
    pub async fn set_privacy(
        &self,
        key: PrivacyKey,
        rules: Vec<InputPrivacyRule>,
    ) -> Result<Vec<PrivacyRule>, RequestError> {
        let rules = try_join_all(rules.into_iter().map(|rule| self.input_privacy_rule(rule))).await?;

        let rules = self
            .invoke(&tl::functions::account::SetPrivacy {
                key: key.into(),
                rules,
            })
            .await?;
        Ok(privacy_rules(rules))
    }

    async fn input_privacy_rule(
        &self,
        rule: InputPrivacyRule,
    ) -> Result<tl::enums::InputPrivacyRule, RequestError> {
        use tl::enums::InputPrivacyRule as R;

        Ok(match rule {
            InputPrivacyRule::AllowAll => R::AllowAll,
            InputPrivacyRule::AllowContacts => R::AllowContacts,
            InputPrivacyRule::AllowPremium => R::AllowPremium,
            InputPrivacyRule::DisallowAll => R::DisallowAll,
            InputPrivacyRule::DisallowContacts => R::DisallowContacts,
            InputPrivacyRule::AllowUsers(users) => tl::types::InputPrivacyValueAllowUsers {
                users: self.resolve_users(users).await?,
            }
            .into(),
            InputPrivacyRule::DisallowUsers(users) => tl::types::InputPrivacyValueDisallowUsers {
                users: self.resolve_users(users).await?,
            }
            .into(),
            InputPrivacyRule::AllowChats(chats) => {
                tl::types::InputPrivacyValueAllowChatParticipants {
                    chats: self.resolve_bare_chats(chats).await?,
                }
                .into()
            }
            InputPrivacyRule::DisallowChats(chats) => {
                tl::types::InputPrivacyValueDisallowChatParticipants {
                    chats: self.resolve_bare_chats(chats).await?,
                }
                .into()
            }
        })
    }

    async fn resolve_users(
        &self,
        users: Vec<ChatRef>,
    ) -> Result<Vec<tl::enums::InputUser>, RequestError> {
        try_join_all(users.into_iter().map(|user| async move {
            let peer = self.resolve_peer(user.clone()).await?;
            utils::input_user_from_peer(&peer).ok_or_else(|| {
                RequestError::InvalidArgument(format!("{user} does not belong to a user"))
            })
        }))
        .await
    }

    async fn resolve_bare_chats(&self, chats: Vec<ChatRef>) -> Result<Vec<i64>, RequestError> {
        try_join_all(chats.into_iter().map(|chat| async move {
            let peer = self.resolve_peer(chat.clone()).await?;
            utils::bare_chat_id(&peer).ok_or_else(|| {
                RequestError::InvalidArgument(format!("{chat} does not belong to a group"))
            })
        }))
        .await
    }

    /// Get the number of days of inactivity after which the account is deleted.
    pub async fn get_account_ttl(&self) -> Result<i32, InvocationError> {
        let tl::enums::AccountDaysTtl::Ttl(ttl) = self
            .invoke(&tl::functions::account::GetAccountTtl {})
            .await?;
        Ok(ttl.days)
    }

    /// Set the number of days of inactivity after which the account is deleted.
    ///
    /// The server accepts values from 30 to 730 days.
    pub async fn set_account_ttl(&self, days: i32) -> Result<bool, InvocationError> {
        self.invoke(&tl::functions::account::SetAccountTtl {
            ttl: tl::types::AccountDaysTtl { days }.into(),
        })
        .await
    }
}

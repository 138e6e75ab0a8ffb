// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// A loosely-typed reference to a user, group or channel, as a person would
/// write it.
///
/// Methods taking an `impl Into<ChatRef>` accept integers and strings alike:
///
/// * Integers are identifiers in the "marked" format (positive for users,
///   negative for groups, `-100…` for channels).
/// * `"me"` and `"self"` refer to the logged-in account.
/// * Strings holding an integer are marked identifiers too.
/// * Digits prefixed by `+` are phone numbers.
/// * Anything else is a username, with or without the leading `@`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatRef {
    Id(i64),
    Username(String),
    PhoneNumber(String),
    Me,
}

impl From<i64> for ChatRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatRef {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("me") || s.eq_ignore_ascii_case("self") {
            return Self::Me;
        }

        if let Ok(id) = s.parse::<i64>() {
            if !s.starts_with('+') {
                return Self::Id(id);
            }
        }

        if let Some(phone) = s.strip_prefix('+') {
            if !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit()) {
                return Self::PhoneNumber(phone.to_string());
            }
        }

        Self::Username(s.strip_prefix('@').unwrap_or(s).to_ascii_lowercase())
    }
}

impl From<String> for ChatRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&ChatRef> for ChatRef {
    fn from(chat: &ChatRef) -> Self {
        chat.clone()
    }
}

impl fmt::Display for ChatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => write!(f, "@{username}"),
            Self::PhoneNumber(phone) => write!(f, "+{phone}"),
            Self::Me => write!(f, "me"),
        }
    }
}

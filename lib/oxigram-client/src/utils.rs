// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use chrono::{DateTime, Utc};
use oxigram_tl_types as tl;
use regex::Regex;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::SystemTime;

// This atomic isn't for anything critical, just to generate unique IDs without locks.
// The worst that can happen if the load and store orderings are wrong is that the IDs
// are not actually unique which could confuse some of the API results.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Offset applied to channel identifiers when marking them.
const CHANNEL_MARK: i64 = 1_000_000_000_000;

static INVOICE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:t(?:elegram)?\.(?:org|me|dog)/\$)([\w-]+)$")
        .expect("invoice link pattern is valid")
});

static GIFT_CODE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:t(?:elegram)?\.(?:org|me|dog)/(?:giftcode/|\+))([\w-]+)$")
        .expect("gift code link pattern is valid")
});

pub(crate) type Date = DateTime<Utc>;

/// Generate a "random" ID suitable for sending messages or media.
pub(crate) fn generate_random_id() -> i64 {
    if LAST_ID.load(Ordering::SeqCst) == 0 {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or(1);

        let _ = LAST_ID.compare_exchange(0, now, Ordering::SeqCst, Ordering::SeqCst);
    }

    LAST_ID.fetch_add(1, Ordering::SeqCst)
}

pub(crate) fn date(date: i32) -> Date {
    DateTime::<Utc>::from_timestamp(date as i64, 0).unwrap_or_default()
}

/// Like [`date`], but the zero timestamp means "no date".
pub(crate) fn optional_date(date: i32) -> Option<Date> {
    (date != 0).then(|| self::date(date))
}

/// Identifier of the peer in the "marked" format, where the sign and
/// magnitude tell apart users, small group chats and channels.
pub(crate) fn peer_id(peer: &tl::enums::Peer) -> i64 {
    match peer {
        tl::enums::Peer::User(user) => user.user_id,
        tl::enums::Peer::Chat(chat) => -chat.chat_id,
        tl::enums::Peer::Channel(channel) => -CHANNEL_MARK - channel.channel_id,
    }
}

/// Reverse of [`peer_id`].
pub(crate) fn unmark_peer_id(id: i64) -> tl::enums::Peer {
    if id >= 0 {
        tl::types::PeerUser { user_id: id }.into()
    } else if id > -CHANNEL_MARK {
        tl::types::PeerChat { chat_id: -id }.into()
    } else {
        tl::types::PeerChannel {
            channel_id: -id - CHANNEL_MARK,
        }
        .into()
    }
}

/// The input peer for a peer whose access hash is unknown, left as zero.
pub(crate) fn ambient_input_peer(peer: &tl::enums::Peer) -> tl::enums::InputPeer {
    match peer {
        tl::enums::Peer::User(user) => tl::types::InputPeerUser {
            user_id: user.user_id,
            access_hash: 0,
        }
        .into(),
        tl::enums::Peer::Chat(chat) => tl::types::InputPeerChat {
            chat_id: chat.chat_id,
        }
        .into(),
        tl::enums::Peer::Channel(channel) => tl::types::InputPeerChannel {
            channel_id: channel.channel_id,
            access_hash: 0,
        }
        .into(),
    }
}

pub(crate) fn input_user_from_peer(peer: &tl::enums::InputPeer) -> Option<tl::enums::InputUser> {
    match peer {
        tl::enums::InputPeer::PeerSelf => Some(tl::enums::InputUser::UserSelf),
        tl::enums::InputPeer::User(user) => Some(
            tl::types::InputUser {
                user_id: user.user_id,
                access_hash: user.access_hash,
            }
            .into(),
        ),
        _ => None,
    }
}

pub(crate) fn input_channel_from_peer(
    peer: &tl::enums::InputPeer,
) -> Option<tl::enums::InputChannel> {
    match peer {
        tl::enums::InputPeer::Channel(channel) => Some(
            tl::types::InputChannel {
                channel_id: channel.channel_id,
                access_hash: channel.access_hash,
            }
            .into(),
        ),
        _ => None,
    }
}

/// The unmarked identifier of a group or channel peer.
pub(crate) fn bare_chat_id(peer: &tl::enums::InputPeer) -> Option<i64> {
    match peer {
        tl::enums::InputPeer::Chat(chat) => Some(chat.chat_id),
        tl::enums::InputPeer::Channel(channel) => Some(channel.channel_id),
        _ => None,
    }
}

/// Split optional formatted text into its parts, treating empty text as absent.
pub(crate) fn text_with_entities(
    text: Option<tl::enums::TextWithEntities>,
) -> (Option<String>, Option<Vec<tl::enums::MessageEntity>>) {
    match text {
        Some(tl::enums::TextWithEntities::Text(text)) if !text.text.is_empty() => (
            Some(text.text),
            (!text.entities.is_empty()).then_some(text.entities),
        ),
        _ => (None, None),
    }
}

/// Extract the invoice slug from a `t.me/$slug` link. Anything else is
/// taken to be the slug itself.
pub(crate) fn invoice_slug(link: &str) -> String {
    INVOICE_LINK
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map_or(link, |slug| slug.as_str())
        .to_string()
}

/// Extract the gift code slug from a `t.me/giftcode/slug` link. Anything
/// else is taken to be the slug itself.
pub(crate) fn gift_code_slug(link: &str) -> String {
    GIFT_CODE_LINK
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map_or(link, |slug| slug.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_random_ids_are_unique() {
        let a = generate_random_id();
        let b = generate_random_id();
        assert_ne!(a, b);
    }

    #[test]
    fn check_marked_peer_ids() {
        let user: tl::enums::Peer = tl::types::PeerUser { user_id: 777 }.into();
        let chat: tl::enums::Peer = tl::types::PeerChat { chat_id: 123 }.into();
        let channel: tl::enums::Peer = tl::types::PeerChannel { channel_id: 456 }.into();

        assert_eq!(peer_id(&user), 777);
        assert_eq!(peer_id(&chat), -123);
        assert_eq!(peer_id(&channel), -1000000000456);

        assert_eq!(unmark_peer_id(777), user);
        assert_eq!(unmark_peer_id(-123), chat);
        assert_eq!(unmark_peer_id(-1000000000456), channel);
    }

    #[test]
    fn check_zero_date_is_missing() {
        assert_eq!(optional_date(0), None);
        assert_eq!(optional_date(60).map(|d| d.timestamp()), Some(60));
    }

    #[test]
    fn check_invoice_slug_extraction() {
        assert_eq!(invoice_slug("https://t.me/$abc-DEF_1"), "abc-DEF_1");
        assert_eq!(invoice_slug("t.me/$slug"), "slug");
        assert_eq!(invoice_slug("www.telegram.me/$slug"), "slug");
        assert_eq!(invoice_slug("telegram.dog/$slug"), "slug");
        assert_eq!(invoice_slug("plain-slug"), "plain-slug");
        assert_eq!(invoice_slug("https://t.me/slug"), "https://t.me/slug");
    }

    #[test]
    fn check_gift_code_slug_extraction() {
        assert_eq!(gift_code_slug("https://t.me/giftcode/AbCd"), "AbCd");
        assert_eq!(gift_code_slug("t.me/+AbCd"), "AbCd");
        assert_eq!(gift_code_slug("AbCd"), "AbCd");
    }
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![allow(dead_code)]

use async_trait::async_trait;
use oxigram_client::sender::{InvocationError, RpcError, Sender};
use oxigram_client::tl;
use oxigram_client::{Client, Config};
use simple_logger::SimpleLogger;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const USER_ID: i64 = 777;
pub const CHANNEL_ID: i64 = 42;
pub const MARKED_CHANNEL_ID: i64 = -1000000000042;

/// Sender that records every request and answers with scripted responses, in order.
///
/// Running out of responses fails the request as if it had been dropped.
#[derive(Default)]
pub struct ScriptedSender {
    requests: Mutex<Vec<tl::Request>>,
    responses: Mutex<VecDeque<Result<tl::Response, InvocationError>>>,
}

impl ScriptedSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond<T: Into<tl::Response>>(&self, response: T) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response.into()));
    }

    pub fn fail(&self, code: i32, name: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(RpcError::new(code, name).into()));
    }

    pub fn requests(&self) -> Vec<tl::Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sender for ScriptedSender {
    async fn invoke(&self, request: tl::Request) -> Result<tl::Response, InvocationError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(InvocationError::Dropped))
    }
}

pub fn init_logging() {
    let _ = SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();
}

pub fn client(sender: &Arc<ScriptedSender>) -> Client {
    init_logging();
    Client::new(Config::new(Arc::clone(sender)))
}

pub fn user(id: i64, first_name: &str) -> tl::enums::User {
    tl::types::User {
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
        id,
        access_hash: Some(id * 10),
        first_name: Some(first_name.to_string()),
        last_name: None,
        username: None,
        phone: None,
        lang_code: None,
    }
    .into()
}

pub fn channel(id: i64, title: &str) -> tl::enums::Chat {
    tl::types::Channel {
        creator: false,
        left: false,
        broadcast: true,
        verified: false,
        megagroup: false,
        restricted: false,
        scam: false,
        fake: false,
        gigagroup: false,
        noforwards: false,
        forum: false,
        id,
        access_hash: Some(id * 10),
        title: title.to_string(),
        username: None,
        date: 0,
        participants_count: None,
    }
    .into()
}

pub fn message(id: i32, peer: tl::enums::Peer, text: &str) -> tl::types::Message {
    tl::types::Message {
        out: true,
        mentioned: false,
        silent: false,
        post: false,
        from_scheduled: false,
        pinned: false,
        noforwards: false,
        invert_media: false,
        id,
        from_id: None,
        peer_id: peer,
        reply_to: None,
        date: 1_700_000_000 + id,
        message: text.to_string(),
        media: None,
        entities: None,
        views: None,
        forwards: None,
        edit_date: None,
        post_author: None,
        grouped_id: None,
        ttl_period: None,
        via_business_bot_id: None,
    }
}

pub fn channel_peer() -> tl::enums::Peer {
    tl::types::PeerChannel {
        channel_id: CHANNEL_ID,
    }
    .into()
}

pub fn user_peer() -> tl::enums::Peer {
    tl::types::PeerUser { user_id: USER_ID }.into()
}

pub fn input_channel_peer() -> tl::enums::InputPeer {
    tl::types::InputPeerChannel {
        channel_id: CHANNEL_ID,
        access_hash: 0,
    }
    .into()
}

pub fn input_user() -> tl::enums::InputUser {
    tl::types::InputUser {
        user_id: USER_ID,
        access_hash: 0,
    }
    .into()
}

// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::Client;
use oxigram_mtsender::InvocationError;
use std::collections::VecDeque;

/// Common state shared by every paginated request.
///
/// Iterators fill the buffer with one request at a time and yield items from it, stopping
/// once the server reports the last chunk or the user-provided limit is reached.
pub struct IterBuffer<R, T> {
    pub(crate) client: Client,
    pub(crate) limit: Option<usize>,
    pub(crate) fetched: usize,
    pub(crate) buffer: VecDeque<T>,
    pub(crate) last_chunk: bool,
    pub(crate) total: Option<usize>,
    pub(crate) request: R,
}

impl<R, T> IterBuffer<R, T> {
    pub(crate) fn from_request(client: &Client, capacity: usize, request: R) -> Self {
        Self {
            client: client.clone(),
            limit: None,
            fetched: 0,
            buffer: VecDeque::with_capacity(capacity),
            last_chunk: false,
            total: None,
            request,
        }
    }

    /// Change how many items will be returned.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Checks whether the limit has been reached and no more items should be fetched.
    fn limit_reached(&self) -> bool {
        if let Some(limit) = self.limit {
            self.fetched >= limit
        } else {
            false
        }
    }

    /// Return the next result item if it's already buffered, or `None` if a request is
    /// needed to fill the buffer first.
    pub(crate) fn next_raw(&mut self) -> Option<Result<Option<T>, InvocationError>> {
        if self.limit_reached() {
            return Some(Ok(None));
        }

        if !self.buffer.is_empty() || self.last_chunk {
            return Some(Ok(self.pop_item()));
        }

        None
    }

    /// Determine how many items should be requested next, given the maximum the server
    /// allows per request.
    pub(crate) fn determine_limit(&self, max: usize) -> i32 {
        if let Some(limit) = self.limit {
            if self.fetched < limit {
                (limit - self.fetched).min(max) as i32
            } else {
                1 // 0 would fetch the default, which wastes bandwidth
            }
        } else {
            max as i32
        }
    }

    /// Pop one item from the buffer, counting it as fetched.
    pub(crate) fn pop_item(&mut self) -> Option<T> {
        let item = self.buffer.pop_front();
        if item.is_some() {
            self.fetched += 1;
        }
        item
    }
}

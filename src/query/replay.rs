//! In-memory query client.
//!
//! Answers queries from a queue of canned responses and records every query
//! it receives. This is the reference implementation of `QueryClient`.
//!
//! ## Limitations
//!
//! - **No evaluation**: the query text is never interpreted. Responses are
//!   handed out strictly in the order they were queued.
//! - **Exhausted queue**: once every queued response is consumed, further
//!   queries get zero frames (an empty result), not an error.
//!
//! Use this client for:
//! - Testing element navigation without a Gremlin server
//! - Replaying captured server responses against new decoding code

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Frames, QueryClient};
use crate::{Error, Result};

/// Canned-response `QueryClient` with a query log.
#[derive(Debug, Default)]
pub struct ReplayClient {
    responses: Mutex<VecDeque<Result<Frames>>>,
    log: Mutex<Vec<String>>,
}

impl ReplayClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the frames returned by the next unanswered query.
    pub fn push_frames(&self, frames: Frames) {
        self.responses.lock().push_back(Ok(frames));
    }

    /// Queue a single-frame response.
    pub fn push_frame(&self, frame: impl Into<Vec<u8>>) {
        self.push_frames(vec![frame.into()]);
    }

    /// Queue a failure for the next unanswered query.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.responses.lock().push_back(Err(Error::Query(message.into())));
    }

    /// Every query received so far, rendered, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.log.lock().clone()
    }

    /// Responses still waiting to be handed out.
    pub fn pending(&self) -> usize {
        self.responses.lock().len()
    }
}

#[async_trait]
impl QueryClient for ReplayClient {
    async fn execute_string_query(&self, query: &str) -> Result<Frames> {
        self.log.lock().push(query.to_owned());
        self.responses.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

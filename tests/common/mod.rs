//! Shared test utilities for the content screen integration tests.
//!
//! Provides a scripted [`FakeTransport`] that stands in for the HTTP layer,
//! a [`RecordingOpener`] that captures document opens, and session helpers.

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use grcview::api::{ContentClient, ContentError, RawResponse, Transport};
use grcview::navigation::DocumentOpener;
use grcview::session::{Session, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://grc.example.com";

/// Transport that answers every request with the current canned response
pub struct FakeTransport {
    response: Mutex<RawResponse>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new(status: u16, status_text: &str, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(RawResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::new(200, "OK", body)
    }

    /// Change the answer for later requests
    pub fn respond_with(&self, status: u16, status_text: &str, body: &str) {
        *self.response.lock().unwrap() = RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        };
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.response.lock().unwrap().clone())
    }
}

/// Client pointed at [`BASE_URL`] through `transport`
pub fn client(transport: &Arc<FakeTransport>) -> ContentClient {
    ContentClient::new(BASE_URL, transport.clone())
}

/// Opener that records every URL and optionally fails
#[derive(Default)]
pub struct RecordingOpener {
    fail: bool,
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl DocumentOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            bail!("no handler for {}", url);
        }
        Ok(())
    }
}

pub fn signed_in() -> Session {
    Session::new(Some(User::new("42", "Germany")))
}

pub fn signed_out() -> Session {
    Session::anonymous()
}

pub const ONE_ITEM: &str = r#"[{"title":"A","subtitle":"B","url":"/x"}]"#;

pub const MIXED_ITEMS: &str = r#"[
    {"title":"Annual report","subtitle":"Internal","url":"/reports/x"},
    {"title":"Code of conduct","subtitle":"PDF","url":"https://cdn.example.com/conduct.PDF"},
    {"title":"Portal","subtitle":"External","url":"https://example.com/portal"}
]"#;

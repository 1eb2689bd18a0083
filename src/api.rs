//! GRC content API client.
//!
//! The HTTP exchange sits behind the [`Transport`] trait so the response
//! validation in [`ContentClient`] can be exercised without a server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// One content entry as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrcItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub url: String,
}

/// Everything that can go wrong while fetching content.
///
/// All variants are rendered the same way; the split exists for logging
/// and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Non-2xx HTTP status
    #[error("API error: {status} {status_text}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },
    /// Body parsed but had the wrong shape
    #[error("Invalid response format: {0}")]
    Format(String),
    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),
    /// Body was not valid JSON, or items could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Status line and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET and hands back the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError>;
}

/// [`Transport`] backed by reqwest
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("grcview/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError> {
        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        // Error bodies are best-effort; a success body must be readable
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ContentError::Network(e.to_string())),
            Err(e) => {
                debug!("Could not read error body: {}", e);
                String::new()
            }
        };

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Validated inputs for one content fetch.
///
/// Construction is the precondition check: without a user id and a title
/// there is nothing to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub user_id: String,
    pub title: String,
}

impl FetchRequest {
    /// Returns `None` when either input is missing or blank
    pub fn new(user_id: Option<&str>, title: Option<&str>) -> Option<Self> {
        let user_id = user_id.map(str::trim).filter(|s| !s.is_empty())?;
        let title = title.filter(|s| !s.trim().is_empty())?;
        Some(Self {
            user_id: user_id.to_string(),
            title: title.to_string(),
        })
    }

    /// `<base>/api/grc_content/<user id>/<lower-cased title>`
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/api/grc_content/{}/{}",
            base_url.trim_end_matches('/'),
            self.user_id,
            self.title.to_lowercase()
        )
    }
}

/// Decode a success body into items
pub fn parse_items(body: &str) -> Result<Vec<GrcItem>, ContentError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ContentError::Parse(e.to_string()))?;

    if !value.is_array() {
        return Err(ContentError::Format("expected an array".to_string()));
    }

    serde_json::from_value(value).map_err(|e| ContentError::Parse(e.to_string()))
}

/// Fetches GRC content for a user
#[derive(Clone)]
pub struct ContentClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Build a client that talks HTTP with the configured timeout
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::new(config.api_base_url.clone(), Arc::new(transport)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_items(&self, request: &FetchRequest) -> Result<Vec<GrcItem>, ContentError> {
        let url = request.url(&self.base_url);
        info!("Fetching GRC content: GET {}", url);

        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            error!(
                "GRC content request failed: {} {} ({})",
                response.status, response.status_text, response.body
            );
            return Err(ContentError::Api {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        let items = parse_items(&response.body)?;
        info!("Fetched {} GRC items for '{}'", items.len(), request.title);
        Ok(items)
    }
}

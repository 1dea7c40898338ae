//! The backend collaborator: something that takes a user message and answers it.
//!
//! [`ChatBackend`] is the only seam between the session and the outside world.
//! [`HttpBackend`] is the production implementation that posts
//! `{"message": ...}` to a JSON endpoint and reads back `{"response": ...}`.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{extract_reply_text, ChatRequest};

/// The single failure kind of an exchange.
///
/// Transport errors, non-success statuses and unparseable bodies all map here.
/// `detail` exists for logs; callers must not branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeFailed {
    detail: String,
}

impl ExchangeFailed {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ExchangeFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exchange with backend failed: {}", self.detail)
    }
}

impl StdError for ExchangeFailed {}

/// Submit one user message, get the reply text back.
///
/// An empty `Ok` string means the backend answered without usable text.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn submit(&self, message: &str) -> Result<String, ExchangeFailed>;
}

/// Posts messages to a JSON chat endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Build a backend for `endpoint`. Without `timeout` a request waits forever.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn submit(&self, message: &str) -> Result<String, ExchangeFailed> {
        debug!(endpoint = %self.endpoint, chars = message.chars().count(), "posting chat message");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|err| ExchangeFailed::new(format!("request error: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeFailed::new(format!("unexpected status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ExchangeFailed::new(format!("failed to read body: {err}")))?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|err| ExchangeFailed::new(format!("malformed body: {err}")))?;

        Ok(extract_reply_text(&value))
    }
}

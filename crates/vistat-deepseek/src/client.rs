// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the DeepSeek chat-completions API.
//!
//! Single-shot: the pipeline forbids internal retries, so a transient
//! failure here surfaces as an error and the caller falls back to the
//! rule-based strategy for this request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;
use vistat_core::VistatError;

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

/// Base URL for the DeepSeek chat-completions API.
const API_BASE_URL: &str = "https://api.deepseek.com/chat/completions";

/// HTTP client for DeepSeek API communication.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: reqwest::Client,
    base_url: String,
}

impl DeepSeekClient {
    /// Creates a new client with Bearer authentication.
    ///
    /// `timeout` bounds the whole HTTP exchange; the translator adapter
    /// additionally enforces the same deadline around the call.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, VistatError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| VistatError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| VistatError::Translator {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends one completion request. No retries.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, VistatError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| VistatError::Translator {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        let body = response.text().await.map_err(|e| VistatError::Translator {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "DeepSeek API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("API returned {status}"),
            };
            return Err(VistatError::Translator {
                message,
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| VistatError::Translator {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

//! Reqwest-backed implementation of the core transport trait.
//!
//! Direct HTTP client for the chatbot REST API. Classifies failures into
//! the error taxonomy the retry loop understands: connection-level problems
//! and non-2xx statuses are network-class (retryable); a body that is not
//! valid JSON is not.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use concierge_core::api::ChatTransport;
use concierge_types::error::ChatbotError;

/// HTTP transport for the chatbot API.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the full URL for an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ChatTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ChatbotError> {
        let url = self.url(path);
        debug!(%url, "POST");

        // reqwest's .json() sets the JSON content-type; callers cannot
        // override it.
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatbotError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!(%url, status = status.as_u16(), body = %text, "chatbot API error");
            return Err(ChatbotError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        resp.json()
            .await
            .map_err(|e| ChatbotError::Unexpected(format!("invalid JSON response: {e}")))
    }
}

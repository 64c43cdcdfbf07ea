//! Typed request wrapper with bounded retry and fixed backoff.
//!
//! `ApiClient` turns the raw transport into typed operations against the
//! chatbot API. Network-class failures are retried sequentially with a fixed
//! delay between attempts; any other error class propagates immediately.
//! The retry is an explicit bounded loop with an attempt counter, not
//! recursion.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use concierge_types::api::{
    BotReply, ClickEvent, SendMessageRequest, SessionStart, StartSessionRequest,
    CLICK_PATH, SEND_MESSAGE_PATH, START_SESSION_PATH,
};
use concierge_types::config::ChatConfig;
use concierge_types::error::ChatbotError;

use super::transport::ChatTransport;

/// Retry bounds for network-class failures.
///
/// `max_attempts` counts total attempts, not re-issues: with the default of
/// 3, a request that keeps failing is issued exactly 3 times with
/// `retry_delay` between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Build the policy from the client configuration.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            max_attempts: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Typed chatbot API client over an injected transport.
pub struct ApiClient<T> {
    pub(crate) transport: T,
    policy: RetryPolicy,
}

impl<T: ChatTransport> ApiClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Issue a request, retrying network-class failures up to the policy
    /// bound.
    ///
    /// Each retry is a full re-issue of the identical request. Retries are
    /// sequential; exhausting the bound surfaces the last error unchanged.
    pub async fn request(&self, path: &str, body: &Value) -> Result<Value, ChatbotError> {
        let mut attempt: u32 = 1;
        loop {
            match self.transport.post_json(path, body).await {
                Ok(value) => {
                    debug!(%path, attempt, "request succeeded");
                    return Ok(value);
                }
                Err(err) if err.is_retryable() && attempt < self.policy.max_attempts => {
                    warn!(
                        %path,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        error = %err,
                        "request failed, retrying after delay"
                    );
                    tokio::time::sleep(self.policy.retry_delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// `POST /chatbot/start_session/` -- establish a session.
    pub async fn start_session(&self, email: &str) -> Result<SessionStart, ChatbotError> {
        let body = encode(&StartSessionRequest {
            email: email.to_string(),
        })?;
        let value = self.request(START_SESSION_PATH, &body).await?;
        serde_json::from_value(value)
            .map_err(|e| ChatbotError::Unexpected(format!("malformed start_session response: {e}")))
    }

    /// `POST /chatbot/send_message/` -- exchange one message.
    pub async fn send_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<BotReply, ChatbotError> {
        let body = encode(&SendMessageRequest {
            session_id: session_id.to_string(),
            message: text.to_string(),
        })?;
        let value = self.request(SEND_MESSAGE_PATH, &body).await?;
        serde_json::from_value(value)
            .map_err(|e| ChatbotError::Unexpected(format!("malformed send_message response: {e}")))
    }

    /// `POST /analytics/click/` -- single attempt, response body ignored.
    ///
    /// The beacon never retries; callers treat it as fire-and-forget.
    pub async fn track_click(&self, event: &ClickEvent) -> Result<(), ChatbotError> {
        let body = encode(event)?;
        self.transport.post_json(CLICK_PATH, &body).await.map(|_| ())
    }
}

fn encode<B: serde::Serialize>(body: &B) -> Result<Value, ChatbotError> {
    serde_json::to_value(body).map_err(|e| ChatbotError::Unexpected(format!("encode failed: {e}")))
}

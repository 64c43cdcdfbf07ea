//! ChatTransport trait definition.
//!
//! The injected HTTP boundary between the typed client and the wire.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the reqwest
//! implementation lives in `concierge-infra`.

use concierge_types::error::ChatbotError;

/// Trait for HTTP transports carrying chatbot API requests.
///
/// Implementations own connection handling and the fixed JSON content-type;
/// callers never set headers. Errors must be classified into the
/// [`ChatbotError`] taxonomy so the retry loop can distinguish network-class
/// failures from everything else.
pub trait ChatTransport: Send + Sync {
    /// POST a JSON body to `path` (relative to the API base URL) and return
    /// the parsed JSON response body.
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, ChatbotError>> + Send;
}

impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, ChatbotError>> + Send {
        (**self).post_json(path, body)
    }
}

//! Client configuration.
//!
//! Deserialized from `config.toml` in the data directory; every field has a
//! default so a partial (or absent) file still yields a working config.

use serde::{Deserialize, Serialize};

/// Configuration surface of the chat client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the chatbot API, without trailing slash.
    pub api_base_url: String,
    /// Total request attempts for network-class failures.
    pub max_retries: u32,
    /// Fixed delay between retry attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Maximum user message length, in characters.
    pub max_message_len: usize,
    /// Window for collapsing rapid repeated send triggers, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".to_string(),
            max_retries: 3,
            retry_delay_ms: 1000,
            max_message_len: 500,
            debounce_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_ms, 1000);
        assert_eq!(config.max_message_len, 500);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ChatConfig = toml::from_str("max_retries = 5").unwrap();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay_ms, 1000);
        assert_eq!(config.max_message_len, 500);
    }

    #[test]
    fn test_full_toml() {
        let config: ChatConfig = toml::from_str(
            r#"
api_base_url = "https://hotels.example.com/api"
max_retries = 2
retry_delay_ms = 250
max_message_len = 280
debounce_ms = 150
"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://hotels.example.com/api");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.debounce_ms, 150);
    }
}

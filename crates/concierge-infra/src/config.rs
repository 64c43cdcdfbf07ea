//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.concierge/` in
//! production), then sanity checks the values. A missing or broken file
//! never stops the client: whatever cannot be read, parsed, or trusted
//! falls back to a default.

use std::path::Path;

use concierge_types::config::ChatConfig;

const CONFIG_FILE: &str = "config.toml";

/// Load client configuration from `{data_dir}/config.toml`.
///
/// An absent file is normal and silent; an unreadable or unparsable file
/// is logged and replaced wholesale by the defaults. Parsed values then
/// pass through [`validate`], which replaces per field anything the client
/// cannot operate with.
pub async fn load_config(data_dir: &Path) -> ChatConfig {
    let path = data_dir.join(CONFIG_FILE);
    let parsed = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => match toml::from_str::<ChatConfig>(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "config file is not valid TOML, using defaults");
                None
            }
        },
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), %err, "config file unreadable, using defaults");
            }
            None
        }
    };
    validate(parsed.unwrap_or_default())
}

/// Replace values the client cannot operate with: an empty base URL has
/// nothing to connect to, and zero retries or a zero message limit would
/// silently disable sending. Each replacement is logged; startup never
/// fails on a bad config value.
fn validate(mut config: ChatConfig) -> ChatConfig {
    let defaults = ChatConfig::default();
    if config.api_base_url.trim().is_empty() {
        tracing::warn!(fallback = %defaults.api_base_url, "api_base_url is empty");
        config.api_base_url = defaults.api_base_url;
    }
    if config.max_retries == 0 {
        tracing::warn!(fallback = defaults.max_retries, "max_retries of 0 would never issue a request");
        config.max_retries = defaults.max_retries;
    }
    if config.max_message_len == 0 {
        tracing::warn!(fallback = defaults.max_message_len, "max_message_len of 0 rejects every message");
        config.max_message_len = defaults.max_message_len;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
api_base_url = "https://hotels.example.com/api"
max_retries = 2
retry_delay_ms = 500
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.api_base_url, "https://hotels.example.com/api");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.retry_delay_ms, 500);
        // Unspecified fields keep their defaults.
        assert_eq!(config.max_message_len, 500);
        assert_eq!(config.debounce_ms, 300);
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[tokio::test]
    async fn unusable_values_fall_back_per_field() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
api_base_url = ""
max_retries = 0
retry_delay_ms = 250
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.api_base_url, ChatConfig::default().api_base_url);
        assert_eq!(config.max_retries, 3);
        // Values that hold up survive validation untouched.
        assert_eq!(config.retry_delay_ms, 250);
    }

    #[test]
    fn zero_message_limit_falls_back() {
        let config = validate(ChatConfig {
            max_message_len: 0,
            ..ChatConfig::default()
        });
        assert_eq!(config.max_message_len, 500);
    }
}

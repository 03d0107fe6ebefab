//! Client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api/events` path
    /// (e.g. `http://localhost:8080`).
    pub base_url: String,

    /// Timeout in seconds applied to every HTTP request.
    pub http_timeout_secs: u64,

    /// Page size used by list views when the caller does not choose one.
    pub default_page_size: u32,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let http_timeout_secs = parse_env("HTTP_TIMEOUT_SECS", 30);
        let default_page_size = parse_env("DEFAULT_PAGE_SIZE", 10);

        Self {
            base_url,
            http_timeout_secs,
            default_page_size,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            http_timeout_secs: 30,
            default_page_size: 10,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn parse_env_falls_back_on_missing() {
        let value: u64 = parse_env("EVENTS_CLIENT_TEST_UNSET_KEY", 7);
        assert_eq!(value, 7);
    }
}

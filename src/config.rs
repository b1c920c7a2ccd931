use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::error::SearchError;

pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Process-wide settings, read once at startup and handed to the searcher.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub google_cse_id: Option<String>,
    pub search_api_url: String,
    pub fetch_timeout: Duration,
    pub host: String,
    pub port: u16,
}

/// Credentials required to talk to the custom search provider.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub api_key: &'a str,
    pub cse_id: &'a str,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        let config = Config {
            google_api_key: get_env_opt("GOOGLE_API_KEY"),
            google_cse_id: get_env_opt("GOOGLE_CSE_ID"),
            search_api_url: get_env_or_default("GOOGLE_SEARCH_API_URL", DEFAULT_SEARCH_API_URL),
            fetch_timeout: Duration::from_secs(get_env_parsed(
                "FETCH_TIMEOUT_SECS",
                DEFAULT_FETCH_TIMEOUT_SECS,
            )),
            host: get_env_or_default("HOST", DEFAULT_HOST),
            port: get_env_parsed("PORT", DEFAULT_PORT),
        };

        if config.credentials().is_err() {
            tracing::warn!(
                "GOOGLE_API_KEY or GOOGLE_CSE_ID is not set, every search request will fail"
            );
        }
        config
    }

    /// Builds a config with the given credentials and defaults for everything else.
    /// Useful for tests that point the searcher at a mock provider.
    pub fn with_credentials(api_key: Option<&str>, cse_id: Option<&str>) -> Config {
        Config {
            google_api_key: api_key.map(str::to_string),
            google_cse_id: cse_id.map(str::to_string),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn credentials(&self) -> Result<Credentials<'_>, SearchError> {
        match (self.google_api_key.as_deref(), self.google_cse_id.as_deref()) {
            (Some(api_key), Some(cse_id)) => Ok(Credentials { api_key, cse_id }),
            _ => Err(SearchError::Configuration),
        }
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_env_opt(key).unwrap_or_else(|| default.to_string())
}

fn get_env_parsed<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match get_env_opt(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("invalid value {raw:?} for {key}, using default {default}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_values() {
        assert!(Config::with_credentials(Some("key"), Some("cx")).credentials().is_ok());
        assert!(matches!(
            Config::with_credentials(None, Some("cx")).credentials(),
            Err(SearchError::Configuration)
        ));
        assert!(matches!(
            Config::with_credentials(Some("key"), None).credentials(),
            Err(SearchError::Configuration)
        ));
    }

    #[test]
    fn credentials_borrow_config_values() {
        let config = Config::with_credentials(Some("key"), Some("cx"));
        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.cse_id, "cx");
    }

    // Each test owns distinct variable names; the process environment is shared.
    fn set(key: &str, value: &str) {
        unsafe { env::set_var(key, value) }
    }

    #[test]
    fn blank_values_count_as_absent() {
        set("CSE_SEARCH_TEST_BLANK", "   ");
        set("CSE_SEARCH_TEST_PADDED", "  value  ");
        assert_eq!(get_env_opt("CSE_SEARCH_TEST_BLANK"), None);
        assert_eq!(get_env_opt("CSE_SEARCH_TEST_PADDED"), Some("value".to_string()));
        assert_eq!(get_env_opt("CSE_SEARCH_TEST_NEVER_SET"), None);
        assert_eq!(
            get_env_or_default("CSE_SEARCH_TEST_BLANK", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn malformed_numbers_fall_back_to_default() {
        set("CSE_SEARCH_TEST_BAD_PORT", "eighty");
        set("CSE_SEARCH_TEST_GOOD_PORT", "9090");
        set("CSE_SEARCH_TEST_NEGATIVE_SECS", "-3");
        assert_eq!(get_env_parsed("CSE_SEARCH_TEST_BAD_PORT", DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(get_env_parsed("CSE_SEARCH_TEST_GOOD_PORT", DEFAULT_PORT), 9090);
        assert_eq!(
            get_env_parsed("CSE_SEARCH_TEST_NEGATIVE_SECS", DEFAULT_FETCH_TIMEOUT_SECS),
            DEFAULT_FETCH_TIMEOUT_SECS
        );
        assert_eq!(get_env_parsed("CSE_SEARCH_TEST_UNSET_PORT", DEFAULT_PORT), DEFAULT_PORT);
    }

    // Only test that touches the real variable names.
    #[test]
    fn from_env_reads_process_environment() {
        set("GOOGLE_API_KEY", "  ");
        set("GOOGLE_CSE_ID", "engine-id");
        set("GOOGLE_SEARCH_API_URL", "http://127.0.0.1:9999/customsearch/v1");
        set("FETCH_TIMEOUT_SECS", "soon");
        set("PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.google_api_key, None);
        assert_eq!(config.google_cse_id.as_deref(), Some("engine-id"));
        assert!(matches!(config.credentials(), Err(SearchError::Configuration)));
        assert_eq!(config.search_api_url, "http://127.0.0.1:9999/customsearch/v1");
        assert_eq!(
            config.fetch_timeout,
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
        );
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn defaults_are_applied() {
        let config = Config::with_credentials(None, None);
        assert_eq!(config.search_api_url, DEFAULT_SEARCH_API_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.port, 8000);
    }
}

//! Backend configuration parsed from environment variables.
//!
//! The service key is never compiled in; it only ever comes from the
//! environment.

use reqwest::Url;

use crate::error::ConfigError;

pub const ENV_BACKEND_URL: &str = "AUTOVALUE_BACKEND_URL";
pub const ENV_BACKEND_KEY: &str = "AUTOVALUE_BACKEND_KEY";
pub const ENV_AUTO_REFRESH_TOKEN: &str = "AUTOVALUE_AUTO_REFRESH_TOKEN";
pub const ENV_PERSIST_SESSION: &str = "AUTOVALUE_PERSIST_SESSION";
pub const ENV_DETECT_SESSION_IN_URL: &str = "AUTOVALUE_DETECT_SESSION_IN_URL";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Session behaviour flags handed to the backend client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOptions {
    /// Refresh the access token shortly before it expires
    pub auto_refresh_token: bool,
    /// Keep the session on disk between launches
    pub persist_session: bool,
    /// Pick up a session from a callback URL's fragment
    pub detect_session_in_url: bool,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            auto_refresh_token: true,
            persist_session: true,
            detect_session_in_url: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL, without trailing slash
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
    pub auth: AuthOptions,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl BackendConfig {
    /// Config with default flags and timeouts
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            url: normalize_url(url)?,
            anon_key: anon_key.to_string(),
            auth: AuthOptions::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        })
    }

    /// Build typed backend config from environment variables.
    ///
    /// Required:
    /// - `AUTOVALUE_BACKEND_URL`
    /// - `AUTOVALUE_BACKEND_KEY`
    ///
    /// Optional (default `true`):
    /// - `AUTOVALUE_AUTO_REFRESH_TOKEN`
    /// - `AUTOVALUE_PERSIST_SESSION`
    /// - `AUTOVALUE_DETECT_SESSION_IN_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BackendConfig::from_env`] over an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_BACKEND_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar(ENV_BACKEND_URL.into()))?;
        let anon_key = lookup(ENV_BACKEND_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar(ENV_BACKEND_KEY.into()))?;

        let mut config = Self::new(&url, anon_key.trim())?;
        config.auth = AuthOptions {
            auto_refresh_token: parse_flag(ENV_AUTO_REFRESH_TOKEN, lookup(ENV_AUTO_REFRESH_TOKEN))?,
            persist_session: parse_flag(ENV_PERSIST_SESSION, lookup(ENV_PERSIST_SESSION))?,
            detect_session_in_url: parse_flag(
                ENV_DETECT_SESSION_IN_URL,
                lookup(ENV_DETECT_SESSION_IN_URL),
            )?,
        };
        Ok(config)
    }

    /// Replace the URL, e.g. from a command-line override
    pub fn with_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.url = normalize_url(url)?;
        Ok(self)
    }

    pub fn with_auth(mut self, auth: AuthOptions) -> Self {
        self.auth = auth;
        self
    }
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl(format!("{trimmed}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme '{other}'"
        ))),
    }
}

fn parse_flag(var: &str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(true);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(true),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn requires_url_and_key() {
        let err = BackendConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_BACKEND_URL.into()));

        let err = BackendConfig::from_lookup(lookup_from(&[(ENV_BACKEND_URL, "https://x.example")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_BACKEND_KEY.into()));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = BackendConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://x.example"),
            (ENV_BACKEND_KEY, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_BACKEND_KEY.into()));
    }

    #[test]
    fn flags_default_to_true() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://project.example.co/"),
            (ENV_BACKEND_KEY, "anon-key"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://project.example.co");
        assert_eq!(config.anon_key, "anon-key");
        assert_eq!(config.auth, AuthOptions::default());
        assert!(config.auth.auto_refresh_token);
        assert!(config.auth.persist_session);
        assert!(config.auth.detect_session_in_url);
    }

    #[test]
    fn flags_parse_common_spellings() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://x.example"),
            (ENV_BACKEND_KEY, "k"),
            (ENV_AUTO_REFRESH_TOKEN, "off"),
            (ENV_PERSIST_SESSION, "0"),
            (ENV_DETECT_SESSION_IN_URL, "Yes"),
        ]))
        .unwrap();
        assert!(!config.auth.auto_refresh_token);
        assert!(!config.auth.persist_session);
        assert!(config.auth.detect_session_in_url);
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = BackendConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://x.example"),
            (ENV_BACKEND_KEY, "k"),
            (ENV_PERSIST_SESSION, "maybe"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: ENV_PERSIST_SESSION.into(),
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(matches!(
            BackendConfig::new("not a url", "k"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            BackendConfig::new("ftp://files.example", "k"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn with_url_overrides() {
        let config = BackendConfig::new("https://a.example", "k")
            .unwrap()
            .with_url("http://localhost:54321/")
            .unwrap();
        assert_eq!(config.url, "http://localhost:54321");
    }
}

use std::any::Any;
use std::env::vars;

use log::info;
use pyme_states::State;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::list_view::DEFAULT_ITEMS_PER_PAGE;

pub const ENV_PREFIX: &str = "PYME_";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the REST backend plus list defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub api_token: Option<String>,
    pub items_per_page: usize,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    api_token: Option<String>,
    items_per_page: Option<usize>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            api_token: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Read `PYME_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from {ENV_PREFIX}* environment variables");
        Self::from_vars(vars())
    }

    /// Read configuration from `(name, value)` pairs. Names without the
    /// `PYME_` prefix are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefixed: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_string(), value.as_ref().to_string()))
            })
            .collect();

        let raw: RawConfig =
            serde_env::from_iter(prefixed).map_err(|err| ConfigError::Env(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            api_base_url,
            api_token,
            items_per_page,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) => {
                info!("Using provided API_BASE_URL: {url}");
                normalize_base_url(&url)?
            }
            None => {
                info!("API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        Ok(Self {
            api_base_url,
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            items_per_page: items_per_page
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        })
    }

    /// `{base}/api`
    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url)
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::BaseUrl {
            url: url.to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_variables() {
        let config = BusinessConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty environment should be valid");

        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.api_url(), "http://localhost:8080/api");
        assert!(config.api_token().is_none());
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = BusinessConfig::from_vars(vec![
            ("PYME_API_BASE_URL", "https://pyme.example.com/"),
            ("PYME_API_TOKEN", "secret"),
            ("PYME_ITEMS_PER_PAGE", "25"),
            ("HOME", "/root"),
        ])
        .expect("config should build");

        assert_eq!(config.api_base_url, "https://pyme.example.com");
        assert_eq!(config.api_token(), Some("secret"));
        assert_eq!(config.items_per_page, 25);
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = BusinessConfig::from_vars(vec![("PYME_API_TOKEN", "  ")])
            .expect("config should build");

        assert!(config.api_token().is_none());
    }

    #[test]
    fn zero_items_per_page_falls_back() {
        let config = BusinessConfig::from_vars(vec![("PYME_ITEMS_PER_PAGE", "0")])
            .expect("config should build");

        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = BusinessConfig::from_vars(vec![("PYME_API_BASE_URL", "localhost:8080")]);

        assert!(matches!(result, Err(ConfigError::BaseUrl { .. })));
    }

    #[test]
    fn rejects_malformed_number() {
        let result = BusinessConfig::from_vars(vec![("PYME_ITEMS_PER_PAGE", "many")]);

        assert!(matches!(result, Err(ConfigError::Env(_))));
    }
}

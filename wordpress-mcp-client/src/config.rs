//! Runtime configuration read once from the environment.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the site base URL.
pub const ENV_API_URL: &str = "WORDPRESS_API_URL";
/// Environment variable holding the account username.
pub const ENV_USERNAME: &str = "WORDPRESS_USERNAME";
/// Environment variable holding the application password.
pub const ENV_APPLICATION_PASSWORD: &str = "WORDPRESS_APPLICATION_PASSWORD";
/// Optional override of the REST root path.
pub const ENV_API_ROOT: &str = "WORDPRESS_API_ROOT";
/// Optional request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "WORDPRESS_TIMEOUT_SECS";

const DEFAULT_API_ROOT: &str = "/wp-json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Why the configuration could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{name} is invalid: {detail}")]
    Invalid { name: String, detail: String },
}

/// Username plus application password used for Basic authentication.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub application_password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("application_password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for one WordPress site.
#[derive(Debug, Clone)]
pub struct WpConfig {
    /// Site base URL, without trailing slash.
    pub base_url: String,
    /// REST root appended to the base URL (`/wp-json`).
    pub api_root: String,
    pub credentials: Credentials,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl WpConfig {
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        application_password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(ENV_API_URL, base_url)?,
            api_root: DEFAULT_API_ROOT.to_string(),
            credentials: Credentials {
                username: username.into(),
                application_password: application_password.into(),
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::Missing(name.to_string()));

        let mut config = Self::new(
            &require(ENV_API_URL)?,
            require(ENV_USERNAME)?,
            require(ENV_APPLICATION_PASSWORD)?,
        )?;

        if let Some(root) = get(ENV_API_ROOT) {
            config.api_root = normalize_api_root(&root);
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: ENV_TIMEOUT_SECS.to_string(),
                    detail: format!("expected a positive number of seconds, got '{raw}'"),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Base URL joined with the REST root, e.g. `https://example.com/wp-json`.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url, self.api_root)
    }
}

fn parse_base_url(name: &str, raw: &str) -> Result<String, ConfigError> {
    let invalid = |detail: String| ConfigError::Invalid {
        name: name.to_string(),
        detail,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn normalize_api_root(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn reads_required_variables() {
        let config = WpConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://blog.example.com/"),
            (ENV_USERNAME, "admin"),
            (ENV_APPLICATION_PASSWORD, "abcd efgh"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://blog.example.com");
        assert_eq!(config.api_base(), "https://blog.example.com/wp-json");
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = WpConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://blog.example.com"),
            (ENV_USERNAME, ""),
            (ENV_APPLICATION_PASSWORD, "secret"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing(ENV_USERNAME.to_string()));
    }

    #[test]
    fn rejects_relative_url() {
        let err = WpConfig::from_lookup(lookup(&[
            (ENV_API_URL, "blog.example.com"),
            (ENV_USERNAME, "admin"),
            (ENV_APPLICATION_PASSWORD, "secret"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { ref name, .. } if name == ENV_API_URL));
    }

    #[test]
    fn optional_overrides() {
        let config = WpConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://localhost:8080/blog"),
            (ENV_USERNAME, "admin"),
            (ENV_APPLICATION_PASSWORD, "secret"),
            (ENV_API_ROOT, "api/"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_root, "/api");
        assert_eq!(config.api_base(), "http://localhost:8080/blog/api");
        assert_eq!(config.timeout, Duration::from_secs(5));

        let err = WpConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://localhost:8080"),
            (ENV_USERNAME, "admin"),
            (ENV_APPLICATION_PASSWORD, "secret"),
            (ENV_TIMEOUT_SECS, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn debug_redacts_password() {
        let config = WpConfig::new("https://example.com", "admin", "super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("super-secret"));
    }
}

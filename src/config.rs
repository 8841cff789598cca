//! Client configuration and the process-wide default.
//!
//! A [`Client`](crate::Client) built without an explicit [`Config`] copies
//! the global configuration at construction time. Later calls to
//! [`configure`] only affect clients created afterwards.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;

/// Default API scheme
pub const DEFAULT_API_SCHEME: &str = "https";
/// Default API host
pub const DEFAULT_API_HOST: &str = "api.tumblr.com";

static GLOBAL: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Application and user credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Application consumer key, sent as `api_key` on public endpoints
    pub consumer_key: Option<String>,
    /// Application consumer secret
    pub consumer_secret: Option<String>,
    /// User access token, sent as a bearer token when present
    pub oauth_token: Option<String>,
    /// User access token secret
    pub oauth_token_secret: Option<String>,
}

// Secrets stay out of Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("oauth_token", &redact(&self.oauth_token))
            .field("oauth_token_secret", &redact(&self.oauth_token_secret))
            .finish()
    }
}

/// Configuration for a Tumblr client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    /// URL scheme (http or https)
    pub api_scheme: String,
    /// API host
    pub api_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            credentials: Credentials::default(),
            api_scheme: DEFAULT_API_SCHEME.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme and host
    pub fn new(api_scheme: String, api_host: String) -> Self {
        Config {
            credentials: Credentials::default(),
            api_scheme,
            api_host,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_consumer_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.consumer_key = Some(key.into());
        self
    }

    pub fn with_consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.credentials.consumer_secret = Some(secret.into());
        self
    }

    pub fn with_oauth_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.oauth_token = Some(token.into());
        self
    }

    pub fn with_oauth_token_secret(mut self, secret: impl Into<String>) -> Self {
        self.credentials.oauth_token_secret = Some(secret.into());
        self
    }

    pub fn with_api_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.api_scheme = scheme.into();
        self
    }

    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.api_scheme, self.api_host)
    }
}

/// Modify the global configuration in place
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Config),
{
    let mut global = GLOBAL.write();
    f(&mut global);
    tracing::debug!(
        api_scheme = %global.api_scheme,
        api_host = %global.api_host,
        "global configuration updated"
    );
}

/// Snapshot of the global configuration
pub fn config() -> Config {
    GLOBAL.read().clone()
}

/// Snapshot of the global credentials
pub fn credentials() -> Credentials {
    GLOBAL.read().credentials.clone()
}

/// Restore the global configuration to its defaults
pub fn reset() {
    *GLOBAL.write() = Config::default();
}

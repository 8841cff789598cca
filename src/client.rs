use crate::config::{self, Config, Credentials};
use crate::error::Result;
use crate::options::Options;
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;

/// Tumblr API client.
///
/// Resource methods are grouped by area in the `blog`, `user`, `post` and
/// `tagged` modules. Each one validates its options, shapes the request, and
/// only then calls the transport.
#[derive(Debug, Clone)]
pub struct Client<T: Transport = HttpTransport> {
    config: Config,
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client from a snapshot of the global configuration
    pub fn new() -> Self {
        Self::with_config(config::config())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: Config) -> Self {
        let transport = HttpTransport::new(&config);
        Client { config, transport }
    }
}

impl Default for Client<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    /// Create a client that sends requests through `transport`
    pub fn with_transport(config: Config, transport: T) -> Self {
        Client { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    pub fn api_scheme(&self) -> &str {
        &self.config.api_scheme
    }

    pub fn api_host(&self) -> &str {
        &self.config.api_host
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{api_key: <consumer key>}`, the parameter public endpoints require
    pub(crate) fn api_key_params(&self) -> Options {
        Options::new().with("api_key", self.config.credentials.consumer_key.clone())
    }

    pub fn get(&self, path: &str, params: &Options) -> Result<Value> {
        tracing::trace!(path, params = params.len(), "GET");
        self.transport.get(path, params)
    }

    pub fn post(&self, path: &str, params: &Options) -> Result<Value> {
        tracing::trace!(path, params = params.len(), "POST");
        self.transport.post(path, params)
    }

    pub fn delete(&self, path: &str, params: &Options) -> Result<Value> {
        tracing::trace!(path, params = params.len(), "DELETE");
        self.transport.delete(path, params)
    }

    pub fn get_redirect_url(&self, path: &str, params: &Options) -> Result<String> {
        tracing::trace!(path, "GET (redirect)");
        self.transport.get_redirect_url(path, params)
    }
}

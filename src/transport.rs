//! Network transport for API requests.
//!
//! The [`Client`](crate::Client) validates options and shapes paths and
//! parameters, then hands the finished request to a [`Transport`]. The
//! default [`HttpTransport`] performs blocking HTTP calls with reqwest; tests
//! and embedders can supply their own implementation.

use crate::config::Config;
use crate::error::{RestError, Result};
use crate::options::Options;
use crate::response::Response;
use reqwest::blocking::{multipart, Client, ClientBuilder, RequestBuilder};
use reqwest::header::{AUTHORIZATION, LOCATION};
use reqwest::redirect::Policy;
use reqwest::Method;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

/// Executes shaped requests against the API.
///
/// Paths are relative to the API root (`v2/...`). Successful calls return
/// the envelope's `response` payload.
pub trait Transport {
    fn get(&self, path: &str, params: &Options) -> Result<Value>;

    fn post(&self, path: &str, params: &Options) -> Result<Value>;

    fn delete(&self, path: &str, params: &Options) -> Result<Value>;

    /// Issue a GET without following redirects and return the target URL
    fn get_redirect_url(&self, path: &str, params: &Options) -> Result<String>;
}

/// Create the HTTP client for API requests
pub fn create_http_client(follow_redirects: bool) -> Client {
    let policy = if follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };

    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(Duration::from_secs(300)) // 5 minutes
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("tumblr-rs/", env!("CARGO_PKG_VERSION")))
        .redirect(policy)
        .build()
        .expect("Failed to create HTTP client")
}

/// Blocking reqwest transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    redirect_client: Client,
    base_url: String,
    oauth_token: Option<String>,
}

impl HttpTransport {
    /// Create a transport bound to the scheme, host and token of `config`
    pub fn new(config: &Config) -> Self {
        HttpTransport {
            client: create_http_client(true),
            redirect_client: create_http_client(false),
            base_url: config.base_url(),
            oauth_token: config.credentials.oauth_token.clone(),
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))?;
        Ok(url)
    }

    fn build(&self, client: &Client, method: Method, path: &str, params: &Options) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let mut request = client.request(method.clone(), url);

        if let Some(ref token) = self.oauth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if method == Method::POST {
            if params.keys().any(is_file_param) {
                request = request.multipart(multipart_form(params)?);
            } else {
                request = request.form(&encode_params(params));
            }
        } else if !params.is_empty() {
            request = request.query(&encode_params(params));
        }

        Ok(request)
    }

    fn execute(&self, method: Method, path: &str, params: &Options) -> Result<Value> {
        let start = Instant::now();
        let http_response = self.build(&self.client, method.clone(), path, params)?.send()?;
        let status = http_response.status().as_u16();
        let body = http_response.bytes()?;

        tracing::debug!(%method, path, status, elapsed = ?start.elapsed(), "tumblr request");

        let envelope: Response = serde_json::from_slice(&body).map_err(|e| {
            if status >= 400 {
                RestError::http(status, String::from_utf8_lossy(&body).to_string(), Some(Box::new(e)))
            } else {
                RestError::Json(e)
            }
        })?;

        if !matches!(status, 200 | 201) {
            tracing::warn!(%method, path, status, msg = %envelope.meta.msg, "tumblr request failed");
        }

        envelope.into_result(status)
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, params: &Options) -> Result<Value> {
        self.execute(Method::GET, path, params)
    }

    fn post(&self, path: &str, params: &Options) -> Result<Value> {
        self.execute(Method::POST, path, params)
    }

    fn delete(&self, path: &str, params: &Options) -> Result<Value> {
        self.execute(Method::DELETE, path, params)
    }

    fn get_redirect_url(&self, path: &str, params: &Options) -> Result<String> {
        let http_response = self.build(&self.redirect_client, Method::GET, path, params)?.send()?;
        let status = http_response.status();

        tracing::debug!(path, status = status.as_u16(), "tumblr redirect lookup");

        if status.is_redirection() {
            return http_response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
                .ok_or_else(|| RestError::MissingRedirect(path.to_string()));
        }

        let status = status.as_u16();
        let body = http_response.bytes()?;
        match serde_json::from_slice::<Response>(&body) {
            Ok(envelope) => {
                envelope.into_result(status)?;
                Err(RestError::MissingRedirect(path.to_string()))
            }
            Err(e) => Err(RestError::http(
                status,
                String::from_utf8_lossy(&body).to_string(),
                Some(Box::new(e)),
            )),
        }
    }
}

/// Whether a parameter names a file upload (`data` or `data[N]`)
fn is_file_param(key: &str) -> bool {
    key == "data" || (key.starts_with("data[") && key.ends_with(']'))
}

fn multipart_form(params: &Options) -> Result<multipart::Form> {
    let mut form = multipart::Form::new();
    for (key, value) in params {
        match value {
            Value::String(file) if is_file_param(key) => {
                form = form.file(key.clone(), file)?;
            }
            _ => {
                let mut pairs = Vec::new();
                encode_value(key.clone(), value, &mut pairs);
                for (k, v) in pairs {
                    form = form.text(k, v);
                }
            }
        }
    }
    Ok(form)
}

/// Flatten options into `key=value` pairs.
///
/// Arrays become repeated `key[]` entries and objects `key[field]` entries;
/// `null` is sent as an empty value.
pub fn encode_params(params: &Options) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        encode_value(key.clone(), value, &mut pairs);
    }
    pairs
}

fn encode_value(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => pairs.push((key, String::new())),
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                encode_value(format!("{}[]", key), item, pairs);
            }
        }
        Value::Object(map) => {
            for (field, item) in map {
                encode_value(format!("{}[{}]", key, field), item, pairs);
            }
        }
    }
}

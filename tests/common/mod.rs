#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::Value;
use tumblr::{Client, Config, Options, Result, Transport};

pub const CONSUMER_KEY: &str = "ckey";
pub const BLOG: &str = "seejohnrun.tumblr.com";
pub const OTHER_BLOG: &str = "staff";

/// One request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub params: Options,
}

/// Transport that records requests instead of sending them
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, method: &'static str, path: &str, params: &Options) {
        self.calls.lock().push(Call {
            method,
            path: path.to_string(),
            params: params.clone(),
        });
    }
}

impl Transport for RecordingTransport {
    fn get(&self, path: &str, params: &Options) -> Result<Value> {
        self.record("GET", path, params);
        Ok(Value::from("response"))
    }

    fn post(&self, path: &str, params: &Options) -> Result<Value> {
        self.record("POST", path, params);
        Ok(Value::from("response"))
    }

    fn delete(&self, path: &str, params: &Options) -> Result<Value> {
        self.record("DELETE", path, params);
        Ok(Value::from("response"))
    }

    fn get_redirect_url(&self, path: &str, params: &Options) -> Result<String> {
        self.record("REDIRECT", path, params);
        Ok("url".to_string())
    }
}

pub fn client() -> Client<RecordingTransport> {
    Client::with_transport(
        Config::default().with_consumer_key(CONSUMER_KEY),
        RecordingTransport::default(),
    )
}

/// The single call the client made
pub fn only_call(client: &Client<RecordingTransport>) -> Call {
    let calls = client.transport().calls();
    assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
    calls.into_iter().next().unwrap()
}

pub fn call(method: &'static str, path: &str, params: Options) -> Call {
    Call {
        method,
        path: path.to_string(),
        params,
    }
}

pub fn bad_options() -> Options {
    Options::new().with("not", "an option")
}

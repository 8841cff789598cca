use crate::client::Client;
use crate::error::Result;
use crate::options::{validate_options, Options};
use crate::transport::Transport;
use serde_json::Value;

const TAGGED: &[&str] = &["before", "limit", "filter"];

impl<T: Transport> Client<T> {
    /// Public posts carrying `tag`, across all blogs
    pub fn tagged(&self, tag: &str, options: Options) -> Result<Value> {
        validate_options(TAGGED, &options)?;
        let params = Options::new()
            .with("tag", tag)
            .merge(self.api_key_params())
            .merge(options);
        self.get("v2/tagged", &params)
    }
}

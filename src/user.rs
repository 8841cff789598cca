//! Endpoints acting on the authenticated user (`v2/user/...`).

use crate::client::Client;
use crate::error::Result;
use crate::options::{validate_options, Options};
use crate::transport::Transport;
use serde_json::Value;

const DASHBOARD: &[&str] = &[
    "limit",
    "offset",
    "type",
    "since_id",
    "reblog_info",
    "notes_info",
    "npf",
];
const LIKES: &[&str] = &["limit", "offset", "before", "after"];
const FOLLOWING: &[&str] = &["limit", "offset"];
const FILTERED_CONTENT: &[&str] = &["filtered_content"];

impl<T: Transport> Client<T> {
    pub fn info(&self) -> Result<Value> {
        self.get("v2/user/info", &Options::new())
    }

    pub fn dashboard(&self, options: Options) -> Result<Value> {
        validate_options(DASHBOARD, &options)?;
        self.get("v2/user/dashboard", &options)
    }

    pub fn likes(&self, options: Options) -> Result<Value> {
        validate_options(LIKES, &options)?;
        self.get("v2/user/likes", &options)
    }

    pub fn following(&self, options: Options) -> Result<Value> {
        validate_options(FOLLOWING, &options)?;
        self.get("v2/user/following", &options)
    }

    pub fn follow(&self, url: &str) -> Result<Value> {
        self.post("v2/user/follow", &Options::new().with("url", url))
    }

    pub fn unfollow(&self, url: &str) -> Result<Value> {
        self.post("v2/user/unfollow", &Options::new().with("url", url))
    }

    pub fn like(&self, id: u64, reblog_key: &str) -> Result<Value> {
        let params = Options::new().with("id", id).with("reblog_key", reblog_key);
        self.post("v2/user/like", &params)
    }

    pub fn unlike(&self, id: u64, reblog_key: &str) -> Result<Value> {
        let params = Options::new().with("id", id).with("reblog_key", reblog_key);
        self.post("v2/user/unlike", &params)
    }

    /// Content filters configured for the user
    pub fn filtered_content(&self) -> Result<Value> {
        self.get("v2/user/filtered_content", &Options::new())
    }

    /// Add one filter string, or several when `filtered_content` is passed as an array option
    pub fn add_filtered_content(&self, filtered_content: Option<&str>, mut options: Options) -> Result<Value> {
        validate_options(FILTERED_CONTENT, &options)?;
        if let Some(content) = filtered_content {
            options.insert_default("filtered_content", content);
        }
        self.post("v2/user/filtered_content", &options)
    }

    pub fn delete_filtered_content(&self, filtered_content: Option<&str>, mut options: Options) -> Result<Value> {
        validate_options(FILTERED_CONTENT, &options)?;
        if let Some(content) = filtered_content {
            options.insert_default("filtered_content", content);
        }
        self.delete("v2/user/filtered_content", &options)
    }
}

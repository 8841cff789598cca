//! # tumblr - Tumblr REST API client for Rust
//!
//! A blocking client for the Tumblr v2 API. Every resource method checks its
//! caller-supplied options against the operation's whitelist (and, where the
//! API accepts alternative ways of naming the same thing, against a group of
//! mutually exclusive options) before any request leaves the process.
//!
//! ## Features
//!
//! - Blog, user, post and tag endpoints
//! - Option validation with descriptive errors, raised before any I/O
//! - Short blog names expanded to `<name>.tumblr.com`
//! - Global default configuration, snapshotted by each new client
//! - Pluggable [`Transport`] with a reqwest based default
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tumblr::{Client, Config, Options};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::with_config(Config::default().with_consumer_key("consumer-key"));
//!
//!     // GET v2/blog/staff.tumblr.com/posts/audio?api_key=...&limit=1&type=audio
//!     let posts = client.posts("staff", Options::new().with("limit", 1).with("type", "audio"))?;
//!     println!("{}", posts);
//!
//!     // Rejected before any request is made
//!     let err = client.followers("staff", Options::new().with("not", "an option")).unwrap_err();
//!     assert!(err.is_invalid_option());
//!     Ok(())
//! }
//! ```
//!
//! ## Global configuration
//!
//! ```no_run
//! tumblr::configure(|c| {
//!     c.credentials.consumer_key = Some("consumer-key".to_string());
//!     c.credentials.oauth_token = Some("access-token".to_string());
//! });
//!
//! // Copies the configuration above; later `configure` calls do not affect it
//! let client = tumblr::new();
//! # let _ = client;
//! ```

pub mod blog;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod path;
pub mod post;
pub mod query;
pub mod response;
pub mod tagged;
pub mod time;
pub mod transport;
pub mod user;

// Re-export main types for convenience
pub use client::Client;
pub use config::{config, configure, credentials, reset, Config, Credentials};
pub use error::{RestError, Result};
pub use options::{validate_no_collision, validate_options, Options};
pub use path::{blog_path, full_blog_name};
pub use post::PostType;
pub use query::{LikesQuery, Paging, PostsQuery};
pub use response::{Meta, Response};
pub use time::Timestamp;
pub use transport::{HttpTransport, Transport};

// Re-export serde_json for convenience
pub use serde_json::json;

/// Create a client from the current global configuration
pub fn new() -> Client {
    Client::new()
}

//! Blog endpoints (`v2/blog/<host>/...`).

use crate::client::Client;
use crate::error::Result;
use crate::options::{validate_options, Options};
use crate::path::blog_path;
use crate::transport::Transport;
use serde_json::Value;

const PAGING: &[&str] = &["limit", "offset"];
const FOLLOWED_BY: &[&str] = &["query"];
const BLOG_LIKES: &[&str] = &["limit", "before", "after", "offset"];
const POSTS: &[&str] = &[
    "type",
    "id",
    "tag",
    "limit",
    "offset",
    "before",
    "reblog_info",
    "notes_info",
    "filter",
    "npf",
];
const GET_POST: &[&str] = &["post_format"];
const NOTES: &[&str] = &["before_timestamp", "mode"];
const DRAFT: &[&str] = &["limit", "before_id"];
const REORDER_QUEUE: &[&str] = &["post_id", "insert_after"];
const NOTIFICATIONS: &[&str] = &["before", "types"];
const BLOCK: &[&str] = &["blocked_tumblelog", "post_id"];
const UNBLOCK: &[&str] = &["blocked_tumblelog", "anonymous_only"];

impl<T: Transport> Client<T> {
    /// Public information about a blog
    pub fn blog_info(&self, blog_name: &str) -> Result<Value> {
        self.get(&blog_path(blog_name, "info"), &self.api_key_params())
    }

    /// URL of a blog's avatar, optionally at a given pixel size
    pub fn avatar(&self, blog_name: &str, size: Option<u32>) -> Result<String> {
        let path = match size {
            Some(size) => blog_path(blog_name, &format!("avatar/{}", size)),
            None => blog_path(blog_name, "avatar"),
        };
        self.get_redirect_url(&path, &Options::new())
    }

    pub fn followers(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(PAGING, &options)?;
        self.get(&blog_path(blog_name, "followers"), &options)
    }

    /// Blogs followed by `blog_name`
    pub fn blog_following(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(PAGING, &options)?;
        self.get(&blog_path(blog_name, "following"), &options)
    }

    /// Whether `blog_name` is followed by `followed_by`.
    ///
    /// An explicit `query` option wins over the positional argument.
    pub fn followed_by(&self, blog_name: &str, followed_by: Option<&str>, mut options: Options) -> Result<Value> {
        validate_options(FOLLOWED_BY, &options)?;
        if let Some(query) = followed_by {
            options.insert_default("query", query);
        }
        self.get(&blog_path(blog_name, "followed_by"), &options)
    }

    pub fn blog_likes(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(BLOG_LIKES, &options)?;
        let params = self.api_key_params().merge(options);
        self.get(&blog_path(blog_name, "likes"), &params)
    }

    /// Published posts, narrowed to one post type when `type` is given
    pub fn posts(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(POSTS, &options)?;
        let path = match options.get("type") {
            Some(Value::String(kind)) => blog_path(blog_name, &format!("posts/{}", kind)),
            Some(Value::Null) => blog_path(blog_name, "posts/"),
            Some(other) => blog_path(blog_name, &format!("posts/{}", other)),
            None => blog_path(blog_name, "posts"),
        };
        let params = self.api_key_params().merge(options);
        self.get(&path, &params)
    }

    pub fn get_post(&self, blog_name: &str, post_id: u64, options: Options) -> Result<Value> {
        validate_options(GET_POST, &options)?;
        self.get(&blog_path(blog_name, &format!("posts/{}", post_id)), &options)
    }

    pub fn notes(&self, blog_name: &str, post_id: u64, options: Options) -> Result<Value> {
        validate_options(NOTES, &options)?;
        let params = Options::new().with("id", post_id).merge(options);
        self.get(&blog_path(blog_name, "notes"), &params)
    }

    pub fn queue(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(PAGING, &options)?;
        self.get(&blog_path(blog_name, "posts/queue"), &options)
    }

    pub fn draft(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(DRAFT, &options)?;
        self.get(&blog_path(blog_name, "posts/draft"), &options)
    }

    pub fn submissions(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(PAGING, &options)?;
        self.get(&blog_path(blog_name, "posts/submission"), &options)
    }

    /// Move a queued post after another one
    pub fn reorder_queue(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(REORDER_QUEUE, &options)?;
        self.post(&blog_path(blog_name, "posts/queue/reorder"), &options)
    }

    pub fn shuffle_queue(&self, blog_name: &str) -> Result<Value> {
        self.post(&blog_path(blog_name, "posts/queue/shuffle"), &Options::new())
    }

    pub fn notifications(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(NOTIFICATIONS, &options)?;
        self.get(&blog_path(blog_name, "notifications"), &options)
    }

    pub fn blocks(&self, blog_name: &str, options: Options) -> Result<Value> {
        validate_options(PAGING, &options)?;
        self.get(&blog_path(blog_name, "blocks"), &options)
    }

    pub fn block(&self, blog_name: &str, blocked_blog: &str, mut options: Options) -> Result<Value> {
        validate_options(BLOCK, &options)?;
        options.insert_default("blocked_tumblelog", blocked_blog);
        self.post(&blog_path(blog_name, "blocks"), &options)
    }

    pub fn unblock(&self, blog_name: &str, blocked_blog: &str, mut options: Options) -> Result<Value> {
        validate_options(UNBLOCK, &options)?;
        options.insert_default("blocked_tumblelog", blocked_blog);
        self.delete(&blog_path(blog_name, "blocks"), &options)
    }
}

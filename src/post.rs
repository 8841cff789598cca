//! Post creation and editing (`v2/blog/<host>/post...`).

use crate::client::Client;
use crate::error::{RestError, Result};
use crate::options::{validate_no_collision, validate_options, Options};
use crate::path::blog_path;
use crate::transport::Transport;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Options accepted by every legacy post type
pub const STANDARD_POST_OPTIONS: &[&str] = &["state", "tags", "tweet", "date", "markdown", "slug", "format"];

/// Legacy post types accepted by `create_post`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostType {
    Text,
    Photo,
    Quote,
    Link,
    Chat,
    Audio,
    Video,
}

impl PostType {
    pub const ALL: [PostType; 7] = [
        PostType::Quote,
        PostType::Text,
        PostType::Link,
        PostType::Chat,
        PostType::Audio,
        PostType::Video,
        PostType::Photo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Photo => "photo",
            PostType::Quote => "quote",
            PostType::Link => "link",
            PostType::Chat => "chat",
            PostType::Audio => "audio",
            PostType::Video => "video",
        }
    }

    /// Types whose content may be uploaded through the `data` option
    pub fn carries_data(&self) -> bool {
        matches!(self, PostType::Audio | PostType::Video | PostType::Photo)
    }

    /// Type specific options, on top of [`STANDARD_POST_OPTIONS`]
    fn extra_options(&self) -> &'static [&'static str] {
        match self {
            PostType::Photo => &["caption", "link", "data", "data64", "source", "photoset_layout"],
            PostType::Quote => &["quote", "source"],
            PostType::Text => &["title", "body"],
            PostType::Link => &["title", "url", "description", "thumbnail", "excerpt", "author"],
            PostType::Chat => &["title", "conversation"],
            PostType::Audio => &["data", "caption", "external_url"],
            PostType::Video => &["data", "embed", "caption"],
        }
    }

    /// Options of which at most one may be given
    fn exclusive_options(&self) -> Option<&'static [&'static str]> {
        match self {
            PostType::Photo => Some(&["data", "source"]),
            PostType::Audio => Some(&["data", "external_url"]),
            PostType::Video => Some(&["data", "embed"]),
            _ => None,
        }
    }

    fn allowed_options(&self) -> Vec<&'static str> {
        let mut allowed = STANDARD_POST_OPTIONS.to_vec();
        allowed.extend_from_slice(self.extra_options());
        allowed
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix(':').unwrap_or(s);
        PostType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| RestError::InvalidPostType(s.to_string()))
    }
}

fn post_path(blog_name: &str) -> String {
    blog_path(blog_name, "post")
}

/// Flatten array-valued `source` into `source[N]` entries
fn convert_source_array(options: &mut Options) {
    options.flatten_indexed("source");
}

/// Flatten array-valued `data` file lists into `data[N]` entries
fn extract_data(options: &mut Options) {
    options.flatten_indexed("data");
}

impl<T: Transport> Client<T> {
    /// Create a post of the given kind
    pub fn create_post(&self, kind: PostType, blog_name: &str, mut options: Options) -> Result<Value> {
        validate_options(&kind.allowed_options(), &options)?;
        if let Some(group) = kind.exclusive_options() {
            validate_no_collision(&options, group)?;
        }

        if kind == PostType::Photo {
            convert_source_array(&mut options);
        }
        options.insert("type", kind.as_str());
        if kind.carries_data() {
            extract_data(&mut options);
        }

        self.post(&post_path(blog_name), &options)
    }

    pub fn text(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Text, blog_name, options)
    }

    /// Photo post from uploaded files (`data`) or remote URLs (`source`), not both
    pub fn photo(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Photo, blog_name, options)
    }

    pub fn quote(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Quote, blog_name, options)
    }

    pub fn link(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Link, blog_name, options)
    }

    pub fn chat(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Chat, blog_name, options)
    }

    pub fn audio(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Audio, blog_name, options)
    }

    pub fn video(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.create_post(PostType::Video, blog_name, options)
    }

    /// Edit an existing post; `id` names the post to change
    pub fn edit(&self, blog_name: &str, mut options: Options) -> Result<Value> {
        convert_source_array(&mut options);
        let carries_data = match options.get("type") {
            Some(Value::String(kind)) => kind.parse::<PostType>().map(|k| k.carries_data()).unwrap_or(false),
            _ => false,
        };
        if carries_data {
            extract_data(&mut options);
        }
        self.post(&blog_path(blog_name, "post/edit"), &options)
    }

    pub fn reblog(&self, blog_name: &str, options: Options) -> Result<Value> {
        self.post(&blog_path(blog_name, "post/reblog"), &options)
    }

    pub fn delete_post(&self, blog_name: &str, id: u64) -> Result<Value> {
        self.post(&blog_path(blog_name, "post/delete"), &Options::new().with("id", id))
    }
}

//! Typed option structs.
//!
//! These carry only option names the matching endpoints accept, so the
//! resulting [`Options`] always pass their whitelist.

use crate::error::Result;
use crate::options::Options;
use crate::time::Timestamp;
use serde::Serialize;

/// `limit` / `offset` pagination accepted by most list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Paging {
    /// Maximum number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Paging {
    pub fn new(limit: u32, offset: u32) -> Self {
        Paging {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub fn limit(limit: u32) -> Self {
        Paging {
            limit: Some(limit),
            offset: None,
        }
    }

    pub fn to_options(&self) -> Result<Options> {
        Options::from_serialize(self)
    }
}

/// Filters for a blog's published posts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsQuery {
    /// Post type, also appended to the request path
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    /// Single post id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Only posts carrying this tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Only posts published before this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reblog_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_info: Option<bool>,
    /// Body format, `text` or `raw`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Return posts in the Neue Post Format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npf: Option<bool>,
}

impl PostsQuery {
    pub fn to_options(&self) -> Result<Options> {
        Options::from_serialize(self)
    }
}

/// Filters for like listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LikesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Timestamp>,
}

impl LikesQuery {
    pub fn to_options(&self) -> Result<Options> {
        Options::from_serialize(self)
    }
}

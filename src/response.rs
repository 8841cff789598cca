use crate::error::RestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status block present on every API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub status: u16,
    #[serde(default)]
    pub msg: String,
}

/// Response envelope returned by the Tumblr API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub meta: Meta,

    /// Payload (object, array, or empty array on some errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,

    /// Detailed error list, present on some failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl Response {
    /// Consume the envelope, returning the payload on success
    pub fn into_result(self, http_status: u16) -> Result<Value, RestError> {
        if matches!(http_status, 200 | 201) {
            return Ok(self.response.unwrap_or(Value::Null));
        }

        let status = if self.meta.status != 0 {
            self.meta.status
        } else {
            http_status
        };
        Err(RestError::Api {
            status,
            message: self.meta.msg,
            errors: self.errors,
        })
    }
}

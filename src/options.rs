//! Option sets and their validation.
//!
//! Every resource method receives its caller-supplied options as an
//! [`Options`] map and checks it against a static whitelist before any
//! request is built. Some operations additionally declare a group of
//! mutually exclusive option names.
//!
//! Option names are canonicalized on insertion: a leading `:` is stripped so
//! `":limit"` and `"limit"` name the same option. Matching is otherwise exact.

use crate::error::{RestError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Canonical form of an option name
pub fn canonical_key(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// Insertion-ordered set of named request options.
///
/// Presence is defined by key membership: a key holding `null` is present.
/// Equality ignores ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, Value>);

impl Options {
    /// Create an empty option set
    pub fn new() -> Self {
        Options(IndexMap::new())
    }

    /// Build an option set from any value serializing to a JSON object
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map.into()),
            Value::Null => Ok(Options::new()),
            other => Err(RestError::RequestBuild(format!(
                "options must serialize to a map, got {}",
                other
            ))),
        }
    }

    /// Builder form of [`Options::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an option, replacing any previous value under the same name
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        self.0.insert(canonical_key(&key).to_string(), value.into())
    }

    /// Set an option only when it is absent or `null`
    pub fn insert_default(&mut self, key: &str, value: impl Into<Value>) {
        let key = canonical_key(key);
        match self.0.get_mut(key) {
            Some(existing) if !existing.is_null() => {}
            Some(existing) => *existing = value.into(),
            None => {
                self.0.insert(key.to_string(), value.into());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(canonical_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(canonical_key(key))
    }

    /// Remove an option, keeping the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(canonical_key(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into this set; values from `other` win
    pub fn merge(mut self, other: Options) -> Self {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
        self
    }

    /// Replace an array-valued option with `key[0]`, `key[1]`, ... entries
    pub(crate) fn flatten_indexed(&mut self, key: &str) {
        if !matches!(self.get(key), Some(Value::Array(_))) {
            return;
        }
        if let Some(Value::Array(items)) = self.remove(key) {
            for (idx, item) in items.into_iter().enumerate() {
                self.0.insert(format!("{}[{}]", canonical_key(key), idx), item);
            }
        }
    }
}

impl From<serde_json::Map<String, Value>> for Options {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reject any supplied option whose name is not in `allowed`.
///
/// The error lists the rejected names in the order they were supplied,
/// followed by the whole whitelist.
pub fn validate_options(allowed: &[&str], supplied: &Options) -> Result<()> {
    let rejected: Vec<String> = supplied
        .keys()
        .filter(|key| !allowed.iter().any(|a| canonical_key(a) == *key))
        .map(str::to_string)
        .collect();

    if rejected.is_empty() {
        return Ok(());
    }

    Err(RestError::UnknownOption {
        rejected,
        allowed: allowed.iter().map(|a| canonical_key(a).to_string()).collect(),
    })
}

/// Reject option sets carrying more than one name from `group`
pub fn validate_no_collision(supplied: &Options, group: &[&str]) -> Result<()> {
    let found = group.iter().filter(|attr| supplied.contains_key(attr)).count();
    if found <= 1 {
        return Ok(());
    }

    Err(RestError::ConflictingOption {
        group: group.iter().map(|a| canonical_key(a).to_string()).collect(),
        found,
    })
}

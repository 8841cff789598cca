use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;

/// UTC instant sent to the API as unix seconds.
///
/// Used for the `before` / `after` style options accepted by the likes,
/// notifications and posts endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Create a Timestamp from unix seconds, `None` when out of range
    pub fn from_unix(unix: i64) -> Option<Self> {
        Utc.timestamp_opt(unix, 0).single().map(Timestamp)
    }

    /// Current instant
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::from(t.unix())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let unix = i64::deserialize(deserializer)?;
        Timestamp::from_unix(unix)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", unix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serialization() {
        let ts = Timestamp::from_unix(1597242491).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1597242491");
        assert_eq!(Value::from(ts), Value::from(1597242491_i64));
    }

    #[test]
    fn test_timestamp_deserialization() {
        let ts: Timestamp = serde_json::from_str("1597242491").unwrap();
        assert_eq!(ts.unix(), 1597242491);
    }

    #[test]
    fn test_timestamp_null() {
        let result: Result<Option<Timestamp>, _> = serde_json::from_str("null");
        assert!(result.unwrap().is_none());
    }
}

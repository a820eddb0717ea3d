//! Field-level serde helpers shared by the models
//!
//! Properties declared `Nullable="false"` use [`non_null`], so an explicit
//! `null` fails to deserialize the way the registry schema rejects it.
//! Nullable properties are `Option<Option<T>>` with
//! `serde_with::rust::double_option`: absent is `None`, `null` is
//! `Some(None)`.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Deserialize a present value, failing on `null`
///
/// Pair with `#[serde(default)]` so an absent property stays `None`.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reading a nullable `Option<Option<T>>` property
pub trait NullableProperty<T> {
    /// The value when present and not `null`
    fn value(&self) -> Option<&T>;

    /// Present and explicitly `null`
    fn is_null(&self) -> bool;
}

impl<T> NullableProperty<T> for Option<Option<T>> {
    fn value(&self) -> Option<&T> {
        self.as_ref().and_then(Option::as_ref)
    }

    fn is_null(&self) -> bool {
        matches!(self, Some(None))
    }
}

/// `Edm.DateTimeOffset` that re-serializes exactly as received
///
/// Graph sends seven fractional digits and sometimes a non-UTC offset;
/// the parsed instant is kept next to the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    instant: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn parse(raw: impl Into<String>) -> Result<Self, chrono::ParseError> {
        let raw = raw.into();
        let instant = DateTime::parse_from_rfc3339(&raw)?;
        Ok(Self { raw, instant })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    /// Unix seconds
    pub fn timestamp(&self) -> i64 {
        self.instant.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            instant: instant.fixed_offset(),
        }
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(raw.as_str())
            .map_err(|e| serde::de::Error::custom(format!("'{}' is not an RFC 3339 timestamp: {}", raw, e)))
    }
}

//! Edm primitive types and their JSON representations

use chrono::{DateTime, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?P(\d+D)?(T(\d+H)?(\d+M)?(\d+(\.\d+)?S)?)?$").expect("valid duration pattern")
});

static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid decimal pattern"));

/// Special floating point literals the service may emit instead of a number
const NUMERIC_LITERALS: [&str; 3] = ["NaN", "INF", "-INF"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdmType {
    String,
    Boolean,
    Byte,
    SByte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    Guid,
    Date,
    TimeOfDay,
    DateTimeOffset,
    Duration,
    Binary,
    Stream,
}

impl EdmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdmType::String => "Edm.String",
            EdmType::Boolean => "Edm.Boolean",
            EdmType::Byte => "Edm.Byte",
            EdmType::SByte => "Edm.SByte",
            EdmType::Int16 => "Edm.Int16",
            EdmType::Int32 => "Edm.Int32",
            EdmType::Int64 => "Edm.Int64",
            EdmType::Single => "Edm.Single",
            EdmType::Double => "Edm.Double",
            EdmType::Decimal => "Edm.Decimal",
            EdmType::Guid => "Edm.Guid",
            EdmType::Date => "Edm.Date",
            EdmType::TimeOfDay => "Edm.TimeOfDay",
            EdmType::DateTimeOffset => "Edm.DateTimeOffset",
            EdmType::Duration => "Edm.Duration",
            EdmType::Binary => "Edm.Binary",
            EdmType::Stream => "Edm.Stream",
        }
    }

    /// Primitives carried as formatted JSON strings
    pub fn is_string_encoded(&self) -> bool {
        matches!(
            self,
            EdmType::Decimal
                | EdmType::Guid
                | EdmType::Date
                | EdmType::TimeOfDay
                | EdmType::DateTimeOffset
                | EdmType::Duration
        )
    }

    /// Checks a JSON value against the wire format of this primitive.
    ///
    /// Returns a message describing the mismatch.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            EdmType::String | EdmType::Binary | EdmType::Stream => expect_str(value).map(|_| ()),
            EdmType::Boolean => match value {
                Value::Bool(_) => Ok(()),
                other => Err(format!("expected boolean, received {}", json_kind(other))),
            },
            EdmType::Byte => check_integer(value, 0, u8::MAX as i64),
            EdmType::SByte => check_integer(value, i8::MIN as i64, i8::MAX as i64),
            EdmType::Int16 => check_integer(value, i16::MIN as i64, i16::MAX as i64),
            EdmType::Int32 => check_integer(value, i32::MIN as i64, i32::MAX as i64),
            EdmType::Int64 => check_integer(value, i64::MIN, i64::MAX),
            EdmType::Single | EdmType::Double => match value {
                Value::Number(_) => Ok(()),
                Value::String(s) if NUMERIC_LITERALS.contains(&s.as_str()) => Ok(()),
                other => Err(format!("expected number, received {}", json_kind(other))),
            },
            EdmType::Decimal => match value {
                Value::Number(_) => Ok(()),
                Value::String(s) if DECIMAL_PATTERN.is_match(s) => Ok(()),
                Value::String(s) => Err(format!("'{}' is not a decimal literal", s)),
                other => Err(format!("expected decimal, received {}", json_kind(other))),
            },
            EdmType::Guid => {
                let s = expect_str(value)?;
                uuid::Uuid::parse_str(s)
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a valid GUID", s))
            }
            EdmType::Date => {
                let s = expect_str(value)?;
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a valid date (yyyy-mm-dd)", s))
            }
            EdmType::TimeOfDay => {
                let s = expect_str(value)?;
                NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a valid time of day", s))
            }
            EdmType::DateTimeOffset => {
                let s = expect_str(value)?;
                DateTime::parse_from_rfc3339(s)
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a valid RFC 3339 timestamp", s))
            }
            EdmType::Duration => {
                let s = expect_str(value)?;
                if s != "P" && s != "-P" && !s.ends_with('T') && DURATION_PATTERN.is_match(s) {
                    Ok(())
                } else {
                    Err(format!("'{}' is not a valid ISO 8601 duration", s))
                }
            }
        }
    }
}

impl FromStr for EdmType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let edm = match s {
            "Edm.String" => EdmType::String,
            "Edm.Boolean" => EdmType::Boolean,
            "Edm.Byte" => EdmType::Byte,
            "Edm.SByte" => EdmType::SByte,
            "Edm.Int16" => EdmType::Int16,
            "Edm.Int32" => EdmType::Int32,
            "Edm.Int64" => EdmType::Int64,
            "Edm.Single" => EdmType::Single,
            "Edm.Double" => EdmType::Double,
            "Edm.Decimal" => EdmType::Decimal,
            "Edm.Guid" => EdmType::Guid,
            "Edm.Date" => EdmType::Date,
            "Edm.TimeOfDay" => EdmType::TimeOfDay,
            "Edm.DateTimeOffset" => EdmType::DateTimeOffset,
            "Edm.Duration" => EdmType::Duration,
            "Edm.Binary" => EdmType::Binary,
            "Edm.Stream" => EdmType::Stream,
            other => return Err(format!("unsupported primitive type '{}'", other)),
        };
        Ok(edm)
    }
}

impl fmt::Display for EdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn expect_str(value: &Value) -> Result<&str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("expected string, received {}", json_kind(value)))
}

fn check_integer(value: &Value, min: i64, max: i64) -> Result<(), String> {
    let Value::Number(n) = value else {
        return Err(format!("expected integer, received {}", json_kind(value)));
    };
    match n.as_i64() {
        Some(i) if i >= min && i <= max => Ok(()),
        Some(i) => Err(format!("{} is outside the range {}..={}", i, min, max)),
        None => Err(format!("expected integer, received {}", n)),
    }
}

/// JSON type name of a value, as used in issue messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! OData `$filter` expressions
//!
//! A [`Filter`] is a small expression tree rendered with `Display` into the
//! syntax Graph accepts. String literals are single-quoted with `'` doubled;
//! dates and GUIDs are unquoted.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::Ne => "ne",
            Comparison::Gt => "gt",
            Comparison::Ge => "ge",
            Comparison::Lt => "lt",
            Comparison::Le => "le",
        }
    }
}

/// Canonical string functions Graph supports in `$filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFunction {
    Contains,
    StartsWith,
    EndsWith,
}

impl StringFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFunction::Contains => "contains",
            StringFunction::StartsWith => "startswith",
            StringFunction::EndsWith => "endswith",
        }
    }
}

/// `any` or `all` over a collection-valued property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lambda {
    Any,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare {
        field: String,
        op: Comparison,
        value: FilterValue,
    },
    In(String, Vec<FilterValue>),
    Function {
        function: StringFunction,
        field: String,
        text: String,
    },
    /// e.g. `assignedLicenses/any(x:x/skuId eq ...)`
    Lambda {
        kind: Lambda,
        collection: String,
        variable: String,
        predicate: Box<Filter>,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    /// Passed through verbatim
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    /// Non-finite values render as the OData `NaN`, `INF` and `-INF` literals
    Number(f64),
    Integer(i64),
    Boolean(bool),
    /// `Edm.DateTimeOffset` literal
    DateTime(DateTime<Utc>),
    /// `Edm.Guid` literal
    Guid(uuid::Uuid),
    Null,
}

impl Filter {
    pub fn compare(field: impl Into<String>, op: Comparison, value: impl Into<FilterValue>) -> Self {
        Self::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Ne, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Gt, value)
    }

    pub fn ge(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Ge, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Lt, value)
    }

    pub fn le(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, Comparison::Le, value)
    }

    pub fn in_list<V: Into<FilterValue>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    fn function(function: StringFunction, field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Function {
            function,
            field: field.into(),
            text: text.into(),
        }
    }

    pub fn contains(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::function(StringFunction::Contains, field, text)
    }

    pub fn starts_with(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::function(StringFunction::StartsWith, field, text)
    }

    pub fn ends_with(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::function(StringFunction::EndsWith, field, text)
    }

    fn lambda(kind: Lambda, collection: impl Into<String>, variable: impl Into<String>, predicate: Filter) -> Self {
        Self::Lambda {
            kind,
            collection: collection.into(),
            variable: variable.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn any(collection: impl Into<String>, variable: impl Into<String>, predicate: Filter) -> Self {
        Self::lambda(Lambda::Any, collection, variable, predicate)
    }

    pub fn all(collection: impl Into<String>, variable: impl Into<String>, predicate: Filter) -> Self {
        Self::lambda(Lambda::All, collection, variable, predicate)
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }

    pub fn raw(filter: impl Into<String>) -> Self {
        Self::Raw(filter.into())
    }

    /// Render as a `$filter` value (not yet percent-encoded)
    pub fn to_odata_string(&self) -> String {
        self.to_string()
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Compare { field, op, value } => write!(f, "{} {} {}", field, op.as_str(), value),
            Filter::In(field, values) => {
                write!(f, "{} in (", field)?;
                write_joined(f, values, ", ")?;
                f.write_str(")")
            }
            Filter::Function { function, field, text } => {
                write!(f, "{}({}, {})", function.as_str(), field, Quoted(text))
            }
            Filter::Lambda {
                kind,
                collection,
                variable,
                predicate,
            } => {
                let name = match kind {
                    Lambda::Any => "any",
                    Lambda::All => "all",
                };
                write!(f, "{}/{}({}:{})", collection, name, variable, predicate)
            }
            Filter::And(filters) => {
                f.write_str("(")?;
                write_joined(f, filters, " and ")?;
                f.write_str(")")
            }
            Filter::Or(filters) => {
                f.write_str("(")?;
                write_joined(f, filters, " or ")?;
                f.write_str(")")
            }
            Filter::Not(filter) => write!(f, "not ({})", filter),
            Filter::Raw(raw) => f.write_str(raw),
        }
    }
}

/// String literal with OData quote escaping
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0.replace('\'', "''"))
    }
}

impl FilterValue {
    pub fn to_odata_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => write!(f, "{}", Quoted(s)),
            FilterValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            FilterValue::Number(n) if n.is_infinite() => f.write_str(if *n > 0.0 { "INF" } else { "-INF" }),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Integer(i) => write!(f, "{}", i),
            FilterValue::Boolean(b) => write!(f, "{}", b),
            FilterValue::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FilterValue::Guid(id) => write!(f, "{}", id),
            FilterValue::Null => f.write_str("null"),
        }
    }
}

macro_rules! filter_value_from {
    ($($source:ty => |$v:ident| $build:expr),* $(,)?) => {
        $(
            impl From<$source> for FilterValue {
                fn from($v: $source) -> Self {
                    $build
                }
            }
        )*
    };
}

filter_value_from! {
    String => |v| FilterValue::String(v),
    &str => |v| FilterValue::String(v.to_string()),
    &String => |v| FilterValue::String(v.clone()),
    f64 => |v| FilterValue::Number(v),
    i64 => |v| FilterValue::Integer(v),
    i32 => |v| FilterValue::Integer(v as i64),
    u32 => |v| FilterValue::Integer(v as i64),
    bool => |v| FilterValue::Boolean(v),
    DateTime<Utc> => |v| FilterValue::DateTime(v),
    uuid::Uuid => |v| FilterValue::Guid(v),
}

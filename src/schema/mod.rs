//! Runtime schema objects for Graph payloads
//!
//! A `Schema` both documents and validates the shape of a JSON value at runtime.
//! Schemas are assembled with a builder:
//!
//! ```
//! use msgraph_client::schema::{Schema, EdmType};
//!
//! let identity = Schema::object([
//!     ("displayName", Schema::string().nullable()),
//!     ("id", Schema::string().nullable()),
//! ])
//! .partial()
//! .passthrough();
//!
//! let label = Schema::edm(EdmType::DateTimeOffset).describe("Last change");
//! # let _ = (identity, label);
//! ```
//!
//! Cyclic type graphs are expressed with [`Schema::lazy`], a named reference that
//! is resolved through a [`Registry`] only while a value is being validated.

pub mod csdl;
pub mod edm;
pub mod registry;
mod validate;

pub use edm::EdmType;
pub use registry::{builtin, Registry};
pub use validate::{Issue, IssueCode, PathSegment, ValidationError};

use serde_json::Value;

/// What to do with object keys that the schema does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Drop undeclared keys from the parsed output
    #[default]
    Strip,
    /// Keep undeclared keys untouched
    Passthrough,
    /// Report undeclared keys as an issue
    Strict,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Any,
    String,
    Integer,
    Number,
    Boolean,
    Edm(EdmType),
    Object(ObjectShape),
    Array(Box<Schema>),
    Enum(EnumShape),
    Union(Vec<Schema>),
    /// Deferred reference to a registry entry
    Lazy(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    /// Declared fields in declaration order
    pub fields: Vec<(String, Schema)>,
    pub unknown_keys: UnknownKeys,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumShape {
    pub values: Vec<String>,
    /// Evolvable enums accept values the schema does not list yet
    pub evolvable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub nullable: bool,
    pub optional: bool,
    pub description: Option<String>,
}

impl Schema {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
            optional: false,
            description: None,
        }
    }

    pub fn any() -> Self {
        Self::of(SchemaKind::Any)
    }

    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    pub fn number() -> Self {
        Self::of(SchemaKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    pub fn edm(edm_type: EdmType) -> Self {
        Self::of(SchemaKind::Edm(edm_type))
    }

    /// Object with the given fields, all required until `partial()` is applied
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self::of(SchemaKind::Object(ObjectShape {
            fields: fields.into_iter().map(|(k, s)| (k.into(), s)).collect(),
            unknown_keys: UnknownKeys::Strip,
        }))
    }

    pub fn array(items: Schema) -> Self {
        Self::of(SchemaKind::Array(Box::new(items)))
    }

    /// Closed (`evolvable == false`) or evolvable string enumeration
    pub fn enumeration<I, V>(values: I, evolvable: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::of(SchemaKind::Enum(EnumShape {
            values: values.into_iter().map(Into::into).collect(),
            evolvable,
        }))
    }

    pub fn union(variants: Vec<Schema>) -> Self {
        Self::of(SchemaKind::Union(variants))
    }

    /// Reference to a named schema, resolved at validation time
    pub fn lazy(name: impl Into<String>) -> Self {
        Self::of(SchemaKind::Lazy(name.into()))
    }

    /// The OData collection envelope wrapping items of the named type
    pub fn collection_of(name: impl Into<String>) -> Self {
        Self::object([
            ("@odata.context", Schema::string().optional()),
            ("@odata.count", Schema::integer().optional()),
            ("@odata.nextLink", Schema::string().nullable().optional()),
            ("value", Schema::array(Schema::lazy(name))),
        ])
        .passthrough()
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks every declared field optional. No effect on non-object schemas.
    pub fn partial(mut self) -> Self {
        if let SchemaKind::Object(shape) = &mut self.kind {
            for (_, field) in shape.fields.iter_mut() {
                field.optional = true;
            }
        }
        self
    }

    /// Marks the named fields required again
    pub fn required(mut self, names: &[&str]) -> Self {
        if let SchemaKind::Object(shape) = &mut self.kind {
            for (name, field) in shape.fields.iter_mut() {
                if names.contains(&name.as_str()) {
                    field.optional = false;
                }
            }
        }
        self
    }

    pub fn passthrough(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Passthrough)
    }

    pub fn strict(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Strict)
    }

    pub fn strip(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Strip)
    }

    fn with_unknown_keys(mut self, mode: UnknownKeys) -> Self {
        if let SchemaKind::Object(shape) = &mut self.kind {
            shape.unknown_keys = mode;
        }
        self
    }

    /// Adds fields to an object schema; a field with an existing name replaces it
    /// in place.
    pub fn extend<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        if let SchemaKind::Object(shape) = &mut self.kind {
            for (name, schema) in fields {
                let name = name.into();
                match shape.fields.iter_mut().find(|(n, _)| *n == name) {
                    Some(slot) => slot.1 = schema,
                    None => shape.fields.push((name, schema)),
                }
            }
        }
        self
    }

    /// Adds every field of another object schema, as [`Schema::extend`] does.
    ///
    /// The receiver keeps its own unknown-key mode; a non-object `other`
    /// leaves it unchanged.
    pub fn merge(self, other: Schema) -> Self {
        match other.kind {
            SchemaKind::Object(shape) => self.extend(shape.fields),
            _ => self,
        }
    }

    /// Looks up a declared field of an object schema
    pub fn field(&self, name: &str) -> Option<&Schema> {
        match &self.kind {
            SchemaKind::Object(shape) => shape
                .fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, s)| s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectShape> {
        match &self.kind {
            SchemaKind::Object(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumShape> {
        match &self.kind {
            SchemaKind::Enum(shape) => Some(shape),
            _ => None,
        }
    }

    /// Validates `value` and returns the parsed output.
    ///
    /// Every issue found is reported, not just the first one.
    pub fn validate(&self, value: &Value, registry: &Registry) -> Result<Value, ValidationError> {
        validate::run(self, value, registry)
    }

    /// Short human readable type name, used by the CLI and in issue messages
    pub fn type_name(&self) -> String {
        let base = match &self.kind {
            SchemaKind::Any => "any".to_string(),
            SchemaKind::String => "string".to_string(),
            SchemaKind::Integer => "integer".to_string(),
            SchemaKind::Number => "number".to_string(),
            SchemaKind::Boolean => "boolean".to_string(),
            SchemaKind::Edm(edm) => edm.as_str().to_string(),
            SchemaKind::Object(_) => "object".to_string(),
            SchemaKind::Array(items) => format!("{}[]", items.type_name()),
            SchemaKind::Enum(shape) if shape.evolvable => "enum (evolvable)".to_string(),
            SchemaKind::Enum(_) => "enum".to_string(),
            SchemaKind::Union(variants) => variants
                .iter()
                .map(|v| v.type_name())
                .collect::<Vec<_>>()
                .join(" | "),
            SchemaKind::Lazy(name) => name.clone(),
        };
        if self.nullable {
            format!("{} | null", base)
        } else {
            base
        }
    }
}

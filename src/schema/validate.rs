//! Validation engine for [`Schema`]

use super::edm::json_kind;
use super::{Registry, Schema, SchemaKind, UnknownKeys};
use serde_json::{Map, Value};
use std::fmt;

/// Object and array levels a value may nest before it is rejected as too deep.
/// Named references and unions do not count toward it.
const MAX_DEPTH: usize = 256;

/// Named references followed in a row without entering a nested value
const MAX_REFERENCE_CHAIN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    InvalidType,
    Required,
    InvalidEnumValue,
    UnrecognizedKeys,
    InvalidUnion,
    InvalidFormat,
    UnresolvedReference,
    TooDeep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    /// Dotted rendering of the path, `$` for the root
    pub fn path_string(&self) -> String {
        let mut rendered = String::from("$");
        for segment in &self.path {
            match segment {
                PathSegment::Key(key) => {
                    rendered.push('.');
                    rendered.push_str(key);
                }
                PathSegment::Index(index) => {
                    rendered.push_str(&format!("[{}]", index));
                }
            }
        }
        rendered
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} validation issue(s): {}", .issues.len(), summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .take(3)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub(super) fn run(schema: &Schema, value: &Value, registry: &Registry) -> Result<Value, ValidationError> {
    let mut validator = Validator {
        registry,
        issues: Vec::new(),
        path: Vec::new(),
        depth: 0,
        chain: 0,
    };
    let parsed = validator.check(schema, value);
    if validator.issues.is_empty() {
        Ok(parsed.unwrap_or(Value::Null))
    } else {
        Err(ValidationError {
            issues: validator.issues,
        })
    }
}

struct Validator<'r> {
    registry: &'r Registry,
    issues: Vec<Issue>,
    path: Vec<PathSegment>,
    /// Object/array levels entered so far
    depth: usize,
    /// References resolved since the last level was entered
    chain: usize,
}

impl<'r> Validator<'r> {
    fn report(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues.push(Issue {
            path: self.path.clone(),
            code,
            message: message.into(),
        });
    }

    /// Checks an array element or object field, one level below the current value
    fn descend(&mut self, schema: &Schema, value: &Value) -> Option<Value> {
        if self.depth >= MAX_DEPTH {
            self.report(IssueCode::TooDeep, format!("nesting exceeds {} levels", MAX_DEPTH));
            return None;
        }
        let chain = std::mem::take(&mut self.chain);
        self.depth += 1;
        let parsed = self.check(schema, value);
        self.depth -= 1;
        self.chain = chain;
        parsed
    }

    fn check(&mut self, schema: &Schema, value: &Value) -> Option<Value> {
        if value.is_null() {
            if schema.nullable || matches!(schema.kind, SchemaKind::Any) {
                return Some(Value::Null);
            }
            // A lazy target may itself be nullable
            if !matches!(schema.kind, SchemaKind::Lazy(_) | SchemaKind::Union(_)) {
                self.report(
                    IssueCode::InvalidType,
                    format!("expected {}, received null", schema.type_name()),
                );
                return None;
            }
        }

        match &schema.kind {
            SchemaKind::Any => Some(value.clone()),
            SchemaKind::String => self.expect(value, value.is_string(), "string"),
            SchemaKind::Boolean => self.expect(value, value.is_boolean(), "boolean"),
            SchemaKind::Number => self.expect(value, value.is_number(), "number"),
            SchemaKind::Integer => {
                let ok = value.as_i64().is_some() || value.as_u64().is_some();
                self.expect(value, ok, "integer")
            }
            SchemaKind::Edm(edm) => match edm.check(value) {
                Ok(()) => Some(value.clone()),
                Err(message) => {
                    let code = if value.is_string() && edm.is_string_encoded() {
                        IssueCode::InvalidFormat
                    } else {
                        IssueCode::InvalidType
                    };
                    self.report(code, message);
                    None
                }
            },
            SchemaKind::Enum(shape) => {
                let Some(s) = value.as_str() else {
                    self.report(
                        IssueCode::InvalidType,
                        format!("expected string enum, received {}", json_kind(value)),
                    );
                    return None;
                };
                if shape.evolvable || shape.values.iter().any(|v| v == s) {
                    Some(value.clone())
                } else {
                    self.report(
                        IssueCode::InvalidEnumValue,
                        format!("'{}' is not one of [{}]", s, shape.values.join(", ")),
                    );
                    None
                }
            }
            SchemaKind::Array(items) => {
                let Some(elements) = value.as_array() else {
                    self.report(
                        IssueCode::InvalidType,
                        format!("expected array, received {}", json_kind(value)),
                    );
                    return None;
                };
                let mut parsed = Vec::with_capacity(elements.len());
                for (index, element) in elements.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    if let Some(item) = self.descend(items, element) {
                        parsed.push(item);
                    }
                    self.path.pop();
                }
                Some(Value::Array(parsed))
            }
            SchemaKind::Object(shape) => {
                let Some(object) = value.as_object() else {
                    self.report(
                        IssueCode::InvalidType,
                        format!("expected object, received {}", json_kind(value)),
                    );
                    return None;
                };
                let mut parsed = Map::new();
                for (name, field) in &shape.fields {
                    match object.get(name) {
                        Some(field_value) => {
                            self.path.push(PathSegment::Key(name.clone()));
                            if let Some(item) = self.descend(field, field_value) {
                                parsed.insert(name.clone(), item);
                            }
                            self.path.pop();
                        }
                        None if !field.optional => {
                            self.path.push(PathSegment::Key(name.clone()));
                            self.report(IssueCode::Required, "required field is missing");
                            self.path.pop();
                        }
                        None => {}
                    }
                }

                let unknown: Vec<&String> = object
                    .keys()
                    .filter(|k| !shape.fields.iter().any(|(name, _)| name == *k))
                    .collect();
                match shape.unknown_keys {
                    UnknownKeys::Passthrough => {
                        for key in unknown {
                            parsed.insert(key.clone(), object[key].clone());
                        }
                    }
                    UnknownKeys::Strict if !unknown.is_empty() => {
                        let names: Vec<&str> = unknown.iter().map(|k| k.as_str()).collect();
                        self.report(
                            IssueCode::UnrecognizedKeys,
                            format!("unrecognized key(s): {}", names.join(", ")),
                        );
                    }
                    _ => {}
                }
                Some(Value::Object(parsed))
            }
            SchemaKind::Union(variants) => {
                if value.is_null() && schema.nullable {
                    return Some(Value::Null);
                }
                for variant in variants {
                    let mut trial = Validator {
                        registry: self.registry,
                        issues: Vec::new(),
                        path: self.path.clone(),
                        depth: self.depth,
                        chain: self.chain,
                    };
                    let parsed = trial.check(variant, value);
                    if trial.issues.is_empty() {
                        return parsed;
                    }
                }
                self.report(
                    IssueCode::InvalidUnion,
                    format!("value matches none of the {} union variants", variants.len()),
                );
                None
            }
            SchemaKind::Lazy(name) => {
                let Some(target) = self.registry.get(name) else {
                    self.report(
                        IssueCode::UnresolvedReference,
                        format!("schema '{}' is not registered", name),
                    );
                    return None;
                };
                if value.is_null() && !target.nullable {
                    self.report(
                        IssueCode::InvalidType,
                        format!("expected {}, received null", name),
                    );
                    return None;
                }
                if self.chain >= MAX_REFERENCE_CHAIN {
                    self.report(
                        IssueCode::TooDeep,
                        format!("reference '{}' does not resolve to a concrete schema", name),
                    );
                    return None;
                }
                self.chain += 1;
                let parsed = self.check(target, value);
                self.chain -= 1;
                parsed
            }
        }
    }

    fn expect(&mut self, value: &Value, ok: bool, expected: &str) -> Option<Value> {
        if ok {
            Some(value.clone())
        } else {
            self.report(
                IssueCode::InvalidType,
                format!("expected {}, received {}", expected, json_kind(value)),
            );
            None
        }
    }
}

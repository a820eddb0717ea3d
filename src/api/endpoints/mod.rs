//! Endpoint descriptors
//!
//! Every Graph operation the client knows about is a static [`Endpoint`]
//! record: method, URL template, declared parameters, body schemas and error
//! responses. The generic client in [`crate::api::client`] consumes them.

pub mod params;
mod table;

use crate::api::error::GraphError;
use crate::schema::{EdmType, Schema};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub use table::ENDPOINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("Unsupported HTTP method '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
        })
    }
}

/// Validator attached to a parameter. Values always arrive as strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterKind {
    String,
    Integer { min: i64 },
    Boolean,
    /// Comma separated list, e.g. `$select=id,displayName`
    CsvList,
    /// Closed set of accepted values
    OneOf(&'static [&'static str]),
    Edm(EdmType),
}

impl ParameterKind {
    pub fn check(&self, raw: &str) -> Result<(), String> {
        match self {
            ParameterKind::String => Ok(()),
            ParameterKind::Integer { min } => match raw.parse::<i64>() {
                Ok(n) if n >= *min => Ok(()),
                Ok(n) => Err(format!("{} is below the minimum of {}", n, min)),
                Err(_) => Err(format!("'{}' is not an integer", raw)),
            },
            ParameterKind::Boolean => match raw {
                "true" | "false" => Ok(()),
                _ => Err(format!("'{}' is not 'true' or 'false'", raw)),
            },
            ParameterKind::CsvList => {
                if raw.split(',').any(|item| item.trim().is_empty()) {
                    Err(format!("'{}' contains an empty list item", raw))
                } else {
                    Ok(())
                }
            }
            ParameterKind::OneOf(values) => {
                if values.contains(&raw) {
                    Ok(())
                } else {
                    Err(format!("'{}' is not one of {}", raw, values.join(", ")))
                }
            }
            ParameterKind::Edm(edm) => edm.check(&Value::String(raw.to_string())),
        }
    }

    /// Runtime schema equivalent, used when describing endpoints
    pub fn schema(&self) -> Schema {
        match self {
            ParameterKind::String => Schema::string(),
            ParameterKind::Integer { .. } => Schema::integer(),
            ParameterKind::Boolean => Schema::boolean(),
            ParameterKind::CsvList => Schema::array(Schema::string()),
            ParameterKind::OneOf(values) => Schema::enumeration(values.iter().copied(), false),
            ParameterKind::Edm(edm) => Schema::edm(*edm),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    pub name: &'static str,
    pub location: ParameterLocation,
    pub kind: ParameterKind,
    pub required: bool,
    pub description: &'static str,
}

impl Parameter {
    /// Header names compare case-insensitively, everything else exactly
    pub fn matches(&self, name: &str, location: ParameterLocation) -> bool {
        self.location == location
            && match location {
                ParameterLocation::Header => self.name.eq_ignore_ascii_case(name),
                _ => self.name == name,
            }
    }
}

/// Shape of a successful response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody {
    /// 204 No Content
    Empty,
    /// A single instance of the named type
    Entity(&'static str),
    /// A collection envelope around the named type
    Collection(&'static str),
}

/// A declared error response. Status is either exact (`"404"`) or a class
/// (`"4XX"`); the body is always the OData error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub description: &'static str,
}

impl ErrorResponse {
    pub fn covers(&self, status: u16) -> bool {
        match self.status.strip_suffix("XX") {
            Some(class) => class == (status / 100).to_string(),
            None => self.status == status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub alias: &'static str,
    pub method: HttpMethod,
    /// URL template relative to the service root, e.g. `/users/{user-id}`
    pub path: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
    /// Registry name of the request body schema
    pub request: Option<&'static str>,
    pub response: ResponseBody,
    pub errors: &'static [ErrorResponse],
}

impl Endpoint {
    pub fn parameter(&self, name: &str, location: ParameterLocation) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.matches(name, location))
    }

    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.location == location)
    }

    /// Names of the `{..}` placeholders in the path template, in order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// Fills the path template, percent-encoding every value
    pub fn render_path(&self, path_params: &HashMap<String, String>) -> Result<String, GraphError> {
        let mut rendered = String::with_capacity(self.path.len());
        for segment in self.path.split('/').skip(1) {
            rendered.push('/');
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = path_params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| GraphError::MissingPathParameter {
                            endpoint: self.alias.to_string(),
                            name: name.to_string(),
                        })?;
                    rendered.push_str(&urlencoding::encode(value));
                }
                None => rendered.push_str(segment),
            }
        }
        Ok(rendered)
    }

    /// True when `path` (no query string) is an instance of this template
    pub fn matches_route(&self, method: HttpMethod, path: &str) -> bool {
        if self.method != method {
            return false;
        }
        let template: Vec<&str> = self.path.trim_matches('/').split('/').collect();
        let actual: Vec<&str> = path.trim_matches('/').split('/').collect();
        template.len() == actual.len()
            && template.iter().zip(actual.iter()).all(|(t, a)| {
                if t.starts_with('{') && t.ends_with('}') {
                    !a.is_empty()
                } else {
                    t == a
                }
            })
    }

    pub fn request_schema(&self) -> Option<Schema> {
        self.request.map(Schema::lazy)
    }

    pub fn response_schema(&self) -> Option<Schema> {
        match self.response {
            ResponseBody::Empty => None,
            ResponseBody::Entity(name) => Some(Schema::lazy(name)),
            ResponseBody::Collection(name) => Some(Schema::collection_of(name)),
        }
    }

    pub fn declares_error(&self, status: u16) -> bool {
        self.errors.iter().any(|e| e.covers(status))
    }
}

/// The full endpoint table
pub fn all() -> &'static [Endpoint] {
    ENDPOINTS
}

pub fn find(alias: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.alias == alias)
}

/// Finds the endpoint serving a concrete request path like `/users/42`
pub fn find_by_route(method: HttpMethod, path: &str) -> Option<&'static Endpoint> {
    let path = path.split('?').next().unwrap_or(path);
    ENDPOINTS.iter().find(|e| e.matches_route(method, path))
}

/// Closest alias to a misspelled one
pub fn suggest(alias: &str) -> Option<&'static str> {
    let matcher = SkimMatcherV2::default().ignore_case();
    ENDPOINTS
        .iter()
        .filter_map(|e| matcher.fuzzy_match(e.alias, alias).map(|score| (e.alias, score)))
        // Equal scores prefer the shorter alias
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.len().cmp(&a.0.len())))
        .map(|(alias, _)| alias)
}

/// Looks up an endpoint, attaching a suggestion to the error
pub fn resolve(alias: &str) -> Result<&'static Endpoint, GraphError> {
    find(alias).ok_or_else(|| GraphError::UnknownEndpoint {
        alias: alias.to_string(),
        suggestion: suggest(alias).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let endpoint = find("listTermChildren").unwrap();
        assert_eq!(endpoint.placeholders(), vec!["site-id", "set-id", "term-id"]);
    }

    #[test]
    fn test_render_path_encodes_values() {
        let endpoint = find("getUser").unwrap();
        let mut params = HashMap::new();
        params.insert("user-id".to_string(), "adele@contoso.com".to_string());
        assert_eq!(endpoint.render_path(&params).unwrap(), "/users/adele%40contoso.com");

        params.insert("user-id".to_string(), "a/b c".to_string());
        assert_eq!(endpoint.render_path(&params).unwrap(), "/users/a%2Fb%20c");
    }

    #[test]
    fn test_render_path_missing_parameter() {
        let endpoint = find("getUser").unwrap();
        let err = endpoint.render_path(&HashMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::MissingPathParameter { ref name, .. } if name == "user-id"));
    }

    #[test]
    fn test_find_by_route() {
        assert_eq!(find_by_route(HttpMethod::Get, "/users").unwrap().alias, "listUsers");
        assert_eq!(find_by_route(HttpMethod::Get, "/users/42").unwrap().alias, "getUser");
        assert_eq!(find_by_route(HttpMethod::Patch, "/users/42").unwrap().alias, "updateUser");
        assert_eq!(
            find_by_route(HttpMethod::Get, "/me?$select=id").unwrap().alias,
            "getMe"
        );
        assert!(find_by_route(HttpMethod::Get, "/nowhere").is_none());
    }

    #[test]
    fn test_suggest() {
        assert_eq!(suggest("listuser"), Some("listUsers"));
        assert!(matches!(
            resolve("getteam"),
            Err(GraphError::UnknownEndpoint { suggestion: Some(_), .. })
        ));
    }

    #[test]
    fn test_parameter_kinds() {
        assert!(ParameterKind::Integer { min: 0 }.check("10").is_ok());
        assert!(ParameterKind::Integer { min: 0 }.check("-1").is_err());
        assert!(ParameterKind::Integer { min: 0 }.check("ten").is_err());
        assert!(ParameterKind::Boolean.check("true").is_ok());
        assert!(ParameterKind::Boolean.check("yes").is_err());
        assert!(ParameterKind::CsvList.check("id,displayName").is_ok());
        assert!(ParameterKind::CsvList.check("id,,mail").is_err());
        assert!(ParameterKind::OneOf(&["eventual"]).check("eventual").is_ok());
        assert!(ParameterKind::Edm(EdmType::DateTimeOffset).check("2024-01-01T00:00:00Z").is_ok());
        assert!(ParameterKind::Edm(EdmType::DateTimeOffset).check("tomorrow").is_err());
    }

    #[test]
    fn test_error_response_classes() {
        let class = ErrorResponse { status: "4XX", description: "" };
        assert!(class.covers(404));
        assert!(!class.covers(500));
        let exact = ErrorResponse { status: "412", description: "" };
        assert!(exact.covers(412));
        assert!(!exact.covers(404));
    }

    #[test]
    fn test_header_parameter_lookup_ignores_case() {
        let endpoint = find("listUsers").unwrap();
        assert!(endpoint.parameter("consistencylevel", ParameterLocation::Header).is_some());
        assert!(endpoint.parameter("$top", ParameterLocation::Header).is_none());
    }
}

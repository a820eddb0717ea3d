//! OData error envelope and client errors
//!
//! Every Graph error response carries the same body, `{ "error": mainError }`.
//! The client decodes it into [`ODataError`] and surfaces it through
//! [`GraphError::OData`].

use crate::api::endpoints::ParameterLocation;
use crate::schema::{Schema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use thiserror::Error;

/// Registry name of the error envelope schema
pub const ODATA_ERROR_SCHEMA: &str = "microsoft.graph.odataError";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    pub error: MainError,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainError {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    #[serde(rename = "innerError")]
    pub inner_error: Option<InnerError>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
}

/// Diagnostics attached by the service. Open ended, unknown keys are kept.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(rename = "request-id")]
    pub request_id: Option<String>,
    #[serde(rename = "client-request-id")]
    pub client_request_id: Option<String>,
    pub date: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl ODataError {
    /// Runtime schema of the envelope
    pub fn schema() -> Schema {
        let details = Schema::object([
            ("code", Schema::string()),
            ("message", Schema::string()),
            ("target", Schema::string().nullable().optional()),
        ])
        .passthrough();

        let inner_error = Schema::object([
            ("request-id", Schema::string()),
            ("client-request-id", Schema::string()),
            ("date", Schema::string()),
        ])
        .partial()
        .passthrough();

        let main_error = Schema::object([
            ("code", Schema::string()),
            ("message", Schema::string()),
            ("target", Schema::string().nullable().optional()),
            ("details", Schema::array(details).optional()),
            ("innerError", inner_error.nullable().optional()),
        ])
        .passthrough();

        Schema::object([("error", main_error)])
            .passthrough()
            .describe("OData error envelope returned with every non-2xx response")
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// `request-id` from the inner error, useful when reporting to Microsoft
    pub fn request_id(&self) -> Option<&str> {
        self.error
            .inner_error
            .as_ref()
            .and_then(|inner| inner.request_id.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Unknown endpoint '{alias}'{}", did_you_mean(.suggestion))]
    UnknownEndpoint {
        alias: String,
        suggestion: Option<String>,
    },

    #[error("Endpoint '{endpoint}' requires path parameter '{name}'")]
    MissingPathParameter { endpoint: String, name: String },

    #[error("Endpoint '{endpoint}' requires {location} parameter '{name}'")]
    MissingParameter {
        endpoint: String,
        name: String,
        location: ParameterLocation,
    },

    #[error("Endpoint '{endpoint}' does not declare {location} parameter '{name}'")]
    UndeclaredParameter {
        endpoint: String,
        name: String,
        location: ParameterLocation,
    },

    #[error("Invalid value for parameter '{name}' of '{endpoint}': {reason}")]
    InvalidParameter {
        endpoint: String,
        name: String,
        reason: String,
    },

    #[error("Endpoint '{endpoint}' requires a request body")]
    MissingBody { endpoint: String },

    #[error("Endpoint '{endpoint}' does not accept a request body")]
    UnexpectedBody { endpoint: String },

    #[error("Request body for '{endpoint}' is invalid: {source}")]
    InvalidRequestBody {
        endpoint: String,
        #[source]
        source: ValidationError,
    },

    #[error("Response of '{endpoint}' (status {status}) does not match its schema: {source}")]
    InvalidResponse {
        endpoint: String,
        status: u16,
        #[source]
        source: ValidationError,
    },

    #[error("Graph returned {status}: {}: {}", .error.error.code, .error.error.message)]
    OData { status: u16, error: ODataError },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

impl GraphError {
    /// HTTP status of errors that came back from the service
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::OData { status, .. }
            | GraphError::Http { status, .. }
            | GraphError::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded OData error, if the service sent one
    pub fn odata_error(&self) -> Option<&ODataError> {
        match self {
            GraphError::OData { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True when the request was rejected before anything was sent
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownEndpoint { .. }
                | GraphError::MissingPathParameter { .. }
                | GraphError::MissingParameter { .. }
                | GraphError::UndeclaredParameter { .. }
                | GraphError::InvalidParameter { .. }
                | GraphError::MissingBody { .. }
                | GraphError::UnexpectedBody { .. }
                | GraphError::InvalidRequestBody { .. }
        )
    }
}

impl From<reqwest::Error> for GraphError {
    fn from(err: reqwest::Error) -> Self {
        GraphError::Transport(err.to_string())
    }
}

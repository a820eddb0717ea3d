//! Microsoft Graph v1.0 API layer
//!
//! The endpoint table describes every supported operation. `GraphClient`
//! turns a table entry plus caller parameters into a checked HTTP request and
//! validates what comes back against the schema registry.

pub mod client;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod query;
pub mod transport;

pub use client::{GraphClient, RequestParams};
pub use endpoints::{Endpoint, HttpMethod, Parameter, ParameterKind, ParameterLocation, ResponseBody};
pub use error::{GraphError, ODataError};
pub use logging::{ApiLogger, LogLevel, MonitoringConfig, OperationContext, OperationMetrics};
pub use query::{Filter, FilterValue, ODataCollection, ODataQuery, OrderBy, QueryBuilder};
pub use transport::{HttpRequest, HttpResponse, MockTransport, ReqwestTransport, Transport, TransportOptions};

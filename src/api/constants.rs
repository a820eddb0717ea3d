//! API constants for the Microsoft Graph REST API

/// Graph API version
pub const API_VERSION: &str = "v1.0";

/// Graph service host
pub const GRAPH_HOST: &str = "https://graph.microsoft.com";

/// Default service root
pub fn default_base_url() -> String {
    format!("{}/{}", GRAPH_HOST, API_VERSION)
}

/// Default user agent sent with every request
pub const USER_AGENT: &str = concat!("msgraph-client/", env!("CARGO_PKG_VERSION"));

/// Standard headers for Graph requests
pub mod headers {
    pub const ACCEPT: &str = "Accept";

    pub const AUTHORIZATION: &str = "Authorization";

    pub const CONTENT_TYPE: &str = "Content-Type";

    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Correlation header echoed back by the service in `innerError`
    pub const CLIENT_REQUEST_ID: &str = "client-request-id";

    /// Service side request identifier
    pub const REQUEST_ID: &str = "request-id";

    /// Sent with 429 and 503 responses
    pub const RETRY_AFTER: &str = "retry-after";
}

/// Join a service root and an endpoint path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

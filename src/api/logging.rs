//! Structured request logging with correlation tracking
//!
//! Every request gets a correlation ID, sent as `client-request-id`, which the
//! service echoes back inside `innerError` on failures. Each log line is one
//! JSON object tagged with an `event`, so a run can be grepped out of the log
//! file and parsed.

use super::constants::headers;
use super::transport::{HttpRequest, HttpResponse};
use log::{Level, log};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::time::{Duration, Instant};

/// Header names whose values never reach the log
const SENSITIVE_HEADERS: [&str; 3] = ["authorization", "cookie", "set-cookie"];

/// Monitoring and logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Tag log lines with the correlation ID. The header is sent regardless.
    pub correlation_ids: bool,
    pub request_logging: bool,
    pub performance_metrics: bool,
    pub log_level: LogLevel,
    /// Requests slower than this are reported as warnings
    pub slow_request_ms: u64,
}

/// Most verbose level the request logger emits. Ordered from quietest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_log_level(self) -> Level {
        match self {
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Unknown log level '{}'", other)),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            correlation_ids: true,
            request_logging: true,
            performance_metrics: true,
            log_level: LogLevel::Info,
            slow_request_ms: 5000,
        }
    }
}

impl MonitoringConfig {
    /// Everything off, used by tests and quiet callers
    pub fn disabled() -> Self {
        Self {
            correlation_ids: false,
            request_logging: false,
            performance_metrics: false,
            log_level: LogLevel::Error,
            // Largest value a TOML integer holds
            slow_request_ms: i64::MAX as u64,
        }
    }
}

/// Kinds of log line the client emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Started,
    Request,
    Response,
    Completed,
    Failed,
    Slow,
}

impl Event {
    fn name(self) -> &'static str {
        match self {
            Event::Started => "operation_started",
            Event::Request => "http_request",
            Event::Response => "http_response",
            Event::Completed => "operation_completed",
            Event::Failed => "operation_failed",
            Event::Slow => "slow_operation",
        }
    }
}

/// One call of one endpoint, from parameter checks to the parsed result
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Value sent as `client-request-id`
    pub correlation_id: String,
    /// Endpoint alias, e.g. `listUsers`
    pub endpoint: String,
    pub method: String,
    /// `request-id` reported by the service
    pub request_id: Option<String>,
    /// Raw `Retry-After` of a throttled response. Reported, never acted on.
    pub retry_after: Option<String>,
    pub start_time: Instant,
}

impl OperationContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn create_metrics(&self, success: bool, status_code: Option<u16>, error_message: Option<String>) -> OperationMetrics {
        OperationMetrics {
            duration: self.elapsed(),
            success,
            status_code,
            error_message,
        }
    }
}

/// Outcome of a single request
#[derive(Debug, Clone)]
pub struct OperationMetrics {
    pub duration: Duration,
    pub success: bool,
    pub status_code: Option<u16>,
    pub error_message: Option<String>,
}

impl OperationMetrics {
    pub fn is_slow(&self, threshold: Duration) -> bool {
        self.duration > threshold
    }
}

/// Structured logger for Graph operations
#[derive(Debug, Clone)]
pub struct ApiLogger {
    config: MonitoringConfig,
}

impl ApiLogger {
    pub fn new(config: MonitoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MonitoringConfig {
        &self.config
    }

    /// Fresh correlation ID for the next request
    pub fn new_correlation_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn start_operation(&self, endpoint: &str, method: &str, correlation_id: &str) -> OperationContext {
        let context = OperationContext {
            correlation_id: correlation_id.to_string(),
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            request_id: None,
            retry_after: None,
            start_time: Instant::now(),
        };
        if self.config.request_logging {
            self.emit(LogLevel::Info, Event::Started, &context, Map::new());
        }
        context
    }

    pub fn log_request(&self, context: &OperationContext, request: &HttpRequest) {
        if !self.config.request_logging {
            return;
        }
        let mut fields = Map::new();
        fields.insert("url".into(), json!(request.url));
        fields.insert("headers".into(), sanitize_headers(request.headers.iter().map(|(k, v)| (k, v))));
        fields.insert("has_body".into(), json!(request.body.is_some()));
        self.emit(LogLevel::Debug, Event::Request, context, fields);
    }

    /// Records the service diagnostics of a response on the context and logs it
    pub fn log_response(&self, context: &mut OperationContext, response: &HttpResponse) {
        context.request_id = response.headers.get(headers::REQUEST_ID).cloned();
        context.retry_after = response.headers.get(headers::RETRY_AFTER).cloned();

        if !self.config.request_logging {
            return;
        }
        let mut fields = Map::new();
        fields.insert("status_code".into(), json!(response.status));
        fields.insert("elapsed_ms".into(), json!(context.elapsed().as_millis()));
        fields.insert("headers".into(), sanitize_headers(response.headers.iter()));
        if let Some(retry_after) = &context.retry_after {
            fields.insert("retry_after".into(), json!(retry_after));
        }
        let level = if response.is_success() { LogLevel::Debug } else { LogLevel::Warn };
        self.emit(level, Event::Response, context, fields);
    }

    pub fn complete_operation(&self, context: &OperationContext, metrics: &OperationMetrics) {
        if !self.config.performance_metrics {
            return;
        }

        let threshold = Duration::from_millis(self.config.slow_request_ms);
        if metrics.is_slow(threshold) {
            let mut fields = Map::new();
            fields.insert("duration_ms".into(), json!(metrics.duration.as_millis()));
            fields.insert("threshold_ms".into(), json!(self.config.slow_request_ms));
            self.emit(LogLevel::Warn, Event::Slow, context, fields);
        }

        let mut fields = Map::new();
        fields.insert("duration_ms".into(), json!(metrics.duration.as_millis()));
        fields.insert("status_code".into(), json!(metrics.status_code));
        if let Some(request_id) = &context.request_id {
            fields.insert("request_id".into(), json!(request_id));
        }
        if metrics.success {
            self.emit(LogLevel::Info, Event::Completed, context, fields);
        } else {
            fields.insert("error".into(), json!(metrics.error_message));
            self.emit(LogLevel::Error, Event::Failed, context, fields);
        }
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level <= self.config.log_level
    }

    fn emit(&self, level: LogLevel, event: Event, context: &OperationContext, fields: Map<String, Value>) {
        if !self.should_log(level) {
            return;
        }
        let line = event_line(event, context, fields, self.config.correlation_ids);
        log!(level.as_log_level(), "{}", line);
    }
}

fn event_line(event: Event, context: &OperationContext, mut fields: Map<String, Value>, correlate: bool) -> Value {
    fields.insert("event".into(), json!(event.name()));
    fields.insert("endpoint".into(), json!(context.endpoint));
    fields.insert("method".into(), json!(context.method));
    if correlate && !context.correlation_id.is_empty() {
        fields.insert("correlation_id".into(), json!(context.correlation_id));
    }
    fields.insert("timestamp".into(), json!(chrono::Utc::now().to_rfc3339()));
    Value::Object(fields)
}

/// Header map as JSON with credentials replaced
pub fn sanitize_headers<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let map: Map<String, Value> = headers
        .into_iter()
        .map(|(name, value)| {
            let name = name.as_ref();
            let shown = if SENSITIVE_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
                "[REDACTED]"
            } else {
                value.as_ref()
            };
            (name.to_string(), Value::String(shown.to_string()))
        })
        .collect();
    Value::Object(map)
}

//! Generic Graph client driven by the endpoint table
//!
//! A request goes through the same steps for every endpoint: resolve the
//! descriptor, check the supplied parameters and body against it, send, then
//! either decode the OData error envelope or validate the success body against
//! the declared response schema.

use super::constants::{self, headers};
use super::endpoints::{self, Endpoint, ParameterLocation, ResponseBody};
use super::error::{GraphError, ODATA_ERROR_SCHEMA, ODataError};
use super::logging::{ApiLogger, MonitoringConfig};
use super::query::{ODataCollection, ODataQuery};
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportOptions};
use crate::models::{Channel, DriveItem, Event, Message, PlannerTask, PrintTask, Team, User};
use crate::models::term_store::Term;
use crate::schema::{self, Registry};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Parameters and body of a single call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pub path: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter, replacing an earlier value of the same name
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.query.push((name, value)),
        }
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Merge OData system query options
    pub fn odata(self, query: &ODataQuery) -> Self {
        query
            .to_query_params()
            .into_iter()
            .fold(self, |params, (name, value)| params.query(name, value))
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Place a `name=value` pair wherever the endpoint declares `name`.
    ///
    /// Used for loosely typed input such as command line arguments.
    pub fn bind(self, endpoint: &Endpoint, name: &str, value: impl Into<String>) -> Result<Self, GraphError> {
        let declared = endpoint
            .parameters
            .iter()
            .find(|p| p.matches(name, p.location))
            .ok_or_else(|| GraphError::UndeclaredParameter {
                endpoint: endpoint.alias.to_string(),
                name: name.to_string(),
                location: ParameterLocation::Query,
            })?;

        Ok(match declared.location {
            ParameterLocation::Path => self.path(declared.name, value),
            ParameterLocation::Query => self.query(declared.name, value),
            ParameterLocation::Header => self.header(declared.name, value),
        })
    }
}

/// Microsoft Graph client over a pluggable transport
#[derive(Clone)]
pub struct GraphClient {
    base_url: String,
    access_token: String,
    transport: Arc<dyn Transport>,
    registry: Arc<Registry>,
    api_logger: ApiLogger,
}

impl GraphClient {
    /// Client with a pooled reqwest transport and default settings
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self, GraphError> {
        let transport = ReqwestTransport::new(&TransportOptions::default())?;
        Ok(Self::with_transport(base_url, access_token, Arc::new(transport)))
    }

    pub fn with_transport(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            transport,
            registry: schema::builtin(),
            api_logger: ApiLogger::new(MonitoringConfig::default()),
        }
    }

    /// Validate against a different schema registry
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_monitoring(mut self, monitoring: MonitoringConfig) -> Self {
        self.api_logger = ApiLogger::new(monitoring);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Check parameters and body and build the outgoing request without sending it.
    ///
    /// `correlation_id` goes out as `client-request-id`; an empty one is left off.
    pub fn prepare(
        &self,
        alias: &str,
        params: &RequestParams,
        correlation_id: &str,
    ) -> Result<(&'static Endpoint, HttpRequest), GraphError> {
        let endpoint = endpoints::resolve(alias)?;

        check_parameters(endpoint, params)?;
        self.check_body(endpoint, params.body.as_ref())?;

        let mut url = constants::endpoint_url(&self.base_url, &endpoint.render_path(&params.path)?);
        if !params.query.is_empty() {
            let query: Vec<String> = params
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        let mut request_headers = vec![
            (headers::AUTHORIZATION.to_string(), format!("Bearer {}", self.access_token)),
            (headers::ACCEPT.to_string(), headers::CONTENT_TYPE_JSON.to_string()),
        ];
        if !correlation_id.is_empty() {
            request_headers.push((headers::CLIENT_REQUEST_ID.to_string(), correlation_id.to_string()));
        }
        if params.body.is_some() {
            request_headers.push((headers::CONTENT_TYPE.to_string(), headers::CONTENT_TYPE_JSON.to_string()));
        }
        request_headers.extend(params.headers.iter().cloned());

        let request = HttpRequest {
            method: endpoint.method,
            url,
            headers: request_headers,
            body: params.body.clone(),
        };
        Ok((endpoint, request))
    }

    /// Run a call and return the validated response body.
    ///
    /// Endpoints without a response body yield `Value::Null`.
    pub async fn request(&self, alias: &str, params: RequestParams) -> Result<Value, GraphError> {
        let correlation_id = self.api_logger.new_correlation_id();
        let (endpoint, request) = self.prepare(alias, &params, &correlation_id)?;

        let mut context = self
            .api_logger
            .start_operation(endpoint.alias, endpoint.method.as_str(), &correlation_id);
        self.api_logger.log_request(&context, &request);

        let result = match self.transport.send(request).await {
            Ok(response) => {
                self.api_logger.log_response(&mut context, &response);
                self.parse_response(endpoint, response)
            }
            Err(e) => Err(e),
        };

        let metrics = context.create_metrics(
            result.is_ok(),
            result.as_ref().err().and_then(|e| e.status()),
            result.as_ref().err().map(|e| e.to_string()),
        );
        self.api_logger.complete_operation(&context, &metrics);

        result
    }

    /// Run a call and deserialize the validated body into `T`
    pub async fn call<T: DeserializeOwned>(&self, alias: &str, params: RequestParams) -> Result<T, GraphError> {
        let value = self.request(alias, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    fn check_body(&self, endpoint: &Endpoint, body: Option<&Value>) -> Result<(), GraphError> {
        match (endpoint.request_schema(), body) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(GraphError::UnexpectedBody {
                endpoint: endpoint.alias.to_string(),
            }),
            (Some(_), None) => Err(GraphError::MissingBody {
                endpoint: endpoint.alias.to_string(),
            }),
            (Some(schema), Some(body)) => schema
                .validate(body, &self.registry)
                .map(|_| ())
                .map_err(|source| GraphError::InvalidRequestBody {
                    endpoint: endpoint.alias.to_string(),
                    source,
                }),
        }
    }

    /// Turn a raw response into the endpoint's result
    fn parse_response(&self, endpoint: &Endpoint, response: HttpResponse) -> Result<Value, GraphError> {
        let status = response.status;

        if !response.is_success() {
            if !endpoint.declares_error(status) {
                warn!("Endpoint {} returned undeclared status {}", endpoint.alias, status);
            }
            return Err(self.decode_error(status, response.body));
        }

        if status == 204 || response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        let body: Value = serde_json::from_str(&response.body)?;
        match endpoint.response_schema() {
            Some(schema) => schema
                .validate(&body, &self.registry)
                .map_err(|source| GraphError::InvalidResponse {
                    endpoint: endpoint.alias.to_string(),
                    status,
                    source,
                }),
            None => {
                debug!("Endpoint {} has no response schema, returning body as is", endpoint.alias);
                Ok(body)
            }
        }
    }

    /// OData envelope when the body is one, plain HTTP error otherwise
    fn decode_error(&self, status: u16, body: String) -> GraphError {
        let envelope = serde_json::from_str::<Value>(&body).ok().and_then(|json| {
            let valid = match self.registry.get(ODATA_ERROR_SCHEMA) {
                Some(schema) => schema.validate(&json, &self.registry).is_ok(),
                None => ODataError::schema().validate(&json, &self.registry).is_ok(),
            };
            if valid {
                serde_json::from_value::<ODataError>(json).ok()
            } else {
                None
            }
        });

        match envelope {
            Some(error) => GraphError::OData { status, error },
            None => GraphError::Http { status, body },
        }
    }
}

// Typed convenience wrappers
impl GraphClient {
    /// The signed-in user
    pub async fn me(&self, query: &ODataQuery) -> Result<User, GraphError> {
        self.call("getMe", RequestParams::new().odata(query)).await
    }

    pub async fn get_user(&self, user_id: &str, query: &ODataQuery) -> Result<User, GraphError> {
        self.call("getUser", RequestParams::new().path("user-id", user_id).odata(query))
            .await
    }

    /// `$search` and `$count` on directory objects need eventual consistency
    pub async fn list_users(&self, query: &ODataQuery) -> Result<ODataCollection<User>, GraphError> {
        let mut params = RequestParams::new().odata(query);
        if query.search.is_some() || query.count {
            params = params.header("ConsistencyLevel", "eventual");
        }
        self.call("listUsers", params).await
    }

    pub async fn list_messages(&self, query: &ODataQuery) -> Result<ODataCollection<Message>, GraphError> {
        self.call("listMessages", RequestParams::new().odata(query)).await
    }

    pub async fn list_events(&self, query: &ODataQuery) -> Result<ODataCollection<Event>, GraphError> {
        self.call("listEvents", RequestParams::new().odata(query)).await
    }

    pub async fn list_drive_children(
        &self,
        drive_id: &str,
        item_id: &str,
        query: &ODataQuery,
    ) -> Result<ODataCollection<DriveItem>, GraphError> {
        let params = RequestParams::new()
            .path("drive-id", drive_id)
            .path("driveItem-id", item_id)
            .odata(query);
        self.call("listDriveItemChildren", params).await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Team, GraphError> {
        self.call("getTeam", RequestParams::new().path("team-id", team_id)).await
    }

    pub async fn list_channels(&self, team_id: &str, query: &ODataQuery) -> Result<ODataCollection<Channel>, GraphError> {
        self.call("listChannels", RequestParams::new().path("team-id", team_id).odata(query))
            .await
    }

    pub async fn get_planner_task(&self, task_id: &str) -> Result<PlannerTask, GraphError> {
        self.call("getPlannerTask", RequestParams::new().path("plannerTask-id", task_id))
            .await
    }

    pub async fn list_term_children(
        &self,
        site_id: &str,
        set_id: &str,
        term_id: &str,
        query: &ODataQuery,
    ) -> Result<ODataCollection<Term>, GraphError> {
        let params = RequestParams::new()
            .path("site-id", site_id)
            .path("set-id", set_id)
            .path("term-id", term_id)
            .odata(query);
        self.call("listTermChildren", params).await
    }

    pub async fn get_print_task(&self, definition_id: &str, task_id: &str) -> Result<PrintTask, GraphError> {
        let params = RequestParams::new()
            .path("printTaskDefinition-id", definition_id)
            .path("printTask-id", task_id);
        self.call("getPrintTask", params).await
    }
}

fn check_parameters(endpoint: &Endpoint, params: &RequestParams) -> Result<(), GraphError> {
    let supplied = params
        .path
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str(), ParameterLocation::Path))
        .chain(params.query.iter().map(|(k, v)| (k.as_str(), v.as_str(), ParameterLocation::Query)))
        .chain(params.headers.iter().map(|(k, v)| (k.as_str(), v.as_str(), ParameterLocation::Header)));

    for (name, value, location) in supplied {
        let declared = endpoint
            .parameter(name, location)
            .ok_or_else(|| GraphError::UndeclaredParameter {
                endpoint: endpoint.alias.to_string(),
                name: name.to_string(),
                location,
            })?;
        declared
            .kind
            .check(value)
            .map_err(|reason| GraphError::InvalidParameter {
                endpoint: endpoint.alias.to_string(),
                name: declared.name.to_string(),
                reason,
            })?;
    }

    for declared in endpoint.parameters.iter().filter(|p| p.required) {
        let present = match declared.location {
            ParameterLocation::Path => params.path.contains_key(declared.name),
            ParameterLocation::Query => params.query.iter().any(|(k, _)| k == declared.name),
            ParameterLocation::Header => params
                .headers
                .iter()
                .any(|(k, _)| k.eq_ignore_ascii_case(declared.name)),
        };
        if !present {
            return Err(match declared.location {
                ParameterLocation::Path => GraphError::MissingPathParameter {
                    endpoint: endpoint.alias.to_string(),
                    name: declared.name.to_string(),
                },
                location => GraphError::MissingParameter {
                    endpoint: endpoint.alias.to_string(),
                    name: declared.name.to_string(),
                    location,
                },
            });
        }
    }

    Ok(())
}

//! Integration tests for the generic Graph client
//!
//! Every request goes through an in-memory transport, so these cover parameter
//! binding, body and response validation and OData error decoding end to end.

use msgraph_client::api::{
    Filter, GraphClient, GraphError, HttpMethod, MockTransport, MonitoringConfig, ODataQuery, QueryBuilder,
    RequestParams,
};
use msgraph_client::models::{Channel, ChannelMembershipType, NullableProperty, TeamVisibilityType};
use msgraph_client::models::print::PrintTaskProcessingState;
use serde_json::{Value, json};
use std::sync::Arc;

const BASE: &str = "https://graph.microsoft.com/v1.0";

fn client_with(mock: &Arc<MockTransport>) -> GraphClient {
    GraphClient::with_transport(BASE, "secret-token", mock.clone())
}

fn not_found() -> Value {
    json!({
        "error": {
            "code": "Request_ResourceNotFound",
            "message": "Resource 'nobody' does not exist or one of its queried reference-property objects are not present.",
            "innerError": {
                "date": "2024-05-01T10:00:00",
                "request-id": "0f1a2b3c-0000-4000-8000-000000000001",
                "client-request-id": "0f1a2b3c-0000-4000-8000-000000000002"
            }
        }
    })
}

/// Typed read sends the right request and decodes the model
#[tokio::test]
async fn test_get_user_round_trip() {
    let mock = Arc::new(MockTransport::new().respond_json(
        200,
        json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
            "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
            "displayName": "Adele Vance",
            "userPrincipalName": "AdeleV@contoso.com",
            "businessPhones": ["+1 425 555 0109"]
        }),
    ));
    let client = client_with(&mock);

    let query = QueryBuilder::new().select(&["id", "displayName", "userPrincipalName"]).build();
    let user = client.get_user("AdeleV@contoso.com", &query).await.unwrap();
    assert_eq!(user.display_name.value().map(String::as_str), Some("Adele Vance"));
    assert_eq!(user.business_phones.as_deref(), Some(&["+1 425 555 0109".to_string()][..]));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url,
        "https://graph.microsoft.com/v1.0/users/AdeleV%40contoso.com?$select=id%2CdisplayName%2CuserPrincipalName"
    );
    assert_eq!(request.header("Authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("Accept"), Some("application/json"));
    let correlation = request.header("client-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(correlation).is_ok());
    assert!(request.body.is_none());
}

/// `$search` on users needs the eventual consistency header
#[tokio::test]
async fn test_list_users_with_search() {
    let mock = Arc::new(MockTransport::new().respond_json(
        200,
        json!({
            "@odata.count": 1,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/users?$skiptoken=abc",
            "value": [{"id": "1", "displayName": "Adele Vance"}]
        }),
    ));
    let client = client_with(&mock);

    let query = QueryBuilder::new().search("displayName:adele").count().top(1).build();
    let page = client.list_users(&query).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.count, Some(1));
    assert!(page.has_more());

    let request = &mock.requests()[0];
    assert_eq!(request.header("consistencylevel"), Some("eventual"));
    assert!(request.url.contains("$search=%22displayName%3Aadele%22"), "{}", request.url);
    assert!(request.url.contains("$count=true"));
    assert!(request.url.contains("$top=1"));
}

#[tokio::test]
async fn test_odata_error_is_decoded() {
    let mock = Arc::new(MockTransport::new().respond_json(404, not_found()));
    let client = client_with(&mock);

    let err = client.get_user("nobody", &ODataQuery::new()).await.unwrap_err();
    match &err {
        GraphError::OData { status, error } => {
            assert_eq!(*status, 404);
            assert_eq!(error.code(), "Request_ResourceNotFound");
            assert_eq!(error.request_id(), Some("0f1a2b3c-0000-4000-8000-000000000001"));
        }
        other => panic!("expected OData error, got {:?}", other),
    }
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_client_side());
    assert!(err.to_string().contains("Request_ResourceNotFound"));
}

/// A status the endpoint does not declare is still decoded
#[tokio::test]
async fn test_undeclared_status_still_decoded() {
    let mock = Arc::new(MockTransport::new().respond_json(
        302,
        json!({"error": {"code": "redirect", "message": "moved"}}),
    ));
    let err = client_with(&mock).me(&ODataQuery::new()).await.unwrap_err();
    assert!(matches!(err, GraphError::OData { status: 302, .. }));
}

#[tokio::test]
async fn test_response_not_matching_schema() {
    let mock = Arc::new(MockTransport::new().respond_json(200, json!({"id": "1", "accountEnabled": "yes"})));
    let err = client_with(&mock).me(&ODataQuery::new()).await.unwrap_err();

    match err {
        GraphError::InvalidResponse { endpoint, status, source } => {
            assert_eq!(endpoint, "getMe");
            assert_eq!(status, 200);
            assert_eq!(source.issues.len(), 1);
            assert_eq!(source.issues[0].path_string(), "$.accountEnabled");
        }
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_collection_items_are_validated() {
    let mock = Arc::new(MockTransport::new().respond_json(
        200,
        json!({"value": [{"id": "19:a", "displayName": "General"}, {"id": "19:b", "displayName": 7}]}),
    ));
    let err = client_with(&mock)
        .list_channels("team-1", &ODataQuery::new())
        .await
        .unwrap_err();

    let GraphError::InvalidResponse { source, .. } = err else {
        panic!("expected InvalidResponse");
    };
    assert!(source.issues[0].path_string().ends_with("[1].displayName"));
}

/// Client-side failures never reach the transport
#[tokio::test]
async fn test_client_side_errors_send_nothing() {
    let mock = Arc::new(MockTransport::new());
    let client = client_with(&mock);

    let err = client.request("listUser", RequestParams::new()).await.unwrap_err();
    assert!(matches!(err, GraphError::UnknownEndpoint { .. }));

    let err = client
        .request("listUsers", RequestParams::new().query("$expand", "manager,"))
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidParameter { ref name, .. } if name == "$expand"));

    let err = client
        .request(
            "listEventInstances",
            RequestParams::new()
                .path("event-id", "e1")
                .query("startDateTime", "yesterday")
                .query("endDateTime", "2024-01-02T00:00:00Z"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidParameter { ref name, .. } if name == "startDateTime"));

    let err = client
        .request(
            "createChannel",
            RequestParams::new()
                .path("team-id", "t1")
                .body(json!({"displayName": "x", "membershipType": 3})),
        )
        .await
        .unwrap_err();
    assert!(err.is_client_side());

    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_create_channel_from_model() {
    let mock = Arc::new(MockTransport::new().respond_json(
        201,
        json!({"id": "19:new", "displayName": "Architecture", "membershipType": "private"}),
    ));
    let client = client_with(&mock);

    let body = serde_json::to_value(Channel::new("Architecture", ChannelMembershipType::Private)).unwrap();
    let created: Channel = client
        .call("createChannel", RequestParams::new().path("team-id", "team-1").body(body.clone()))
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("19:new"));

    let request = &mock.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://graph.microsoft.com/v1.0/teams/team-1/channels");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body, Some(body));
}

#[tokio::test]
async fn test_delete_planner_task_with_etag() {
    let mock = Arc::new(MockTransport::new().respond(204, ""));
    let client = client_with(&mock);

    let value = client
        .request(
            "deletePlannerTask",
            RequestParams::new()
                .path("plannerTask-id", "task-1")
                .header("if-match", "W/\"JzEtVGFzayAgQEBAQEBAQEBAQEBAQEBAWCc=\""),
        )
        .await
        .unwrap();
    assert_eq!(value, Value::Null);

    let request = &mock.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.header("If-Match"), Some("W/\"JzEtVGFzayAgQEBAQEBAQEBAQEBAQEBAWCc=\""));
}

/// Recursive and cyclic payloads validate and decode
#[tokio::test]
async fn test_recursive_responses() {
    let mock = Arc::new(
        MockTransport::new()
            .respond_json(
                200,
                json!({"value": [
                    {"id": "a", "labels": [{"name": "A", "isDefault": true}],
                     "children": [{"id": "a1", "children": [{"id": "a1x"}]}]}
                ]}),
            )
            .respond_json(
                200,
                json!({
                    "id": "task-1",
                    "parentUrl": "https://graph.microsoft.com/v1.0/print/printers/p/jobs/j",
                    "status": {"state": "aborted", "description": "Cancelled"},
                    "definition": {"id": "def-1", "displayName": "Stamp", "tasks": [{"id": "task-1"}]}
                }),
            ),
    );
    let client = client_with(&mock);

    let terms = client
        .list_term_children("site-1", "set-1", "term-1", &ODataQuery::new())
        .await
        .unwrap();
    assert_eq!(terms.first().and_then(|t| t.label()), Some("A"));
    assert_eq!(terms.first().map(|t| t.subtree_len()), Some(3));

    let task = client.get_print_task("def-1", "task-1").await.unwrap();
    assert_eq!(task.state(), Some(&PrintTaskProcessingState::Aborted));
    assert_eq!(
        mock.requests()[1].url,
        "https://graph.microsoft.com/v1.0/print/taskDefinitions/def-1/tasks/task-1"
    );
}

/// Concurrent calls share one client
#[tokio::test]
async fn test_concurrent_clones() {
    fn assert_shareable<T: Clone + Send + Sync + 'static>() {}
    assert_shareable::<GraphClient>();

    let mock = Arc::new(
        MockTransport::new()
            .respond_json(200, json!({"id": "t", "visibility": "public"}))
            .respond_json(200, json!({"id": "t", "visibility": "public"})),
    );
    let client = client_with(&mock).with_monitoring(MonitoringConfig::disabled());

    let a = tokio::spawn({
        let client = client.clone();
        async move { client.get_team("t").await }
    });
    let b = tokio::spawn({
        let client = client.clone();
        async move { client.get_team("t").await }
    });

    for handle in [a, b] {
        let team = handle.await.unwrap().unwrap();
        assert_eq!(team.visibility.value(), Some(&TeamVisibilityType::Public));
    }
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    // Sent even with monitoring off, and unique per call
    let ids: Vec<&str> = requests.iter().filter_map(|r| r.header("client-request-id")).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_filter_on_messages() {
    let mock = Arc::new(MockTransport::new().respond_json(200, json!({"value": []})));
    let query = QueryBuilder::new()
        .filter(Filter::and(vec![
            Filter::eq("isRead", false),
            Filter::eq("from/emailAddress/address", "o'brien@contoso.com"),
        ]))
        .build();

    let page = client_with(&mock).list_messages(&query).await.unwrap();
    assert!(page.is_empty());
    let url = &mock.requests()[0].url;
    assert!(url.starts_with("https://graph.microsoft.com/v1.0/me/messages?$filter="));
    assert!(url.contains("o%27%27brien%40contoso.com"), "{}", url);
}

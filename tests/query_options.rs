//! Integration tests for OData query options
//!
//! Builds queries the way callers do and checks what ends up on the wire.

use msgraph_client::api::{Filter, FilterValue, GraphClient, MockTransport, ODataQuery, OrderBy, QueryBuilder, RequestParams};
use std::sync::Arc;

/// Test complex filter building
#[test]
fn test_complex_filters() {
    let filter = Filter::and(vec![
        Filter::eq("accountEnabled", true),
        Filter::or(vec![
            Filter::starts_with("displayName", "Adele"),
            Filter::ends_with("mail", "@contoso.com"),
        ]),
        Filter::not(Filter::eq("manager", FilterValue::Null)),
        Filter::in_list("department", ["Sales", "Retail"]),
    ]);

    let rendered = filter.to_odata_string();
    assert!(rendered.contains("accountEnabled eq true"));
    assert!(rendered.contains("startswith(displayName, 'Adele')"));
    assert!(rendered.contains("endswith(mail, '@contoso.com')"));
    assert!(rendered.contains("not (manager eq null)"));
    assert!(rendered.contains("department in ('Sales', 'Retail')"));
}

/// Test query reusability
#[test]
fn test_query_reusability() {
    let base = QueryBuilder::new()
        .select(&["id", "subject"])
        .filter(Filter::eq("isRead", false))
        .build();

    let first = base.clone().with_top(10);
    let second = base.clone().with_top(50);
    assert_eq!(first.top, Some(10));
    assert_eq!(second.top, Some(50));
    assert_eq!(first.select, second.select);
    assert_eq!(base.top, None);
}

/// Rendered options pass the endpoint's declared parameter checks
#[test]
fn test_options_prepare_against_endpoint() {
    let client = GraphClient::with_transport(
        "https://graph.microsoft.com/v1.0",
        "token",
        Arc::new(MockTransport::new()),
    );
    let query = QueryBuilder::new()
        .select(&["id", "subject", "receivedDateTime"])
        .orderby(OrderBy::desc("receivedDateTime"))
        .skip(20)
        .top(10)
        .build();

    let (endpoint, request) = client
        .prepare("listMessages", &RequestParams::new().odata(&query), "")
        .unwrap();
    assert_eq!(endpoint.alias, "listMessages");
    assert_eq!(
        request.url,
        "https://graph.microsoft.com/v1.0/me/messages?$select=id%2Csubject%2CreceivedDateTime&$orderby=receivedDateTime%20desc&$top=10&$skip=20"
    );
}

/// Entity reads only accept `$select` and `$expand`
#[test]
fn test_list_options_rejected_on_entity_read() {
    let client = GraphClient::with_transport(
        "https://graph.microsoft.com/v1.0",
        "token",
        Arc::new(MockTransport::new()),
    );
    let params = RequestParams::new()
        .path("user-id", "u1")
        .odata(&ODataQuery::new().with_top(5));
    assert!(client.prepare("getUser", &params, "").is_err());
}

//! Integration tests for the built-in schema registry
//!
//! Checks the transcribed Graph types against realistic payloads: sample
//! acceptance, sparse payloads, unknown fields, enum evolvability and deep
//! self-references.

use msgraph_client::api::error::ODATA_ERROR_SCHEMA;
use msgraph_client::schema::{self, IssueCode, Schema, ValidationError};
use serde_json::{Value, json};

fn validate(type_name: &str, payload: &Value) -> Result<Value, ValidationError> {
    let registry = schema::builtin();
    let schema = registry
        .get(type_name)
        .unwrap_or_else(|| panic!("{} is not registered", type_name));
    schema.validate(payload, &registry)
}

fn samples() -> Vec<(&'static str, Value)> {
    vec![
        ("user", json!({
            "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
            "displayName": "Adele Vance",
            "accountEnabled": true,
            "assignedLicenses": [{"disabledPlans": ["a82fbf69-b4d7-49f4-83a6-915b2cf354f4"], "skuId": "c7df2760-2c81-4ef7-b578-5b5392b571df"}],
            "createdDateTime": "2023-01-05T18:20:00Z",
            "deletedDateTime": null,
            "manager": {"@odata.type": "#microsoft.graph.user", "id": "m1"}
        })),
        ("group", json!({"id": "g1", "displayName": "Sales", "groupTypes": ["Unified"], "securityEnabled": false})),
        ("driveItem", json!({
            "id": "01BYE5RZ",
            "name": "Budget.xlsx",
            "size": 35212,
            "createdDateTime": "2024-01-10T08:00:00Z",
            "lastModifiedDateTime": "2024-01-11T08:00:00Z",
            "createdBy": {"user": {"id": "u1", "displayName": "Adele"}},
            "file": {"mimeType": "application/vnd.ms-excel", "hashes": {"quickXorHash": "kA8=" }},
            "fileSystemInfo": {"createdDateTime": "2024-01-10T08:00:00Z"},
            "parentReference": {"driveId": "b!abc", "path": "/drive/root:/Finance"}
        })),
        ("message", json!({
            "id": "AAMkAGVm",
            "subject": "Quarterly numbers",
            "body": {"contentType": "html", "content": "<p>Attached</p>"},
            "importance": "high",
            "isRead": false,
            "from": {"emailAddress": {"name": "Megan", "address": "megan@contoso.com"}},
            "toRecipients": [{"emailAddress": {"address": "alex@contoso.com"}}],
            "flag": {"flagStatus": "notFlagged"},
            "internetMessageHeaders": [{"name": "X-Mailer", "value": "Outlook"}]
        })),
        ("event", json!({
            "id": "AAMkAGI1",
            "subject": "Standup",
            "start": {"dateTime": "2024-06-03T09:00:00.0000000", "timeZone": "UTC"},
            "end": {"dateTime": "2024-06-03T09:15:00.0000000", "timeZone": "UTC"},
            "showAs": "busy",
            "type": "occurrence",
            "sensitivity": "normal",
            "onlineMeetingProvider": "teamsForBusiness",
            "onlineMeeting": {"joinUrl": "https://teams.microsoft.com/l/meetup-join/x"},
            "attendees": [{"type": "optional", "emailAddress": {"address": "a@b.c"},
                           "status": {"response": "none", "time": "0001-01-01T00:00:00Z"}}],
            "location": {"displayName": "Room 1", "address": {"city": "Redmond"}}
        })),
        ("team", json!({
            "id": "team-1",
            "displayName": "Contoso",
            "visibility": "private",
            "memberSettings": {"allowCreatePrivateChannels": true},
            "funSettings": {"giphyContentRating": "strict"}
        })),
        ("channel", json!({"id": "19:x", "displayName": "General", "membershipType": "standard"})),
        ("plannerTask", json!({
            "@odata.etag": "W/\"abc\"",
            "id": "task-1",
            "title": "Ship",
            "percentComplete": 0,
            "previewType": "automatic",
            "assignments": {"u1": {"@odata.type": "#microsoft.graph.plannerAssignment", "orderHint": " !"}}
        })),
        ("termStore.term", json!({
            "id": "term-1",
            "labels": [{"name": "Engineering", "languageTag": "en-US", "isDefault": true}],
            "properties": [{"key": "code", "value": "ENG"}],
            "relations": [{"id": "r", "relationship": "reuse", "toTerm": {"id": "term-2"}}]
        })),
        ("termStore.set", json!({"id": "set-1", "localizedNames": [{"name": "Departments", "languageTag": "en-US"}]})),
        ("printTaskDefinition", json!({
            "id": "def-1",
            "displayName": "Watermark",
            "createdBy": {"appId": "app", "displayName": "Watermarker"},
            "tasks": [{"id": "t1", "parentUrl": "https://x", "status": {"state": "pending", "description": "queued"}}]
        })),
        ("printTaskTrigger", json!({"id": "trig-1", "event": "jobStarted", "definition": {"id": "def-1"}})),
    ]
}

/// Every sample validates and comes back unchanged
#[test]
fn test_samples_accepted_unchanged() {
    for (type_name, payload) in samples() {
        let parsed = validate(type_name, &payload)
            .unwrap_or_else(|e| panic!("{} rejected its sample: {}", type_name, e));
        assert_eq!(parsed, payload, "{} changed the payload", type_name);
    }
}

/// Every Graph type accepts an empty object since all properties are optional
#[test]
fn test_empty_objects_validate() {
    let registry = schema::builtin();
    let mut checked = 0;
    for name in registry.names() {
        if name == ODATA_ERROR_SCHEMA {
            continue;
        }
        let schema = registry.get(name).unwrap();
        if schema.as_object().is_some() {
            assert!(schema.validate(&json!({}), &registry).is_ok(), "{}", name);
            checked += 1;
        }
    }
    assert!(checked > 40, "only {} object schemas", checked);
}

#[test]
fn test_unknown_fields_are_retained() {
    let payload = json!({
        "id": "u1",
        "onPremisesExtensionAttributes": {"extensionAttribute1": "x"},
        "@odata.etag": "W/\"1\""
    });
    assert_eq!(validate("user", &payload).unwrap(), payload);
}

#[test]
fn test_enum_evolvability() {
    let registry = schema::builtin();
    let evolvable = [
        "channelMembershipType",
        "teamVisibilityType",
        "teamSpecialization",
        "giphyRatingType",
        "termStore.relationType",
        "printTaskProcessingState",
        "printEvent",
    ];
    let closed = [
        "bodyType",
        "importance",
        "freeBusyStatus",
        "eventType",
        "onlineMeetingProviderType",
        "attendeeType",
        "responseType",
        "followupFlagStatus",
        "plannerPreviewType",
    ];

    for name in evolvable {
        let schema = registry.get(name).unwrap();
        assert!(schema.as_enum().unwrap().evolvable, "{}", name);
        assert!(schema.validate(&json!("addedNextYear"), &registry).is_ok(), "{}", name);
    }
    for name in closed {
        let schema = registry.get(name).unwrap();
        assert!(!schema.as_enum().unwrap().evolvable, "{}", name);
        let err = schema.validate(&json!("addedNextYear"), &registry).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::InvalidEnumValue, "{}", name);
    }
}

#[test]
fn test_nullability_follows_metadata() {
    // plannerTask.title is Nullable="false", bodyPreview and the rest are nullable
    assert!(validate("plannerTask", &json!({"title": null})).is_err());
    assert!(validate("plannerTask", &json!({"bucketId": null, "dueDateTime": null})).is_ok());
    assert!(validate("message", &json!({"subject": null, "toRecipients": [null]})).is_ok());
    // Nullability of a collection applies to its items, never the array itself
    assert!(validate("message", &json!({"toRecipients": null})).is_err());
    assert!(validate("user", &json!({"assignedLicenses": [null]})).is_err());
    // Entity keys are never null
    assert!(validate("user", &json!({"id": null})).is_err());
}

#[test]
fn test_formats_are_checked() {
    let err = validate(
        "user",
        &json!({"createdDateTime": "yesterday", "assignedLicenses": [{"skuId": "nope"}]}),
    )
    .unwrap_err();
    let paths: Vec<String> = err.issues.iter().map(|i| i.path_string()).collect();
    assert!(paths.contains(&"$.createdDateTime".to_string()), "{:?}", paths);
    assert!(paths.contains(&"$.assignedLicenses[0].skuId".to_string()), "{:?}", paths);
}

/// Deep term trees resolve through lazy references
#[test]
fn test_deep_term_tree() {
    let mut term = json!({"id": "leaf"});
    for depth in 0..40 {
        term = json!({"id": format!("t{}", depth), "children": [term]});
    }
    assert!(validate("termStore.term", &term).is_ok());

    let mut broken = json!({"id": "leaf", "labels": "not a list"});
    for _ in 0..10 {
        broken = json!({"children": [broken]});
    }
    let err = validate("termStore.term", &broken).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert!(err.issues[0].path_string().ends_with("[0].labels"));
}

/// printTask -> definition -> tasks -> definition -> ... stays finite
#[test]
fn test_print_task_cycle() {
    let payload = json!({
        "id": "t1",
        "definition": {
            "id": "d1",
            "tasks": [{"id": "t1", "definition": {"id": "d1", "tasks": [{"id": "t1", "status": {"state": 5}}]}}]
        }
    });
    let err = validate("printTask", &payload).unwrap_err();
    assert_eq!(
        err.issues[0].path_string(),
        "$.definition.tasks[0].definition.tasks[0].status.state"
    );
}

#[test]
fn test_odata_error_envelope() {
    let envelope = json!({
        "error": {
            "code": "ErrorItemNotFound",
            "message": "The specified object was not found in the store.",
            "details": [{"code": "x", "message": "y", "target": "id"}],
            "innerError": {"date": "2024-05-01T10:00:00", "request-id": "r", "client-request-id": "c"}
        }
    });
    assert_eq!(validate(ODATA_ERROR_SCHEMA, &envelope).unwrap(), envelope);
    assert!(validate(ODATA_ERROR_SCHEMA, &json!({"error": {"code": "x"}})).is_err());
    assert!(validate(ODATA_ERROR_SCHEMA, &json!({"value": []})).is_err());
}

/// A registry built by hand resolves references just like the built-in one
#[test]
fn test_custom_registry_lazy_references() {
    let mut registry = schema::Registry::new();
    registry.insert(
        "tree.node",
        Schema::object([
            ("name", Schema::string()),
            ("children", Schema::array(Schema::lazy("tree.node")).optional()),
        ])
        .strict(),
    );

    let node = registry.get("tree.node").unwrap();
    let ok = json!({"name": "root", "children": [{"name": "a"}, {"name": "b", "children": []}]});
    assert!(node.validate(&ok, &registry).is_ok());

    let err = node
        .validate(&json!({"name": "root", "children": [{"nam": "typo"}]}), &registry)
        .unwrap_err();
    let codes: Vec<IssueCode> = err.issues.iter().map(|i| i.code).collect();
    assert!(codes.contains(&IssueCode::Required));
    assert!(codes.contains(&IssueCode::UnrecognizedKeys));
}

//! Planner tasks

use super::common::IdentitySet;
use super::fields::{NullableProperty, Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum PlannerPreviewType: closed {
        Automatic => "automatic",
        NoPreview => "noPreview",
        Checklist => "checklist",
        Description => "description",
        Reference => "reference",
    }
}

/// Open type keyed `category1`..`category25`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerAppliedCategories {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl PlannerAppliedCategories {
    /// Categories set to `true`
    pub fn applied(&self) -> Vec<&str> {
        self.additional_data
            .iter()
            .filter(|(_, v)| v.as_bool() == Some(true))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

/// Open type keyed by assignee user id
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerAssignments {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl PlannerAssignments {
    pub fn assignees(&self) -> Vec<&str> {
        self.additional_data.keys().map(String::as_str).collect()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerTask {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub active_checklist_item_count: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub applied_categories: Option<Option<PlannerAppliedCategories>>,
    #[serde(default, with = "double_option")]
    pub assignee_priority: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub assignments: Option<Option<PlannerAssignments>>,
    #[serde(default, with = "double_option")]
    pub bucket_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub checklist_item_count: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub completed_by: Option<Option<IdentitySet>>,
    #[serde(default, with = "double_option")]
    pub completed_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub conversation_thread_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub created_by: Option<Option<IdentitySet>>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub due_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub has_description: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub order_hint: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub percent_complete: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub plan_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub preview_type: Option<Option<PlannerPreviewType>>,
    #[serde(default, with = "double_option")]
    pub priority: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub reference_count: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub start_date_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl PlannerTask {
    /// `@odata.etag`, needed as `If-Match` for updates and deletes
    pub fn etag(&self) -> Option<&str> {
        self.additional_data.get("@odata.etag").and_then(Value::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.percent_complete.value() == Some(&100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_planner_task() {
        let task: PlannerTask = serde_json::from_value(json!({
            "@odata.etag": "W/\"JzEtVGFzayAgQEBAQEBAQEBAQEBAQEBAWCc=\"",
            "id": "01gzSlKkIUSUl6DF_EilrmQAKDhh",
            "planId": "xqQg5FS2LkCp935s-FIFm2QAFkHM",
            "title": "Update client list",
            "percentComplete": 100,
            "previewType": "checklist",
            "appliedCategories": {"category3": true, "category4": false},
            "assignments": {
                "fbab97d0-4932-4511-b675-204639209557": {
                    "@odata.type": "#microsoft.graph.plannerAssignment",
                    "orderHint": "N9917 U2883!"
                }
            }
        }))
        .unwrap();

        assert_eq!(task.etag(), Some("W/\"JzEtVGFzayAgQEBAQEBAQEBAQEBAQEBAWCc=\""));
        assert!(task.is_complete());
        assert_eq!(task.preview_type.value(), Some(&PlannerPreviewType::Checklist));
        assert_eq!(task.applied_categories.value().unwrap().applied(), vec!["category3"]);
        assert_eq!(
            task.assignments.value().unwrap().assignees(),
            vec!["fbab97d0-4932-4511-b675-204639209557"]
        );
    }

    #[test]
    fn test_title_cannot_be_cleared() {
        assert!(serde_json::from_value::<PlannerTask>(json!({"title": null})).is_err());
    }

    /// Clearing the due date sends `"dueDateTime": null`
    #[test]
    fn test_clear_due_date_patch() {
        let patch = PlannerTask {
            due_date_time: Some(None),
            ..PlannerTask::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"dueDateTime": null}));

        let parsed: PlannerTask = serde_json::from_value(json!({"dueDateTime": null})).unwrap();
        assert!(parsed.due_date_time.is_null());
        assert_eq!(parsed, patch);
    }
}

//! Universal Print task definitions, tasks and triggers
//!
//! `printTask.definition.tasks` loops back to tasks, so the links are boxed.

use super::common::AppIdentity;
use super::fields::non_null;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

graph_enum! {
    pub enum PrintTaskProcessingState: evolvable {
        Pending => "pending",
        Processing => "processing",
        Completed => "completed",
        Aborted => "aborted",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum PrintEvent: evolvable {
        JobStarted => "jobStarted",
        UnknownFutureValue => "unknownFutureValue",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintTaskStatus {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub state: Option<PrintTaskProcessingState>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintTask {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub parent_url: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<PrintTaskStatus>,
    #[serde(default, deserialize_with = "non_null")]
    pub definition: Option<Box<PrintTaskDefinition>>,
    #[serde(default, deserialize_with = "non_null")]
    pub trigger: Option<Box<PrintTaskTrigger>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl PrintTask {
    pub fn state(&self) -> Option<&PrintTaskProcessingState> {
        self.status.as_ref().and_then(|s| s.state.as_ref())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintTaskDefinition {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub created_by: Option<AppIdentity>,
    #[serde(default, deserialize_with = "non_null")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub tasks: Option<Vec<PrintTask>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintTaskTrigger {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub event: Option<PrintEvent>,
    #[serde(default, deserialize_with = "non_null")]
    pub definition: Option<Box<PrintTaskDefinition>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

//! Complex types shared across workloads

use super::fields::non_null;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum BodyType: closed {
        Text => "text",
        Html => "html",
    }
}

graph_enum! {
    pub enum Importance: closed {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
}

graph_enum! {
    pub enum Sensitivity: closed {
        Normal => "normal",
        Personal => "personal",
        Private => "private",
        Confidential => "confidential",
    }
}

/// An actor (user, device or application)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub id: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySet {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub application: Option<Option<Identity>>,
    #[serde(default, with = "double_option")]
    pub device: Option<Option<Identity>>,
    #[serde(default, with = "double_option")]
    pub user: Option<Option<Identity>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIdentity {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub app_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub service_principal_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub service_principal_name: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub key: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub value: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub content_type: Option<Option<BodyType>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl ItemBody {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(Some(content.into())),
            content_type: Some(Some(BodyType::Text)),
            ..Self::default()
        }
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content: Some(Some(content.into())),
            content_type: Some(Some(BodyType::Html)),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub email_address: Option<Option<EmailAddress>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Recipient {
    /// Recipient with just an address
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            email_address: Some(Some(EmailAddress {
                address: Some(Some(address.into())),
                ..EmailAddress::default()
            })),
            ..Self::default()
        }
    }
}

/// Wall-clock time in a named time zone
///
/// `date_time` has no offset (`2024-05-01T09:00:00.0000000`), so it stays a string.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub date_time: Option<String>,
    #[serde(default, with = "double_option")]
    pub time_zone: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub end: Option<DateTimeTimeZone>,
    #[serde(default, deserialize_with = "non_null")]
    pub start: Option<DateTimeTimeZone>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAddress {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub country_or_region: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub postal_code: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub state: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub street: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

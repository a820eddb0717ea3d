//! Directory objects: users and groups

use super::calendar::Event;
use super::mail::Message;
use super::teams::Team;
use super::fields::{Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;
use uuid::Uuid;

/// Any directory object; subtype properties land in `additional_data`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryObject {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub deleted_date_time: Option<Option<Timestamp>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl DirectoryObject {
    /// `@odata.type` without the `#microsoft.graph.` prefix, e.g. `user`
    pub fn kind(&self) -> Option<&str> {
        self.odata_type
            .as_deref()
            .map(|t| t.trim_start_matches('#').trim_start_matches("microsoft.graph."))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.additional_data.get("displayName").and_then(Value::as_str)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLicense {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub disabled_plans: Option<Vec<Uuid>>,
    #[serde(default, with = "double_option")]
    pub sku_id: Option<Option<Uuid>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordProfile {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub force_change_password_next_sign_in: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub force_change_password_next_sign_in_with_mfa: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub password: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub deleted_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub account_enabled: Option<Option<bool>>,
    #[serde(default, deserialize_with = "non_null")]
    pub assigned_licenses: Option<Vec<AssignedLicense>>,
    #[serde(default, deserialize_with = "non_null")]
    pub business_phones: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub company_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub country: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub department: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub employee_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub given_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub job_title: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub mail: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub mail_nickname: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub mobile_phone: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub office_location: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub password_profile: Option<Option<PasswordProfile>>,
    #[serde(default, with = "double_option")]
    pub preferred_language: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub surname: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub user_principal_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub user_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub direct_reports: Option<Vec<DirectoryObject>>,
    #[serde(default, with = "double_option")]
    pub manager: Option<Option<Box<DirectoryObject>>>,
    #[serde(default, deserialize_with = "non_null")]
    pub member_of: Option<Vec<DirectoryObject>>,
    #[serde(default, deserialize_with = "non_null")]
    pub events: Option<Vec<Event>>,
    #[serde(default, deserialize_with = "non_null")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, deserialize_with = "non_null")]
    pub joined_teams: Option<Vec<Team>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub deleted_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub classification: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub group_types: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub mail: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub mail_enabled: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub mail_nickname: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub security_enabled: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub visibility: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub members: Option<Vec<DirectoryObject>>,
    #[serde(default, deserialize_with = "non_null")]
    pub owners: Option<Vec<DirectoryObject>>,
    #[serde(default, with = "double_option")]
    pub team: Option<Option<Box<Team>>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Group {
    /// Microsoft 365 group, as opposed to a security group
    pub fn is_unified(&self) -> bool {
        self.group_types
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t == "Unified"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::NullableProperty;
    use serde_json::json;

    #[test]
    fn test_user_deserialize() {
        let user: User = serde_json::from_value(json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
            "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
            "displayName": "Adele Vance",
            "businessPhones": ["+1 425 555 0109"],
            "createdDateTime": "2023-01-05T18:20:00Z",
            "assignedLicenses": [
                {"disabledPlans": [], "skuId": "c7df2760-2c81-4ef7-b578-5b5392b571df"}
            ],
            "manager": {"@odata.type": "#microsoft.graph.user", "id": "m1", "displayName": "Boss"}
        }))
        .unwrap();

        assert_eq!(user.display_name.value().map(String::as_str), Some("Adele Vance"));
        assert_eq!(user.created_date_time.value().map(|d| d.timestamp()), Some(1672942800));
        let manager = user.manager.value().unwrap();
        assert_eq!(manager.kind(), Some("user"));
        assert_eq!(manager.display_name(), Some("Boss"));
        assert!(user.additional_data.contains_key("@odata.context"));
    }

    #[test]
    fn test_service_payload_round_trips() {
        let raw = json!({"id": "u1", "createdDateTime": "2017-04-15T03:00:50.7579581Z", "mail": null});
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert!(user.mail.is_null());
        assert_eq!(user.given_name, None);
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_bad_guid_is_rejected() {
        let result = serde_json::from_value::<AssignedLicense>(json!({"skuId": "not-a-guid"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_group_is_unified() {
        let group: Group = serde_json::from_value(json!({"groupTypes": ["Unified"]})).unwrap();
        assert!(group.is_unified());
        assert!(!Group::default().is_unified());
    }
}

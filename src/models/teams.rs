//! Microsoft Teams teams and channels

use super::fields::{Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum ChannelMembershipType: evolvable {
        Standard => "standard",
        Private => "private",
        UnknownFutureValue => "unknownFutureValue",
        Shared => "shared",
    }
}

graph_enum! {
    pub enum TeamVisibilityType: evolvable {
        Private => "private",
        Public => "public",
        HiddenMembership => "hiddenMembership",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum TeamSpecialization: evolvable {
        None => "none",
        EducationStandard => "educationStandard",
        EducationClass => "educationClass",
        EducationProfessionalLearningCommunity => "educationProfessionalLearningCommunity",
        EducationStaff => "educationStaff",
        HealthcareStandard => "healthcareStandard",
        HealthcareCareCoordination => "healthcareCareCoordination",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum GiphyRatingType: evolvable {
        Strict => "strict",
        Moderate => "moderate",
        UnknownFutureValue => "unknownFutureValue",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberSettings {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub allow_add_remove_apps: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_create_private_channels: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_create_update_channels: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_create_update_remove_connectors: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_create_update_remove_tabs: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_delete_channels: Option<Option<bool>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFunSettings {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub allow_custom_memes: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_giphy: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub allow_stickers_and_memes: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub giphy_content_rating: Option<Option<GiphyRatingType>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub display_name: Option<String>,
    #[serde(default, with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub is_favorite_by_default: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub membership_type: Option<Option<ChannelMembershipType>>,
    #[serde(default, with = "double_option")]
    pub tenant_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub web_url: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Channel {
    /// Payload for `createChannel`
    pub fn new(display_name: impl Into<String>, membership_type: ChannelMembershipType) -> Self {
        Self {
            display_name: Some(display_name.into()),
            membership_type: Some(Some(membership_type)),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub classification: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub fun_settings: Option<Option<TeamFunSettings>>,
    #[serde(default, with = "double_option")]
    pub internal_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub is_archived: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub member_settings: Option<Option<TeamMemberSettings>>,
    #[serde(default, with = "double_option")]
    pub specialization: Option<Option<TeamSpecialization>>,
    #[serde(default, with = "double_option")]
    pub tenant_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub visibility: Option<Option<TeamVisibilityType>>,
    #[serde(default, with = "double_option")]
    pub web_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub channels: Option<Vec<Channel>>,
    #[serde(default, with = "double_option")]
    pub primary_channel: Option<Option<Box<Channel>>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

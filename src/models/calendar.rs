//! Calendar events

use super::common::{DateTimeTimeZone, Importance, ItemBody, PhysicalAddress, Recipient, Sensitivity, TimeSlot, EmailAddress};
use super::fields::{Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum FreeBusyStatus: closed {
        Unknown => "unknown",
        Free => "free",
        Tentative => "tentative",
        Busy => "busy",
        Oof => "oof",
        WorkingElsewhere => "workingElsewhere",
    }
}

graph_enum! {
    pub enum EventType: closed {
        SingleInstance => "singleInstance",
        Occurrence => "occurrence",
        Exception => "exception",
        SeriesMaster => "seriesMaster",
    }
}

graph_enum! {
    pub enum OnlineMeetingProviderType: closed {
        Unknown => "unknown",
        SkypeForBusiness => "skypeForBusiness",
        SkypeForConsumer => "skypeForConsumer",
        TeamsForBusiness => "teamsForBusiness",
    }
}

graph_enum! {
    pub enum AttendeeType: closed {
        Required => "required",
        Optional => "optional",
        Resource => "resource",
    }
}

graph_enum! {
    pub enum ResponseType: closed {
        None => "none",
        Organizer => "organizer",
        TentativelyAccepted => "tentativelyAccepted",
        Accepted => "accepted",
        Declined => "declined",
        NotResponded => "notResponded",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub response: Option<Option<ResponseType>>,
    #[serde(default, with = "double_option")]
    pub time: Option<Option<Timestamp>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Event attendee (`attendee` ← `attendeeBase` ← `recipient`)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub email_address: Option<Option<EmailAddress>>,
    #[serde(rename = "type", default, with = "double_option")]
    pub attendee_type: Option<Option<AttendeeType>>,
    #[serde(default, with = "double_option")]
    pub proposed_new_time: Option<Option<TimeSlot>>,
    #[serde(default, with = "double_option")]
    pub status: Option<Option<ResponseStatus>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Attendee {
    pub fn required(address: impl Into<String>) -> Self {
        Self {
            email_address: Recipient::address(address).email_address,
            attendee_type: Some(Some(AttendeeType::Required)),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub address: Option<Option<PhysicalAddress>>,
    #[serde(default, with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub location_email_address: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub location_uri: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub unique_id: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineMeetingInfo {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub conference_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub join_url: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub quick_dial: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub toll_free_numbers: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub toll_number: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub categories: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub change_key: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub last_modified_date_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null")]
    pub attendees: Option<Vec<Attendee>>,
    #[serde(default, with = "double_option")]
    pub body: Option<Option<ItemBody>>,
    #[serde(default, with = "double_option")]
    pub body_preview: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub end: Option<Option<DateTimeTimeZone>>,
    #[serde(default, with = "double_option")]
    pub has_attachments: Option<Option<bool>>,
    #[serde(rename = "iCalUId", default, with = "double_option")]
    pub ical_uid: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub importance: Option<Option<Importance>>,
    #[serde(default, with = "double_option")]
    pub is_all_day: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub is_cancelled: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub is_online_meeting: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub is_organizer: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub location: Option<Option<Location>>,
    #[serde(default, deserialize_with = "non_null")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, with = "double_option")]
    pub online_meeting: Option<Option<OnlineMeetingInfo>>,
    #[serde(default, with = "double_option")]
    pub online_meeting_provider: Option<Option<OnlineMeetingProviderType>>,
    #[serde(default, with = "double_option")]
    pub organizer: Option<Option<Recipient>>,
    #[serde(default, with = "double_option")]
    pub response_status: Option<Option<ResponseStatus>>,
    #[serde(default, with = "double_option")]
    pub sensitivity: Option<Option<Sensitivity>>,
    #[serde(default, with = "double_option")]
    pub series_master_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub show_as: Option<Option<FreeBusyStatus>>,
    #[serde(default, with = "double_option")]
    pub start: Option<Option<DateTimeTimeZone>>,
    #[serde(default, with = "double_option")]
    pub subject: Option<Option<String>>,
    #[serde(rename = "type", default, with = "double_option")]
    pub event_type: Option<Option<EventType>>,
    #[serde(default, with = "double_option")]
    pub web_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub instances: Option<Vec<Event>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

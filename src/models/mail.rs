//! Outlook messages

use super::common::{DateTimeTimeZone, Importance, ItemBody, Recipient};
use super::fields::{NullableProperty, Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum FollowupFlagStatus: closed {
        NotFlagged => "notFlagged",
        Complete => "complete",
        Flagged => "flagged",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowupFlag {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub completed_date_time: Option<Option<DateTimeTimeZone>>,
    #[serde(default, with = "double_option")]
    pub due_date_time: Option<Option<DateTimeTimeZone>>,
    #[serde(default, with = "double_option")]
    pub flag_status: Option<Option<FollowupFlagStatus>>,
    #[serde(default, with = "double_option")]
    pub start_date_time: Option<Option<DateTimeTimeZone>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternetMessageHeader {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub value: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
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
    pub bcc_recipients: Option<Vec<Recipient>>,
    #[serde(default, with = "double_option")]
    pub body: Option<Option<ItemBody>>,
    #[serde(default, with = "double_option")]
    pub body_preview: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub cc_recipients: Option<Vec<Recipient>>,
    #[serde(default, with = "double_option")]
    pub conversation_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub flag: Option<Option<FollowupFlag>>,
    #[serde(default, with = "double_option")]
    pub from: Option<Option<Recipient>>,
    #[serde(default, with = "double_option")]
    pub has_attachments: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub importance: Option<Option<Importance>>,
    #[serde(default, deserialize_with = "non_null")]
    pub internet_message_headers: Option<Vec<InternetMessageHeader>>,
    #[serde(default, with = "double_option")]
    pub internet_message_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub is_draft: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub is_read: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub is_read_receipt_requested: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub parent_folder_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub received_date_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null")]
    pub reply_to: Option<Vec<Recipient>>,
    #[serde(default, with = "double_option")]
    pub sender: Option<Option<Recipient>>,
    #[serde(default, with = "double_option")]
    pub sent_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub subject: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub to_recipients: Option<Vec<Recipient>>,
    #[serde(default, with = "double_option")]
    pub web_link: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Message {
    /// Draft payload for `createMessage`
    pub fn draft(subject: impl Into<String>, body: ItemBody, to: &[&str]) -> Self {
        Self {
            subject: Some(Some(subject.into())),
            body: Some(Some(body)),
            to_recipients: Some(to.iter().map(|a| Recipient::address(*a)).collect()),
            ..Self::default()
        }
    }

    /// Sender address, falling back to `from`
    pub fn sender_address(&self) -> Option<&str> {
        self.sender
            .value()
            .or(self.from.value())
            .and_then(|r| r.email_address.value())
            .and_then(|e| e.address.value())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_serializes_sparse() {
        let draft = Message::draft("Lunch?", ItemBody::text("Noon works"), &["alex@contoso.com"]);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "body": {"content": "Noon works", "contentType": "text"},
                "subject": "Lunch?",
                "toRecipients": [{"emailAddress": {"address": "alex@contoso.com"}}]
            })
        );
    }

    #[test]
    fn test_message_fields() {
        let message: Message = serde_json::from_value(json!({
            "id": "AAMk",
            "importance": "high",
            "isRead": false,
            "from": {"emailAddress": {"address": "megan@contoso.com"}},
            "flag": {"flagStatus": "flagged"},
            "receivedDateTime": "2024-03-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(message.importance, Some(Some(Importance::High)));
        assert_eq!(message.sender_address(), Some("megan@contoso.com"));
        assert_eq!(
            message.flag.value().and_then(|f| f.flag_status.value()),
            Some(&FollowupFlagStatus::Flagged)
        );
        assert_eq!(message.received_date_time.value().map(|t| t.timestamp()), Some(1709280000));
    }

    /// A PATCH body clearing a property keeps the explicit null
    #[test]
    fn test_clearing_a_property() {
        let patch = Message {
            subject: Some(None),
            is_read: Some(Some(true)),
            ..Message::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"subject": null, "isRead": true}));

        let message: Message = serde_json::from_value(json!({"sender": null, "from": {"emailAddress": {"address": "a@b.c"}}})).unwrap();
        assert!(message.sender.is_null());
        assert_eq!(message.sender_address(), Some("a@b.c"));
    }

    #[test]
    fn test_closed_enum_rejects_unknown_member() {
        let result = serde_json::from_value::<Message>(json!({"importance": "urgent"}));
        assert!(result.is_err());
    }
}

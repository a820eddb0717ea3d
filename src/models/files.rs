//! OneDrive and SharePoint drive items

use super::common::IdentitySet;
use super::fields::{NullableProperty, Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hashes {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub crc32_hash: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub quick_xor_hash: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub sha1_hash: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub sha256_hash: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Present on items that are files
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub hashes: Option<Option<Hashes>>,
    #[serde(default, with = "double_option")]
    pub mime_type: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub processing_metadata: Option<Option<bool>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Present on items that are folders
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub child_count: Option<Option<i32>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub state: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemInfo {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub last_accessed_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub last_modified_date_time: Option<Option<Timestamp>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReference {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub drive_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub drive_type: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub path: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub share_id: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub site_id: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub created_by: Option<Option<IdentitySet>>,
    #[serde(default, deserialize_with = "non_null")]
    pub created_date_time: Option<Timestamp>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub e_tag: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub last_modified_by: Option<Option<IdentitySet>>,
    #[serde(default, deserialize_with = "non_null")]
    pub last_modified_date_time: Option<Timestamp>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub parent_reference: Option<Option<ItemReference>>,
    #[serde(default, with = "double_option")]
    pub web_url: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub c_tag: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub deleted: Option<Option<Deleted>>,
    #[serde(default, with = "double_option")]
    pub file: Option<Option<File>>,
    #[serde(default, with = "double_option")]
    pub file_system_info: Option<Option<FileSystemInfo>>,
    #[serde(default, with = "double_option")]
    pub folder: Option<Option<Folder>>,
    #[serde(default, with = "double_option")]
    pub size: Option<Option<i64>>,
    #[serde(default, deserialize_with = "non_null")]
    pub children: Option<Vec<DriveItem>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl DriveItem {
    pub fn is_folder(&self) -> bool {
        self.folder.value().is_some()
    }

    pub fn is_file(&self) -> bool {
        self.file.value().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drive_item_tree() {
        let item: DriveItem = serde_json::from_value(json!({
            "id": "root",
            "name": "root",
            "eTag": "\"{1}\"",
            "cTag": "\"c:{1}\"",
            "folder": {"childCount": 1},
            "children": [
                {
                    "id": "01",
                    "name": "report.docx",
                    "size": 31337,
                    "file": {"mimeType": "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                             "hashes": {"quickXorHash": "abc="}},
                    "parentReference": {"driveId": "b!x", "path": "/drive/root:"}
                }
            ]
        }))
        .unwrap();

        assert!(item.is_folder());
        assert_eq!(item.e_tag.value().map(String::as_str), Some("\"{1}\""));
        let child = &item.children.as_ref().unwrap()[0];
        assert!(child.is_file());
        assert_eq!(child.size, Some(Some(31337)));
        assert_eq!(
            child
                .file
                .value()
                .and_then(|f| f.hashes.value())
                .and_then(|h| h.quick_xor_hash.value())
                .map(String::as_str),
            Some("abc=")
        );
    }

    #[test]
    fn test_null_facet_is_not_a_folder() {
        let item: DriveItem = serde_json::from_value(json!({"id": "x", "folder": null})).unwrap();
        assert!(!item.is_folder());
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": "x", "folder": null}));
        assert!(serde_json::from_value::<DriveItem>(json!({"createdDateTime": null})).is_err());
    }
}

//! Collection responses
//!
//! Graph wraps every list in `{ "@odata.context", "@odata.count",
//! "@odata.nextLink", "value" }`. The next link is surfaced, never followed.

use crate::api::error::GraphError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataCollection<T> {
    #[serde(rename = "@odata.context")]
    pub context: Option<String>,
    #[serde(rename = "@odata.count")]
    pub count: Option<u64>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
    pub value: Vec<T>,
}

impl<T: DeserializeOwned> ODataCollection<T> {
    /// Parse OData response JSON into a collection
    pub fn from_json(json: Value) -> Result<Self, GraphError> {
        Ok(serde_json::from_value(json)?)
    }
}

impl<T> ODataCollection<T> {
    /// Check if there are more results available
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.value.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> IntoIterator for ODataCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl ODataCollection<Value> {
    /// Get a specific field from all records
    pub fn field_values(&self, field_name: &str) -> Vec<Option<&Value>> {
        self.value.iter().map(|record| record.get(field_name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_from_json() {
        let json = json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users",
            "@odata.count": 2,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/users?$skiptoken=X",
            "value": [
                {"id": "1", "displayName": "Adele"},
                {"id": "2", "displayName": "Alex"}
            ]
        });

        let page: ODataCollection<Value> = ODataCollection::from_json(json).unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.count, Some(2));
        assert!(page.has_more());
        assert_eq!(page.field_values("displayName")[1], Some(&json!("Alex")));
    }

    #[test]
    fn test_collection_minimal() {
        let page: ODataCollection<Value> = ODataCollection::from_json(json!({"value": []})).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more());
        assert_eq!(page.context, None);
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let result = ODataCollection::<Value>::from_json(json!({"@odata.count": 0}));
        assert!(matches!(result, Err(GraphError::Decode(_))));
    }

    #[test]
    fn test_serialization_skips_absent_annotations() {
        let page = ODataCollection {
            context: None,
            count: None,
            next_link: None,
            value: vec![1, 2],
        };
        assert_eq!(serde_json::to_value(&page).unwrap(), json!({"value": [1, 2]}));
    }
}

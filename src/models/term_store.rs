//! SharePoint term store (`microsoft.graph.termStore`)
//!
//! Terms nest: a term has child terms, and relations point back at terms.

use super::common::KeyValue;
use super::fields::{NullableProperty, Timestamp, non_null};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use serde_with::rust::double_option;

graph_enum! {
    pub enum RelationType: evolvable {
        Pin => "pin",
        Reuse => "reuse",
        UnknownFutureValue => "unknownFutureValue",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedLabel {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub is_default: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub language_tag: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedDescription {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub language_tag: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedName {
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub language_tag: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null")]
    pub descriptions: Option<Vec<LocalizedDescription>>,
    #[serde(default, deserialize_with = "non_null")]
    pub labels: Option<Vec<LocalizedLabel>>,
    #[serde(default, with = "double_option")]
    pub last_modified_date_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "non_null")]
    pub properties: Option<Vec<KeyValue>>,
    #[serde(default, deserialize_with = "non_null")]
    pub children: Option<Vec<Term>>,
    #[serde(default, deserialize_with = "non_null")]
    pub relations: Option<Vec<Relation>>,
    #[serde(default, with = "double_option")]
    pub set: Option<Option<Box<Set>>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

impl Term {
    /// Default label, or the first one
    pub fn label(&self) -> Option<&str> {
        let labels = self.labels.as_ref()?;
        labels
            .iter()
            .find(|l| l.is_default.value() == Some(&true))
            .or_else(|| labels.first())
            .and_then(|l| l.name.value())
            .map(String::as_str)
    }

    /// Number of terms in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Term::subtree_len)
            .sum::<usize>()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub created_date_time: Option<Option<Timestamp>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub localized_names: Option<Vec<LocalizedName>>,
    #[serde(default, deserialize_with = "non_null")]
    pub properties: Option<Vec<KeyValue>>,
    #[serde(default, deserialize_with = "non_null")]
    pub children: Option<Vec<Term>>,
    #[serde(default, deserialize_with = "non_null")]
    pub relations: Option<Vec<Relation>>,
    #[serde(default, deserialize_with = "non_null")]
    pub terms: Option<Vec<Term>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(default, deserialize_with = "non_null")]
    pub id: Option<String>,
    #[serde(rename = "@odata.type", default, deserialize_with = "non_null")]
    pub odata_type: Option<String>,
    #[serde(default, with = "double_option")]
    pub relationship: Option<Option<RelationType>>,
    #[serde(default, with = "double_option")]
    pub from_term: Option<Option<Box<Term>>>,
    #[serde(default, with = "double_option")]
    pub set: Option<Option<Box<Set>>>,
    #[serde(default, with = "double_option")]
    pub to_term: Option<Option<Box<Term>>>,
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

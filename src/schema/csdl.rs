//! OData CSDL (`$metadata`) transcription
//!
//! Turns the structured and enum types of a CSDL document into registry
//! schemas. Every property becomes an optional field; it is nullable unless the
//! metadata says `Nullable="false"`. Objects keep unknown keys, and enums are
//! evolvable when they carry an `unknownFutureValue` member.

use super::{EdmType, Registry, Schema};
use anyhow::{Context, Result};
use roxmltree::{Document, Node};
use std::collections::{HashMap, HashSet};

/// Sentinel member marking an evolvable enum
pub const UNKNOWN_FUTURE_VALUE: &str = "unknownFutureValue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Entity,
    Complex,
}

#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub name: String,
    /// Fully qualified type reference, possibly wrapped in `Collection(..)`
    pub type_ref: String,
    pub nullable: bool,
    pub navigation: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StructuredTypeDecl {
    pub name: String,
    pub kind: TypeKind,
    pub base_type: Option<String>,
    pub is_abstract: bool,
    pub properties: Vec<PropertyDecl>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EnumTypeDecl {
    pub name: String,
    pub members: Vec<String>,
    pub description: Option<String>,
}

impl EnumTypeDecl {
    pub fn is_evolvable(&self) -> bool {
        self.members.iter().any(|m| m == UNKNOWN_FUTURE_VALUE)
    }
}

/// Raw declarations read from a CSDL document, before transcription
#[derive(Debug, Clone, Default)]
pub struct CsdlModel {
    pub structured_types: Vec<StructuredTypeDecl>,
    pub enum_types: Vec<EnumTypeDecl>,
    /// Alias -> namespace
    pub aliases: HashMap<String, String>,
}

/// Parses a CSDL document and transcribes it into a registry
pub fn transcribe(metadata_xml: &str) -> Result<Registry> {
    let model = parse(metadata_xml)?;
    model.into_registry()
}

/// Reads every `Schema` element of a CSDL document
pub fn parse(metadata_xml: &str) -> Result<CsdlModel> {
    log::debug!("Parsing CSDL document, {} bytes", metadata_xml.len());

    let doc = Document::parse(metadata_xml).context("Failed to parse metadata XML")?;
    let mut model = CsdlModel::default();

    let schemas: Vec<Node> = doc
        .descendants()
        .filter(|node| node.has_tag_name("Schema"))
        .collect();
    if schemas.is_empty() {
        anyhow::bail!("Metadata document contains no Schema element");
    }

    // Aliases first, type references may point into any schema
    for schema in &schemas {
        let namespace = schema
            .attribute("Namespace")
            .context("Schema element without a Namespace")?;
        if let Some(alias) = schema.attribute("Alias") {
            model.aliases.insert(alias.to_string(), namespace.to_string());
        }
    }

    for schema in &schemas {
        let namespace = schema.attribute("Namespace").unwrap_or_default();

        for node in schema.children().filter(|n| n.is_element()) {
            let tag = node.tag_name().name();
            let Some(local_name) = node.attribute("Name") else {
                continue;
            };
            let name = format!("{}.{}", namespace, local_name);

            match tag {
                "EntityType" | "ComplexType" => {
                    let kind = if tag == "EntityType" {
                        TypeKind::Entity
                    } else {
                        TypeKind::Complex
                    };
                    let properties = node
                        .children()
                        .filter(|n| n.has_tag_name("Property") || n.has_tag_name("NavigationProperty"))
                        .filter_map(|n| parse_property(n, &model.aliases))
                        .collect();
                    model.structured_types.push(StructuredTypeDecl {
                        name,
                        kind,
                        base_type: node
                            .attribute("BaseType")
                            .map(|b| qualify(b, &model.aliases)),
                        is_abstract: node.attribute("Abstract") == Some("true"),
                        properties,
                        description: description_of(node),
                    });
                }
                "EnumType" => {
                    let members = node
                        .children()
                        .filter(|n| n.has_tag_name("Member"))
                        .filter_map(|n| n.attribute("Name"))
                        .map(|m| m.to_string())
                        .collect();
                    model.enum_types.push(EnumTypeDecl {
                        name,
                        members,
                        description: description_of(node),
                    });
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Parsed {} structured and {} enum types from metadata",
        model.structured_types.len(),
        model.enum_types.len()
    );
    Ok(model)
}

fn parse_property(node: Node, aliases: &HashMap<String, String>) -> Option<PropertyDecl> {
    let name = node.attribute("Name")?;
    let type_ref = node.attribute("Type").unwrap_or("Edm.String");
    let navigation = node.has_tag_name("NavigationProperty");
    // CSDL default is nullable
    let nullable = node.attribute("Nullable").map(|v| v != "false").unwrap_or(true);

    Some(PropertyDecl {
        name: name.to_string(),
        type_ref: qualify(type_ref, aliases),
        nullable,
        navigation,
        description: description_of(node),
    })
}

/// Replaces a leading namespace alias, keeping any `Collection(..)` wrapper
fn qualify(type_ref: &str, aliases: &HashMap<String, String>) -> String {
    if let Some(inner) = collection_item(type_ref) {
        return format!("Collection({})", qualify(inner, aliases));
    }
    if let Some((prefix, rest)) = type_ref.split_once('.') {
        if let Some(namespace) = aliases.get(prefix) {
            return format!("{}.{}", namespace, rest);
        }
    }
    type_ref.to_string()
}

fn collection_item(type_ref: &str) -> Option<&str> {
    type_ref
        .strip_prefix("Collection(")
        .and_then(|s| s.strip_suffix(')'))
}

fn description_of(node: Node) -> Option<String> {
    node.children()
        .filter(|n| n.has_tag_name("Annotation"))
        .find(|n| {
            n.attribute("Term")
                .is_some_and(|t| t.ends_with("Core.V1.Description") || t.ends_with("Core.Description"))
        })
        .and_then(|n| n.attribute("String"))
        .map(|s| s.to_string())
}

impl CsdlModel {
    pub fn find_structured(&self, name: &str) -> Option<&StructuredTypeDecl> {
        self.structured_types.iter().find(|t| t.name == name)
    }

    /// Properties of a type including everything inherited through `BaseType`,
    /// base properties first.
    pub fn flattened_properties(&self, name: &str) -> Result<Vec<&PropertyDecl>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(name.to_string());

        while let Some(type_name) = current {
            if !seen.insert(type_name.clone()) {
                anyhow::bail!("Inheritance cycle through '{}'", type_name);
            }
            match self.find_structured(&type_name) {
                Some(decl) => {
                    chain.push(decl);
                    current = decl.base_type.clone();
                }
                None if type_name == name => {
                    anyhow::bail!("Type '{}' is not declared", name);
                }
                None => {
                    log::warn!("Base type '{}' of '{}' is not declared, ignoring", type_name, name);
                    current = None;
                }
            }
        }

        let mut properties: Vec<&PropertyDecl> = Vec::new();
        for decl in chain.iter().rev() {
            for property in &decl.properties {
                match properties.iter().position(|p| p.name == property.name) {
                    Some(index) => properties[index] = property,
                    None => properties.push(property),
                }
            }
        }
        Ok(properties)
    }

    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::new();
        for (alias, namespace) in &self.aliases {
            registry.add_alias(alias.clone(), namespace.clone());
        }

        for decl in &self.enum_types {
            let mut schema = Schema::enumeration(decl.members.iter().cloned(), decl.is_evolvable());
            if let Some(description) = &decl.description {
                schema = schema.describe(description.clone());
            }
            registry.insert(decl.name.clone(), schema);
        }

        for decl in &self.structured_types {
            let properties = self
                .flattened_properties(&decl.name)
                .with_context(|| format!("Failed to resolve properties of '{}'", decl.name))?;

            let mut fields: Vec<(String, Schema)> = properties
                .iter()
                .map(|p| (p.name.clone(), property_schema(p)))
                .collect();
            fields.push(("@odata.type".to_string(), Schema::string()));

            let mut schema = Schema::object(fields).partial().passthrough();
            if let Some(description) = &decl.description {
                schema = schema.describe(description.clone());
            }
            registry.insert(decl.name.clone(), schema);
        }

        log::debug!("Transcribed {} schemas", registry.len());
        Ok(registry)
    }
}

fn property_schema(property: &PropertyDecl) -> Schema {
    let mut schema = match collection_item(&property.type_ref) {
        // Nullability of a collection applies to its items
        Some(item) => Schema::array(type_schema(item, property.nullable)),
        None => type_schema(&property.type_ref, property.nullable),
    };
    if let Some(description) = &property.description {
        schema = schema.describe(description.clone());
    }
    schema
}

fn type_schema(type_ref: &str, nullable: bool) -> Schema {
    let schema = if type_ref.starts_with("Edm.") {
        match type_ref.parse::<EdmType>() {
            Ok(edm) => Schema::edm(edm),
            Err(_) => Schema::any(),
        }
    } else {
        Schema::lazy(type_ref)
    };
    if nullable { schema.nullable() } else { schema }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{IssueCode, SchemaKind};
    use serde_json::json;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
  <edmx:DataServices>
    <Schema Namespace="sample.ns" Alias="s" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EnumType Name="color">
        <Member Name="red" Value="0" />
        <Member Name="blue" Value="1" />
      </EnumType>
      <EnumType Name="shape">
        <Member Name="circle" Value="0" />
        <Member Name="unknownFutureValue" Value="1" />
      </EnumType>
      <EntityType Name="entity" Abstract="true">
        <Key><PropertyRef Name="id" /></Key>
        <Property Name="id" Type="Edm.String" Nullable="false" />
      </EntityType>
      <EntityType Name="node" BaseType="s.entity">
        <Property Name="label" Type="Edm.String">
          <Annotation Term="Org.OData.Core.V1.Description" String="Display label." />
        </Property>
        <Property Name="color" Type="s.color" />
        <Property Name="tags" Type="Collection(Edm.String)" Nullable="false" />
        <NavigationProperty Name="children" Type="Collection(s.node)" />
      </EntityType>
      <EntityType Name="special" BaseType="sample.ns.node">
        <Property Name="label" Type="Edm.Int32" Nullable="false" />
      </EntityType>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

    #[test]
    fn test_parse_declarations() {
        let model = parse(SAMPLE).unwrap();
        assert_eq!(model.structured_types.len(), 3);
        assert_eq!(model.enum_types.len(), 2);
        assert_eq!(model.aliases.get("s").map(String::as_str), Some("sample.ns"));

        let node = model.find_structured("sample.ns.node").unwrap();
        assert_eq!(node.base_type.as_deref(), Some("sample.ns.entity"));
        assert_eq!(node.properties[0].description.as_deref(), Some("Display label."));
        assert_eq!(node.properties[3].type_ref, "Collection(sample.ns.node)");
        assert!(node.properties[3].navigation);
    }

    #[test]
    fn test_inherited_properties_come_first() {
        let model = parse(SAMPLE).unwrap();
        let names: Vec<&str> = model
            .flattened_properties("sample.ns.special")
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "label", "color", "tags", "children"]);
    }

    #[test]
    fn test_nullability_rule() {
        let registry = transcribe(SAMPLE).unwrap();
        let node = registry.get("sample.ns.node").unwrap();

        let id = node.field("id").unwrap();
        assert!(!id.nullable);
        assert!(id.optional);

        let label = node.field("label").unwrap();
        assert!(label.nullable);
        assert_eq!(label.description.as_deref(), Some("Display label."));

        let SchemaKind::Array(items) = &node.field("tags").unwrap().kind else {
            panic!("tags should be an array");
        };
        assert!(!items.nullable);
    }

    #[test]
    fn test_enum_evolvability() {
        let registry = transcribe(SAMPLE).unwrap();
        assert!(!registry.get("sample.ns.color").unwrap().as_enum().unwrap().evolvable);
        assert!(registry.get("s.shape").unwrap().as_enum().unwrap().evolvable);
    }

    #[test]
    fn test_override_in_derived_type() {
        let registry = transcribe(SAMPLE).unwrap();
        let special = registry.get("sample.ns.special").unwrap();
        assert_eq!(special.field("label").unwrap().kind, SchemaKind::Edm(EdmType::Int32));
    }

    #[test]
    fn test_recursive_payload_validates() {
        let registry = transcribe(SAMPLE).unwrap();
        let payload = json!({
            "id": "1",
            "color": "red",
            "children": [{"id": "2", "children": [{"id": "3", "tags": ["x"]}]}],
            "@odata.etag": "W/\"1\""
        });
        let parsed = Schema::lazy("sample.ns.node").validate(&payload, &registry).unwrap();
        assert_eq!(parsed, payload);

        let bad = json!({"children": [{"color": "green"}]});
        let err = Schema::lazy("sample.ns.node").validate(&bad, &registry).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::InvalidEnumValue);
        assert_eq!(err.issues[0].path_string(), "$.children[0].color");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(transcribe("<not-closed").is_err());
        assert!(transcribe("<edmx:Edmx xmlns:edmx=\"x\"/>").is_err());

        let cyclic = r#"<Schema Namespace="c">
            <ComplexType Name="a" BaseType="c.b"/>
            <ComplexType Name="b" BaseType="c.a"/>
        </Schema>"#;
        assert!(transcribe(cyclic).is_err());
    }
}

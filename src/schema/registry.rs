//! Named schema store
//!
//! Lazy references are resolved against a `Registry`. The built-in registry is
//! transcribed from the Graph metadata excerpt embedded in the crate.

use super::{csdl, Schema};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Namespace every Graph type lives under
pub const GRAPH_NAMESPACE: &str = "microsoft.graph";

const EMBEDDED_METADATA: &str = include_str!("../../metadata/graph-v1.0.csdl.xml");

static BUILTIN: Lazy<Arc<Registry>> = Lazy::new(|| {
    let mut registry = csdl::transcribe(EMBEDDED_METADATA)
        .expect("embedded Graph metadata is well-formed");
    registry.insert(
        crate::api::error::ODATA_ERROR_SCHEMA,
        crate::api::error::ODataError::schema(),
    );
    log::debug!("Built-in schema registry holds {} schemas", registry.len());
    Arc::new(registry)
});

/// Registry built from the embedded Graph v1.0 metadata
pub fn builtin() -> Arc<Registry> {
    Arc::clone(&BUILTIN)
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: HashMap<String, Schema>,
    /// Namespace alias -> namespace, e.g. `graph` -> `microsoft.graph`
    aliases: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) {
        self.schemas.insert(name.into(), schema);
    }

    pub fn add_alias(&mut self, alias: impl Into<String>, namespace: impl Into<String>) {
        self.aliases.insert(alias.into(), namespace.into());
    }

    /// Resolves a name to the key it is stored under.
    ///
    /// Tries the exact name, then a namespace alias prefix, then the
    /// `microsoft.graph` namespace for short names like `user`.
    pub fn resolve_name(&self, name: &str) -> Option<String> {
        if self.schemas.contains_key(name) {
            return Some(name.to_string());
        }

        if let Some((prefix, rest)) = name.split_once('.') {
            if let Some(namespace) = self.aliases.get(prefix) {
                let expanded = format!("{}.{}", namespace, rest);
                if self.schemas.contains_key(&expanded) {
                    return Some(expanded);
                }
            }
        }

        let qualified = format!("{}.{}", GRAPH_NAMESPACE, name);
        self.schemas.contains_key(&qualified).then_some(qualified)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        match self.schemas.get(name) {
            Some(schema) => Some(schema),
            None => self
                .resolve_name(name)
                .and_then(|resolved| self.schemas.get(&resolved)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Copies every schema and alias of `other` into this registry
    pub fn merge(&mut self, other: Registry) {
        self.schemas.extend(other.schemas);
        self.aliases.extend(other.aliases);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name() {
        let mut registry = Registry::new();
        registry.insert("microsoft.graph.user", Schema::any());
        registry.insert("microsoft.graph.termStore.term", Schema::any());
        registry.add_alias("graph", "microsoft.graph");
        registry.add_alias("termStore", "microsoft.graph.termStore");

        assert_eq!(registry.resolve_name("user").as_deref(), Some("microsoft.graph.user"));
        assert_eq!(registry.resolve_name("graph.user").as_deref(), Some("microsoft.graph.user"));
        assert_eq!(
            registry.resolve_name("termStore.term").as_deref(),
            Some("microsoft.graph.termStore.term")
        );
        assert!(registry.resolve_name("group").is_none());
    }

    #[test]
    fn test_builtin_registry_is_populated() {
        let registry = builtin();
        assert!(registry.contains("microsoft.graph.user"));
        assert!(registry.contains("microsoft.graph.termStore.term"));
        assert!(registry.contains(crate::api::error::ODATA_ERROR_SCHEMA));
        assert!(registry.names().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_merge() {
        let mut a = Registry::new();
        a.insert("a", Schema::string());
        let mut b = Registry::new();
        b.insert("b", Schema::integer());
        b.add_alias("x", "y");
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert!(a.contains("b"));
    }
}

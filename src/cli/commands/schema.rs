use anyhow::Result;
use colored::*;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::info;
use msgraph_client::schema::{self, Registry, Schema, UnknownKeys};

/// Registry names closest to `name`, best first
pub fn similar_names<'a>(registry: &'a Registry, name: &str, limit: usize) -> Vec<&'a str> {
    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &str)> = registry
        .names()
        .into_iter()
        .filter_map(|candidate| matcher.fuzzy_match(candidate, name).map(|score| (score, candidate)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.len().cmp(&b.1.len())));
    scored.into_iter().take(limit).map(|(_, candidate)| candidate).collect()
}

/// Resolve a type name against the registry, with suggestions on failure
pub fn lookup<'a>(registry: &'a Registry, type_name: &str) -> Result<(String, &'a Schema)> {
    match registry.resolve_name(type_name) {
        Some(resolved) => match registry.get(&resolved) {
            Some(schema) => Ok((resolved, schema)),
            None => anyhow::bail!("Unknown type '{}'", type_name),
        },
        None => {
            let suggestions = similar_names(registry, type_name, 3);
            if suggestions.is_empty() {
                anyhow::bail!("Unknown type '{}'", type_name)
            } else {
                anyhow::bail!("Unknown type '{}', did you mean: {}?", type_name, suggestions.join(", "))
            }
        }
    }
}

/// Print a schema's fields, or an enum's members
pub fn schema_command(type_name: &str) -> Result<()> {
    info!("Showing schema {}", type_name);
    let registry = schema::builtin();
    let (resolved, schema) = lookup(&registry, type_name)?;

    println!("{}  {}", resolved.bold(), schema.type_name().dimmed());
    if let Some(description) = &schema.description {
        println!("{}", description);
    }
    println!();

    if let Some(shape) = schema.as_enum() {
        println!("Members:");
        for value in &shape.values {
            println!("  {}", value);
        }
        if shape.evolvable {
            println!("\n{}", "Evolvable: values added by the service later are accepted.".yellow());
        }
        return Ok(());
    }

    if let Some(shape) = schema.as_object() {
        let width = shape.fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, field) in &shape.fields {
            let mut flags = Vec::new();
            if field.optional {
                flags.push("optional");
            }
            println!(
                "  {:<width$}  {}  {}",
                name,
                field.type_name().yellow(),
                flags.join(", ").dimmed(),
                width = width
            );
        }
        let unknown = match shape.unknown_keys {
            UnknownKeys::Passthrough => "kept",
            UnknownKeys::Strip => "dropped",
            UnknownKeys::Strict => "rejected",
        };
        println!("\nFields: {}  Unknown fields: {}", shape.fields.len(), unknown);
    }

    Ok(())
}

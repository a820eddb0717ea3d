use super::endpoints::method_label;
use anyhow::Result;
use colored::*;
use log::info;
use msgraph_client::api::endpoints;
use msgraph_client::api::{ParameterKind, ResponseBody};

/// Short label for a parameter validator
pub fn kind_label(kind: &ParameterKind) -> String {
    match kind {
        ParameterKind::OneOf(values) => values.join(" | "),
        ParameterKind::CsvList => "comma separated list".to_string(),
        ParameterKind::Integer { min } => format!("integer >= {}", min),
        other => other.schema().type_name(),
    }
}

pub fn response_label(response: &ResponseBody) -> String {
    match response {
        ResponseBody::Empty => "204 No Content".to_string(),
        ResponseBody::Entity(name) => name.to_string(),
        ResponseBody::Collection(name) => format!("collection of {}", name),
    }
}

/// Show an endpoint's parameters and schemas
pub fn describe_command(alias: &str) -> Result<()> {
    info!("Describing endpoint {}", alias);
    let endpoint = endpoints::resolve(alias)?;

    println!("{} {}", method_label(endpoint.method), endpoint.path.bold());
    println!("{}", endpoint.alias.cyan());
    println!("{}", endpoint.description);
    println!();

    if endpoint.parameters.is_empty() {
        println!("Parameters: none");
    } else {
        println!("Parameters:");
        let width = endpoint.parameters.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for parameter in endpoint.parameters {
            let required = if parameter.required {
                "required".red().to_string()
            } else {
                "optional".dimmed().to_string()
            };
            println!(
                "  {:<width$}  {:<6}  {}  {}  {}",
                parameter.name,
                parameter.location.to_string(),
                required,
                kind_label(&parameter.kind).yellow(),
                parameter.description.dimmed(),
                width = width
            );
        }
    }
    println!();

    println!("Request body: {}", endpoint.request.unwrap_or("none"));
    println!("Response: {}", response_label(&endpoint.response));
    for error in endpoint.errors {
        println!("Error {}: {} (OData error envelope)", error.status, error.description);
    }

    Ok(())
}

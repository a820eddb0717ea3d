use crate::cli::read_input;
use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;
use msgraph_client::api::endpoints::{self, Endpoint};
use msgraph_client::api::{GraphError, RequestParams};
use msgraph_client::config::Config;
use serde_json::Value;
use std::time::Instant;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Endpoint alias, e.g. getUser
    pub alias: String,

    /// Parameter as name=value; repeatable. Placed in path, query or header
    /// according to the endpoint declaration
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// JSON request body file, or - to read stdin
    #[arg(short, long)]
    pub body: Option<String>,

    /// Pretty print the response
    #[arg(long)]
    pub pretty: bool,

    /// Check parameters and body, print the request, and stop
    #[arg(long)]
    pub dry_run: bool,
}

/// Turn `name=value` arguments and an optional body into request parameters
pub fn build_params(endpoint: &Endpoint, raw_params: &[String], body: Option<Value>) -> Result<RequestParams> {
    let mut params = RequestParams::new();
    for raw in raw_params {
        let (name, value) = raw
            .split_once('=')
            .with_context(|| format!("Parameter '{}' must look like name=value", raw))?;
        params = params.bind(endpoint, name.trim(), value)?;
    }
    if let Some(body) = body {
        params = params.body(body);
    }
    Ok(params)
}

/// Run a request against Graph and print the validated response
pub async fn call_command(args: CallArgs) -> Result<()> {
    info!("Calling endpoint {}", args.alias);
    let endpoint = endpoints::resolve(&args.alias)?;

    let body = match &args.body {
        Some(source) => {
            let content = read_input(source)?;
            Some(serde_json::from_str::<Value>(&content).with_context(|| format!("{} is not valid JSON", source))?)
        }
        None => None,
    };
    let params = build_params(endpoint, &args.params, body)?;

    let config = Config::load()?;

    if args.dry_run {
        let client = config.build_client("<token>")?;
        let (_, request) = client.prepare(endpoint.alias, &params, "")?;
        println!("{} {}", request.method.as_str().bold(), request.url);
        for (name, value) in &request.headers {
            println!("{}: {}", name.dimmed(), value);
        }
        if let Some(body) = &request.body {
            println!("\n{}", serde_json::to_string_pretty(body)?);
        }
        return Ok(());
    }

    let client = config.build_client(Config::access_token()?)?;

    let start = Instant::now();
    let result = client.request(endpoint.alias, params).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Value::Null) => {
            println!("{} {} ({:.2?})", "✓".green(), "No content".green(), elapsed);
            Ok(())
        }
        Ok(value) => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", rendered);
            info!("{} completed in {:.2?}", endpoint.alias, elapsed);
            Ok(())
        }
        Err(GraphError::OData { status, error }) => {
            eprintln!("{} {} {}", "✗".red(), status.to_string().red().bold(), error.code().red());
            eprintln!("  {}", error.message());
            if let Some(request_id) = error.request_id() {
                eprintln!("  request-id: {}", request_id.dimmed());
            }
            anyhow::bail!("Graph returned {}", status)
        }
        Err(GraphError::InvalidResponse { status, source, .. }) => {
            eprintln!("{} response ({}) did not match the declared schema:", "✗".red(), status);
            for issue in &source.issues {
                eprintln!("  {}", issue);
            }
            anyhow::bail!("Invalid response from {}", endpoint.alias)
        }
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgraph_client::api::ParameterLocation;
    use serde_json::json;

    #[test]
    fn test_build_params_places_by_declaration() {
        let endpoint = endpoints::find("listEventInstances").unwrap();
        let params = build_params(
            endpoint,
            &[
                "event-id=AAMk=".to_string(),
                "startDateTime=2024-01-01T00:00:00Z".to_string(),
                "$top=5".to_string(),
            ],
            None,
        )
        .unwrap();

        assert_eq!(params.path.get("event-id").map(String::as_str), Some("AAMk="));
        assert!(params.query.contains(&("$top".to_string(), "5".to_string())));
        assert!(params.query.iter().any(|(k, _)| k == "startDateTime"));
    }

    #[test]
    fn test_build_params_errors() {
        let endpoint = endpoints::find("getUser").unwrap();
        assert!(build_params(endpoint, &["user-id".to_string()], None).is_err());

        let err = build_params(endpoint, &["$filter=x".to_string()], None).unwrap_err();
        let graph_error = err.downcast_ref::<GraphError>().unwrap();
        assert!(matches!(
            graph_error,
            GraphError::UndeclaredParameter { location: ParameterLocation::Query, .. }
        ));
    }

    #[test]
    fn test_build_params_body() {
        let endpoint = endpoints::find("createChannel").unwrap();
        let params = build_params(endpoint, &["team-id=t1".to_string()], Some(json!({"displayName": "x"}))).unwrap();
        assert_eq!(params.body, Some(json!({"displayName": "x"})));
    }
}

use anyhow::Result;
use colored::*;
use log::info;
use msgraph_client::api::endpoints::{self, Endpoint};
use msgraph_client::api::HttpMethod;

/// Endpoints whose alias or path contains `filter`, case-insensitively
pub fn matching(filter: Option<&str>) -> Vec<&'static Endpoint> {
    let needle = filter.map(str::to_lowercase);
    endpoints::all()
        .iter()
        .filter(|endpoint| match &needle {
            Some(needle) => {
                endpoint.alias.to_lowercase().contains(needle.as_str())
                    || endpoint.path.to_lowercase().contains(needle.as_str())
            }
            None => true,
        })
        .collect()
}

pub fn method_label(method: HttpMethod) -> ColoredString {
    let label = format!("{:<6}", method.as_str());
    match method {
        HttpMethod::Get => label.green(),
        HttpMethod::Post => label.yellow(),
        HttpMethod::Put | HttpMethod::Patch => label.blue(),
        HttpMethod::Delete => label.red(),
    }
}

/// List the endpoint table
pub fn endpoints_command(filter: Option<&str>) -> Result<()> {
    info!("Listing endpoints (filter: {:?})", filter);

    let endpoints = matching(filter);
    if endpoints.is_empty() {
        println!("No endpoints match '{}'.", filter.unwrap_or_default());
        return Ok(());
    }

    let width = endpoints.iter().map(|e| e.alias.len()).max().unwrap_or(0);
    for endpoint in &endpoints {
        println!(
            "{} {:<width$}  {}",
            method_label(endpoint.method),
            endpoint.alias.bold(),
            endpoint.path.dimmed(),
            width = width
        );
    }

    println!("\nTotal endpoints: {}", endpoints.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_alias_and_path() {
        assert_eq!(matching(None).len(), endpoints::all().len());

        let planner = matching(Some("PLANNER"));
        assert!(!planner.is_empty());
        assert!(planner.iter().all(|e| e.alias.to_lowercase().contains("planner")
            || e.path.contains("planner")));

        let by_path = matching(Some("/termStore/"));
        assert!(by_path.iter().any(|e| e.alias == "listTermChildren"));

        assert!(matching(Some("no-such-thing")).is_empty());
    }
}

use super::schema::lookup;
use crate::cli::read_input;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use msgraph_client::schema::{self, Issue, IssueCode, Registry};
use serde_json::Value;

/// Validate `payload` as `type_name`, returning every issue found
pub fn check(registry: &Registry, type_name: &str, payload: &Value) -> Result<Vec<Issue>> {
    let (_, schema) = lookup(registry, type_name)?;
    Ok(match schema.validate(payload, registry) {
        Ok(_) => Vec::new(),
        Err(error) => error.issues,
    })
}

fn code_label(code: IssueCode) -> &'static str {
    match code {
        IssueCode::InvalidType => "invalid_type",
        IssueCode::Required => "required",
        IssueCode::InvalidEnumValue => "invalid_enum_value",
        IssueCode::UnrecognizedKeys => "unrecognized_keys",
        IssueCode::InvalidUnion => "invalid_union",
        IssueCode::InvalidFormat => "invalid_format",
        IssueCode::UnresolvedReference => "unresolved_reference",
        IssueCode::TooDeep => "too_deep",
    }
}

/// Validate a JSON file (or stdin) against a schema type; fails when any issue is found
pub fn validate_command(type_name: &str, input: &str) -> Result<()> {
    info!("Validating {} as {}", input, type_name);

    let content = read_input(input)?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", input))?;

    let registry = schema::builtin();
    let issues = check(&registry, type_name, &payload)?;

    if issues.is_empty() {
        println!("{} {}", "✓".green(), format!("valid {}", type_name).green());
        return Ok(());
    }

    for issue in &issues {
        println!(
            "{} {}  {}  {}",
            "✗".red(),
            issue.path_string().bold(),
            issue.message,
            code_label(issue.code).dimmed()
        );
    }
    anyhow::bail!("{} validation issue(s) in {}", issues.len(), input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_collects_all_issues() {
        let registry = schema::builtin();
        let issues = check(
            &registry,
            "message",
            &json!({"isRead": "yes", "importance": "urgent", "toRecipients": [{"emailAddress": 5}]}),
        )
        .unwrap();

        let paths: Vec<String> = issues.iter().map(Issue::path_string).collect();
        assert_eq!(issues.len(), 3, "{:?}", paths);
        assert!(paths.contains(&"$.isRead".to_string()));
        assert!(paths.contains(&"$.toRecipients[0].emailAddress".to_string()));
        assert!(issues.iter().any(|i| i.code == IssueCode::InvalidEnumValue));
    }

    #[test]
    fn test_check_valid_payload() {
        let registry = schema::builtin();
        assert!(check(&registry, "graph.user", &json!({"id": "1"})).unwrap().is_empty());
        assert!(check(&registry, "nope", &json!({})).is_err());
    }

    #[test]
    fn test_validate_command_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"displayName": "General", "membershipType": "shared"}"#).unwrap();
        std::fs::write(&bad, r#"{"displayName": 42}"#).unwrap();

        assert!(validate_command("channel", good.to_str().unwrap()).is_ok());
        assert!(validate_command("channel", bad.to_str().unwrap()).is_err());
    }
}

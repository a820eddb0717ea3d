//! Consistency checks over the static endpoint table
//!
//! The table is hand-maintained, so these guard the invariants the client
//! relies on: unique aliases, declared path parameters, resolvable schemas.

use msgraph_client::api::endpoints::{self, params::SYSTEM_QUERY_OPTIONS};
use msgraph_client::api::{HttpMethod, ParameterLocation, ResponseBody};
use msgraph_client::schema;
use std::collections::{HashMap, HashSet};

#[test]
fn test_aliases_are_unique() {
    let mut seen = HashSet::new();
    for endpoint in endpoints::all() {
        assert!(seen.insert(endpoint.alias), "duplicate alias {}", endpoint.alias);
    }
    assert!(seen.len() >= 50);
}

#[test]
fn test_routes_are_unique() {
    let mut seen = HashSet::new();
    for endpoint in endpoints::all() {
        assert!(
            seen.insert((endpoint.method, endpoint.path)),
            "{} {} is declared twice",
            endpoint.method,
            endpoint.path
        );
    }
}

/// Declared path parameters are exactly the template placeholders
#[test]
fn test_path_parameters_match_placeholders() {
    for endpoint in endpoints::all() {
        let declared: Vec<&str> = endpoint
            .parameters_in(ParameterLocation::Path)
            .map(|p| p.name)
            .collect();
        assert_eq!(declared, endpoint.placeholders(), "{}", endpoint.alias);
        assert!(
            endpoint.parameters_in(ParameterLocation::Path).all(|p| p.required),
            "{} has an optional path parameter",
            endpoint.alias
        );
    }
}

#[test]
fn test_query_options_only_on_reads() {
    for endpoint in endpoints::all() {
        let options: Vec<&str> = endpoint
            .parameters_in(ParameterLocation::Query)
            .map(|p| p.name)
            .filter(|name| name.starts_with('$'))
            .collect();
        for option in &options {
            assert!(SYSTEM_QUERY_OPTIONS.contains(option), "{} on {}", option, endpoint.alias);
        }
        if endpoint.method != HttpMethod::Get {
            assert!(options.is_empty(), "{} takes query options", endpoint.alias);
        }
        if matches!(endpoint.response, ResponseBody::Collection(_)) {
            assert_eq!(options.len(), SYSTEM_QUERY_OPTIONS.len(), "{}", endpoint.alias);
        }
    }
}

#[test]
fn test_bodies_follow_methods() {
    for endpoint in endpoints::all() {
        match endpoint.method {
            HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put => {
                assert!(endpoint.request.is_some(), "{} has no request body", endpoint.alias)
            }
            HttpMethod::Get | HttpMethod::Delete => {
                assert!(endpoint.request.is_none(), "{} takes a body", endpoint.alias)
            }
        }
        if endpoint.method == HttpMethod::Delete {
            assert_eq!(endpoint.response, ResponseBody::Empty, "{}", endpoint.alias);
        }
    }
}

/// Every schema the table names exists in the built-in registry
#[test]
fn test_schemas_resolve() {
    let registry = schema::builtin();
    for endpoint in endpoints::all() {
        if let Some(request) = endpoint.request {
            assert!(registry.contains(request), "{} -> {}", endpoint.alias, request);
        }
        match endpoint.response {
            ResponseBody::Entity(name) | ResponseBody::Collection(name) => {
                assert!(registry.contains(name), "{} -> {}", endpoint.alias, name)
            }
            ResponseBody::Empty => {}
        }
        assert!(endpoint.declares_error(400), "{}", endpoint.alias);
        assert!(endpoint.declares_error(503), "{}", endpoint.alias);
    }
}

/// Rendering a template with its own placeholder names routes back to it
#[test]
fn test_render_then_route() {
    for endpoint in endpoints::all() {
        let values: HashMap<String, String> = endpoint
            .placeholders()
            .into_iter()
            .map(|name| (name.to_string(), format!("{}-value", name)))
            .collect();
        let path = endpoint.render_path(&values).unwrap();
        let found = endpoints::find_by_route(endpoint.method, &path)
            .unwrap_or_else(|| panic!("no route for {}", path));
        assert_eq!(found.alias, endpoint.alias, "{}", path);
    }
}

#[test]
fn test_etag_guarded_writes() {
    for alias in ["updatePlannerTask", "deletePlannerTask"] {
        let endpoint = endpoints::find(alias).unwrap();
        let if_match = endpoint.parameter("if-match", ParameterLocation::Header).unwrap();
        assert!(if_match.required, "{}", alias);
    }
}

#[test]
fn test_unknown_alias_suggests() {
    let err = endpoints::resolve("listChanels").unwrap_err();
    assert!(err.to_string().contains("did you mean 'listChannels'"), "{}", err);
    assert!(err.is_client_side());
}

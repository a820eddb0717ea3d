//! Reusable OData query options
//!
//! An `ODataQuery` carries the system query options of one request. It is
//! independent of any endpoint; the client checks the rendered options against
//! the parameters the endpoint declares.

use super::filters::Filter;
use super::orderby::OrderByClause;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ODataQuery {
    pub select: Option<Vec<String>>,
    pub filter: Option<Filter>,
    pub orderby: OrderByClause,
    pub expand: Option<Vec<String>>,
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub count: bool,
    pub search: Option<String>,
}

impl ODataQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> super::QueryBuilder {
        super::QueryBuilder::new()
    }

    /// Clone and modify - useful for creating variations of base queries
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_params().is_empty()
    }

    /// Query parameters in a stable order, values not yet percent-encoded
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(select) = &self.select {
            params.push(("$select".to_string(), select.join(",")));
        }

        if let Some(expand) = &self.expand {
            params.push(("$expand".to_string(), expand.join(",")));
        }

        if let Some(filter) = &self.filter {
            params.push(("$filter".to_string(), filter.to_odata_string()));
        }

        if let Some(orderby) = self.orderby.to_odata_string() {
            params.push(("$orderby".to_string(), orderby));
        }

        if let Some(search) = &self.search {
            params.push(("$search".to_string(), quote_search(search)));
        }

        if let Some(top) = self.top {
            params.push(("$top".to_string(), top.to_string()));
        }

        if let Some(skip) = self.skip {
            params.push(("$skip".to_string(), skip.to_string()));
        }

        if self.count {
            params.push(("$count".to_string(), "true".to_string()));
        }

        params
    }

    /// Render as a query string, e.g. `$select=id&$top=5`
    pub fn to_query_string(&self) -> String {
        self.to_query_params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Graph requires `$search` phrases to be wrapped in double quotes
fn quote_search(search: &str) -> String {
    if search.starts_with('"') && search.ends_with('"') && search.len() >= 2 {
        search.to_string()
    } else {
        format!("\"{}\"", search)
    }
}

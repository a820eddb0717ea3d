//! Fluent construction of [`ODataQuery`] values

use chrono::{DateTime, Utc};

use super::filters::Filter;
use super::orderby::OrderBy;
use super::query::ODataQuery;

/// Builds an [`ODataQuery`]; `build()` hands back a value that can be cloned
/// and reused across requests.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: ODataQuery,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `$select`
    pub fn select(mut self, properties: &[&str]) -> Self {
        self.query.select = Some(owned(properties));
        self
    }

    /// `$expand`, e.g. `manager($select=id)`
    pub fn expand(mut self, navigations: &[&str]) -> Self {
        self.query.expand = Some(owned(navigations));
        self
    }

    /// Replaces any filter set so far
    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Conjoins with the current filter; repeated calls flatten into one `and`
    pub fn and_filter(mut self, filter: Filter) -> Self {
        let combined = match self.query.filter.take() {
            None => filter,
            Some(Filter::And(mut terms)) => {
                terms.push(filter);
                Filter::And(terms)
            }
            Some(current) => Filter::and(vec![current, filter]),
        };
        self.query.filter = Some(combined);
        self
    }

    pub fn orderby(mut self, order: OrderBy) -> Self {
        self.query.orderby = self.query.orderby.add(order);
        self
    }

    pub fn top(mut self, top: u32) -> Self {
        self.query.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.query.skip = Some(skip);
        self
    }

    /// Page `index` (zero based) of `size` items
    pub fn page(self, size: u32, index: u32) -> Self {
        let builder = self.top(size);
        if index == 0 {
            builder
        } else {
            builder.skip(size.saturating_mul(index))
        }
    }

    /// `$count=true`
    pub fn count(mut self) -> Self {
        self.query.count = true;
        self
    }

    /// `$search`; quoting is applied when the query is rendered
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.query.search = Some(search.into());
        self
    }

    /// Items whose `property` is at or after `instant`
    pub fn since(self, property: &str, instant: DateTime<Utc>) -> Self {
        self.and_filter(Filter::ge(property, instant))
    }

    /// Newest first by `property`
    pub fn latest_by(self, property: &str) -> Self {
        self.orderby(OrderBy::desc(property))
    }

    pub fn build(self) -> ODataQuery {
        self.query
    }
}

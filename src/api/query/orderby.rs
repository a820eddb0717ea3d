//! `$orderby` clauses

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// One sort key, e.g. `receivedDateTime desc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub property: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Descending,
        }
    }

    pub fn to_odata_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        write!(f, "{} {}", self.property, direction)
    }
}

/// Parses `property`, `property asc` or `property desc`
impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err("empty orderby clause".to_string()),
            [property] | [property, "asc"] => Ok(OrderBy::asc(*property)),
            [property, "desc"] => Ok(OrderBy::desc(*property)),
            [_, direction] => Err(format!("unknown sort direction '{}'", direction)),
            _ => Err(format!("unexpected tokens in orderby clause '{}'", s)),
        }
    }
}

/// Ordered list of sort keys, rendered comma-separated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderByClause(Vec<OrderBy>);

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, order: OrderBy) -> Self {
        self.0.push(order);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` when no keys were added, so the option is left off the URL
    pub fn to_odata_string(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().map(OrderBy::to_string).collect::<Vec<_>>().join(","))
    }
}

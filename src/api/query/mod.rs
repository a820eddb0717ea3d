//! OData query options
//!
//! Follows the same pattern as the rest of the API layer: `ODataQuery`
//! (reusable) and `QueryBuilder` (fluent). Options are plain query parameters;
//! nothing here pages or retries.

pub mod builder;
pub mod filters;
pub mod orderby;
pub mod query;
pub mod result;

pub use builder::QueryBuilder;
pub use filters::{Filter, FilterValue};
pub use orderby::{Direction, OrderBy, OrderByClause};
pub use query::ODataQuery;
pub use result::ODataCollection;

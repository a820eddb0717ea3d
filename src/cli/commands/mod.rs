pub mod call;
pub mod config;
pub mod describe;
pub mod endpoints;
pub mod schema;
pub mod validate;

pub use call::{CallArgs, call_command};
pub use config::config_command;
pub use describe::describe_command;
pub use endpoints::endpoints_command;
pub use schema::schema_command;
pub use validate::validate_command;

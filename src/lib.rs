//! Microsoft Graph v1.0 for Rust
//!
//! - [`schema`]: runtime validators transcribed from the Graph CSDL metadata
//! - [`models`]: typed serde models for the same types
//! - [`api`]: the endpoint table and a client that validates both directions
//! - [`config`]: TOML settings shared by the `msgraph` binary

pub mod api;
pub mod config;
pub mod models;
pub mod schema;

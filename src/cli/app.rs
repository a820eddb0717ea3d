use super::commands::CallArgs;
use super::commands::config::ConfigCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "msgraph", version)]
#[command(about = "Inspect, validate and call the Microsoft Graph v1.0 API")]
pub struct Cli {
    /// Log at debug level to stderr instead of msgraph.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the endpoint table
    Endpoints {
        /// Only show endpoints whose alias or path contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show an endpoint's parameters, body and responses
    Describe {
        /// Endpoint alias, e.g. listUsers
        alias: String,
    },
    /// Print the fields of a schema type
    Schema {
        /// Type name, e.g. user, graph.message or microsoft.graph.termStore.term
        type_name: String,
    },
    /// Validate a JSON payload against a schema type
    Validate {
        /// Type name, e.g. user
        type_name: String,
        /// JSON file, or - to read stdin
        input: String,
    },
    /// Call an endpoint with the token from GRAPH_ACCESS_TOKEN
    Call(CallArgs),
    /// Configuration management
    Config(ConfigCommands),
}

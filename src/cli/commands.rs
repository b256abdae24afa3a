use crate::client::DEFAULT_ENDPOINT;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "userql")]
#[command(
    author,
    version,
    about = "A read-only user directory served over GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .userql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Port to listen on [default: 4000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind [default: 0.0.0.0]
        #[arg(long)]
        host: Option<String>,
    },

    /// Execute a GraphQL query against the local directory
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// List all users in the local directory
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the GraphQL schema (SDL)
    Sdl,

    /// Fetch users from a running GraphQL endpoint
    Fetch {
        /// GraphQL endpoint URL
        #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Test the connection with a GET before fetching
        #[arg(long)]
        check: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

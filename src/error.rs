use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate user email: {0}")]
    DuplicateEmail(String),

    #[error("User store must contain at least one record")]
    EmptyStore,

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Remote GraphQL error: {0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UserqlError>;

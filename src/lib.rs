//! # userql - a read-only user directory over GraphQL
//!
//! userql serves a small, fixed set of user records (email, display name,
//! domain) through a GraphQL endpoint. Records are loaded once at startup,
//! either from the built-in seed or from a YAML/JSON seed file, and never
//! change while the process runs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://localhost:4000/
//! userql serve
//!
//! # Ask a running server for its users
//! userql fetch --endpoint http://localhost:4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`client`]: Client for remote directory endpoints
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and server
//! - [`model`]: Data models
//! - [`store`]: Immutable in-memory user store

/// Command-line interface definitions using clap.
pub mod cli;

/// Blocking HTTP client for remote GraphQL user directories.
pub mod client;

/// Configuration loading.
///
/// Handles `.userql.yml` discovery and server/data settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines `UserqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for userql.
pub mod model;

pub mod store;

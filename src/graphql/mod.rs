//! GraphQL schema, resolvers and HTTP server for userql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server on port 4000
//! userql serve
//!
//! # Execute a query without starting a server
//! userql query '{ user(email: "admin@open-metadata.org") { displayName domain } }'
//! ```
//!
//! ## Schema
//!
//! ```graphql
//! type User { email: String! displayName: String! domain: String! }
//! type Query { users: [User!]! user(email: String!): User }
//! ```

mod schema;
mod server;
mod types;

pub use schema::{QueryRoot, UserSchema, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;

//! Data models for userql.
//!
//! - [`User`]: A directory entry keyed by email, carrying a display name and
//!   the organizational domain the user belongs to.

mod user;

pub use user::User;

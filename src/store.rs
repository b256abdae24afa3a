//! Read-only user directory backing the GraphQL resolvers.
//!
//! The store is built once at startup and never mutated afterwards, so it can
//! be cloned into any number of request handlers and read without locking.

use crate::{
    error::{Result, UserqlError},
    model::User,
};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Source of user records for the query resolvers.
pub trait UserSource: Send + Sync {
    /// All records, in store order.
    fn users(&self) -> &[User];

    /// First record whose email equals `email` exactly (case-sensitive).
    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users().iter().find(|u| u.email == email)
    }
}

/// Immutable, ordered, in-memory user store.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Arc<[User]>,
}

impl UserStore {
    /// Build a store from `users`, keeping their order.
    ///
    /// Fails if the list is empty or two records share an email, so lookups
    /// by email always have at most one candidate.
    pub fn new(users: Vec<User>) -> Result<Self> {
        if users.is_empty() {
            return Err(UserqlError::EmptyStore);
        }

        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.email.as_str()) {
                return Err(UserqlError::DuplicateEmail(user.email.clone()));
            }
        }

        Ok(Self {
            users: users.into(),
        })
    }

    /// The built-in seed records.
    pub fn seed() -> Self {
        Self {
            users: seed_users().into(),
        }
    }

    /// Load records from a YAML (or JSON) list of users.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let users: Vec<User> = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), count = users.len(), "Loaded seed file");
        Self::new(users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seed()
    }
}

impl UserSource for UserStore {
    fn users(&self) -> &[User] {
        &self.users
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User::new("admin@open-metadata.org", "Admin Super User", "Finance"),
        User::new("aaron_johnson0@gmail.com", "Aaron Johnson", "Marketing"),
        User::new("brian_smith7@gmail.com", "Brian Smith", "Finance"),
    ]
}

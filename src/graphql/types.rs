use crate::model;
use async_graphql::SimpleObject;

/// A user directory entry
#[derive(SimpleObject, Clone)]
pub struct User {
    /// Unique email address, used as the lookup key
    pub email: String,
    pub display_name: String,
    /// Organizational domain, e.g. "Finance"
    pub domain: String,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            email: u.email,
            display_name: u.display_name,
            domain: u.domain,
        }
    }
}

impl From<&model::User> for User {
    fn from(u: &model::User) -> Self {
        u.clone().into()
    }
}

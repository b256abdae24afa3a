use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

use crate::store::UserSource;

use super::types::*;

pub type UserSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema<S>(source: S) -> UserSchema
where
    S: UserSource + 'static,
{
    Schema::build(QueryRoot::new(source), EmptyMutation, EmptySubscription).finish()
}

pub struct QueryRoot {
    source: Arc<dyn UserSource>,
}

impl QueryRoot {
    pub fn new<S>(source: S) -> Self
    where
        S: UserSource + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }
}

#[Object(name = "Query")]
impl QueryRoot {
    /// List every user in directory order
    async fn users(&self) -> Vec<User> {
        let users = self.source.users();
        tracing::debug!(count = users.len(), "Resolving users");
        users.iter().map(User::from).collect()
    }

    /// Get a single user by exact email, or null if there is none
    async fn user(&self, email: String) -> Option<User> {
        let found = self.source.find_by_email(&email);
        tracing::debug!(%email, found = found.is_some(), "Resolving user");
        found.map(User::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserStore;
    use async_graphql::Request;
    use serde_json::{Value, json};

    async fn execute(query: &str) -> async_graphql::Response {
        build_schema(UserStore::seed())
            .execute(Request::new(query))
            .await
    }

    fn data(response: async_graphql::Response) -> Value {
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_users_in_seed_order() {
        let value = data(execute("{ users { email displayName domain } }").await);
        assert_eq!(
            value,
            json!({
                "users": [
                    {
                        "email": "admin@open-metadata.org",
                        "displayName": "Admin Super User",
                        "domain": "Finance"
                    },
                    {
                        "email": "aaron_johnson0@gmail.com",
                        "displayName": "Aaron Johnson",
                        "domain": "Marketing"
                    },
                    {
                        "email": "brian_smith7@gmail.com",
                        "displayName": "Brian Smith",
                        "domain": "Finance"
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_user_by_email() {
        let value = data(
            execute(r#"{ user(email: "admin@open-metadata.org") { displayName domain } }"#).await,
        );
        assert_eq!(
            value,
            json!({ "user": { "displayName": "Admin Super User", "domain": "Finance" } })
        );
    }

    #[tokio::test]
    async fn test_user_not_found_is_null() {
        let value =
            data(execute(r#"{ user(email: "nonexistent@example.com") { email } }"#).await);
        assert_eq!(value, json!({ "user": null }));
    }

    #[tokio::test]
    async fn test_missing_email_argument_is_rejected() {
        let response = execute("{ user { email } }").await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.data, async_graphql::Value::Null);
    }

    #[tokio::test]
    async fn test_undeclared_field_is_rejected() {
        let response = execute("{ users { id email } }").await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0].message.contains("id"));
        assert_eq!(response.data, async_graphql::Value::Null);
    }

    #[tokio::test]
    async fn test_custom_source() {
        struct Single(Vec<crate::model::User>);

        impl UserSource for Single {
            fn users(&self) -> &[crate::model::User] {
                &self.0
            }
        }

        let schema = build_schema(Single(vec![crate::model::User::new(
            "solo@example.com",
            "Solo",
            "Research",
        )]));
        let response = schema.execute("{ users { email } }").await;
        assert_eq!(
            data(response),
            json!({ "users": [{ "email": "solo@example.com" }] })
        );
    }
}

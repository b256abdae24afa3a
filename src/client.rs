//! Blocking client for a remote userql (or compatible) GraphQL endpoint.

use crate::error::{Result, UserqlError};
use crate::model::User;
use serde::Deserialize;
use std::sync::Once;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000";

const USERS_QUERY: &str = "{ users { email displayName domain } }";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

static CRYPTO_PROVIDER: Once = Once::new();

/// Install ring as the process-wide rustls provider. Safe to call repeatedly.
pub fn install_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        // Err: a provider is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[derive(Deserialize)]
struct GraphQlEnvelope {
    data: Option<UsersData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct UsersData {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

pub struct RemoteDirectory {
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl RemoteDirectory {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        install_crypto_provider();
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch every user the remote directory exposes.
    pub fn fetch_users(&self) -> Result<Vec<User>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching users");
        let envelope: GraphQlEnvelope = self
            .http
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "query": USERS_QUERY }))
            .send()?
            .error_for_status()?
            .json()?;

        parse_envelope(envelope)
    }

    /// Verify the endpoint answers a plain GET.
    pub fn check(&self) -> Result<()> {
        self.http
            .get(self.endpoint.clone())
            .timeout(CHECK_TIMEOUT)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

fn parse_envelope(envelope: GraphQlEnvelope) -> Result<Vec<User>> {
    if !envelope.errors.is_empty() {
        let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(UserqlError::Remote(messages.join("; ")));
    }
    envelope
        .data
        .map(|d| d.users)
        .ok_or_else(|| UserqlError::Remote("Response carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<User>> {
        parse_envelope(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_parse_users() {
        let users = parse(
            r#"{"data":{"users":[{"email":"a@example.com","displayName":"A","domain":"Finance"}]}}"#,
        )
        .unwrap();
        assert_eq!(users, vec![User::new("a@example.com", "A", "Finance")]);
    }

    #[test]
    fn test_parse_errors() {
        let result = parse(r#"{"data":null,"errors":[{"message":"boom"},{"message":"bang"}]}"#);
        match result {
            Err(UserqlError::Remote(msg)) => assert_eq!(msg, "boom; bang"),
            other => panic!("expected remote error, got {:?}", other.map(|u| u.len())),
        }
    }

    #[test]
    fn test_parse_missing_data() {
        assert!(matches!(parse("{}"), Err(UserqlError::Remote(_))));
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        assert!(matches!(
            RemoteDirectory::new("not a url"),
            Err(UserqlError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_new_accepts_default_endpoint() {
        let remote = RemoteDirectory::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(remote.endpoint().port(), Some(4000));
    }
}

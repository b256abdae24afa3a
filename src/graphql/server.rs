use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::error::{Result, UserqlError};

use super::UserSchema;

/// Queries printed at startup as a hint for first-time users.
const EXAMPLE_QUERIES: [(&str, &str); 2] = [
    ("All users", "{ users { email displayName domain } }"),
    (
        "Specific user",
        r#"{ user(email: "admin@open-metadata.org") { email displayName domain } }"#,
    ),
];

/// `POST /` executes GraphQL requests, `GET /` serves GraphiQL.
pub fn router(schema: UserSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Bind `addr` and serve until Ctrl-C. Bind failures are not retried.
pub async fn run_server(schema: UserSchema, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| UserqlError::Bind { addr, source })?;
    serve(listener, schema).await
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, schema: UserSchema) -> Result<()> {
    announce(listener.local_addr()?);

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

fn announce(addr: SocketAddr) {
    tracing::info!("GraphQL server ready at {}", ready_url(addr));
    tracing::info!("Try querying:");
    for (label, query) in EXAMPLE_QUERIES {
        tracing::info!("- {}: {}", label, query);
    }
}

/// Wildcard binds are reported as `localhost`.
fn ready_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{}/", addr)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

use crate::graphql::{build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let addr = ctx
        .config
        .server
        .clone()
        .with_overrides(port, host)
        .socket_addr()?;
    let store = ctx.user_store()?;
    tracing::info!(users = store.len(), %addr, "Starting GraphQL server");

    let schema = build_schema(store);
    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, addr))
        .inspect_err(|e| tracing::error!(error = %e, "Error starting server"))?;
    Ok(())
}

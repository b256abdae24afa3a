use crate::client::RemoteDirectory;
use anyhow::{Context, Result};
use colored::Colorize;

use super::utils::print_user_list;

pub fn handle_fetch(endpoint: String, check: bool, json: bool) -> Result<()> {
    let remote = RemoteDirectory::new(&endpoint)
        .with_context(|| format!("Cannot use endpoint {}", endpoint))?;

    if check {
        remote
            .check()
            .with_context(|| format!("Connection test failed for {}", remote.endpoint()))?;
        tracing::info!(endpoint = %remote.endpoint(), "Connection test passed");
    }

    let users = remote
        .fetch_users()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch users from GraphQL"))
        .with_context(|| format!("Failed to fetch users from {}", remote.endpoint()))?;
    tracing::info!(count = users.len(), "Fetched users");

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        println!(
            "{} {} users from {}\n",
            "Fetched".green(),
            users.len(),
            remote.endpoint()
        );
        print_user_list(&users);
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use userql::cli::handlers::{
    CommandContext, handle_fetch, handle_list, handle_query, handle_sdl, handle_serve,
};
use userql::cli::{Cli, Commands};
use userql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Serve { port, host } => handle_serve(load_context(cli.config)?, port, host),
        Commands::Query { query, variables } => {
            handle_query(load_context(cli.config)?, query, variables)
        }
        Commands::List { json } => handle_list(load_context(cli.config)?, json),
        Commands::Sdl => handle_sdl(),
        Commands::Fetch {
            endpoint,
            check,
            json,
        } => handle_fetch(endpoint, check, json),
    }
}

fn load_context(config: Option<String>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    CommandContext::load(config.as_deref(), &cwd)
}

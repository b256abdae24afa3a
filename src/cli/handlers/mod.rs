mod fetch;
mod list;
mod query;
mod sdl;
mod serve;
mod utils;

pub use fetch::handle_fetch;
pub use list::handle_list;
pub use query::handle_query;
pub use sdl::handle_sdl;
pub use serve::handle_serve;

use crate::config::UserqlConfig;
use crate::store::UserStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: UserqlConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: UserqlConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Resolve the config from an explicit path, or search upward from `cwd`.
    pub fn load(config_path: Option<&str>, cwd: &Path) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => UserqlConfig::load_file(&cwd.join(path)),
            None => UserqlConfig::load(cwd),
        }
        .context("Failed to load userql configuration")?;
        Ok(Self::new(config, root))
    }

    pub fn user_store(&self) -> Result<UserStore> {
        self.config
            .user_store(&self.root)
            .context("Failed to load user directory")
    }
}

use crate::error::{Result, UserqlError};
use crate::store::UserStore;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".userql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    /// YAML or JSON list of users replacing the built-in seed records.
    /// Relative paths resolve against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,
}

impl ServerSettings {
    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(mut self, port: Option<u16>, host: Option<String>) -> Self {
        if let Some(p) = port {
            self.port = p;
        }
        if let Some(h) = host {
            self.host = h;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| UserqlError::Config(format!("Invalid server host: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl UserqlConfig {
    /// Load the nearest config file above `start_path`, falling back to
    /// defaults rooted at `start_path` when none exists.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load_file(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    /// Load an explicit config file. Missing files are an error here.
    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            UserqlError::Config(format!("Cannot read {}: {}", config_path.display(), e))
        })?;
        let config: UserqlConfig = serde_yaml::from_str(&content)?;
        let root = config_path
            .parent()
            .ok_or_else(|| UserqlError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn seed_path(&self, root: &Path) -> Option<PathBuf> {
        self.data.seed_file.as_ref().map(|f| root.join(f))
    }

    /// Build the user store this config describes.
    pub fn user_store(&self, root: &Path) -> Result<UserStore> {
        match self.seed_path(root) {
            Some(path) => UserStore::from_file(&path),
            None => Ok(UserStore::seed()),
        }
    }
}

use std::path::PathBuf;

use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "server_config.yaml";

/// Assets shipped with this crate, independent of the working directory.
pub const DEFAULT_STATIC_FILES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_files_path: PathBuf,
    /// Reject submitted boards whose X/O counts cannot arise from legal play.
    pub validate_boards: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_files_path: PathBuf::from(DEFAULT_STATIC_FILES_PATH),
            validate_boards: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port must be between 1 and 65535".to_string());
        }
        if self.static_files_path.as_os_str().is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        Ok(())
    }
}

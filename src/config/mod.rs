//! Configuration module
//!
//! Everything has a working default, so a config file is optional:
//! `embot.toml` in the working directory (or the path in `EMBOT_CONFIG`)
//! is read if present, then environment variables override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Sibling entry point that starts the backend server.
pub const BACKEND_SCRIPT: &str = "run_backend.py";

/// Sibling entry point that accepts a single database action keyword.
pub const DB_MANAGER_SCRIPT: &str = "db_manager.py";

/// Sibling entry point that seeds the RAG knowledge base.
pub const RAG_INIT_SCRIPT: &str = "init_rag_knowledge.py";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interpreter used to launch the sibling scripts
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Directory containing the sibling scripts
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    /// Base URL of the running backend
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Timeout for backend HTTP calls
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            scripts_dir: default_scripts_dir(),
            server_url: default_server_url(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration: file (if any), then environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var("EMBOT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("embot.toml"));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from an explicit config file, still honoring env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(interpreter) = std::env::var("EMBOT_PYTHON") {
            self.interpreter = interpreter;
        }
        if let Ok(dir) = std::env::var("EMBOT_SCRIPTS_DIR") {
            self.scripts_dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var("EMBOT_SERVER_URL") {
            self.server_url = url;
        }
    }

    /// Path to a sibling script under `scripts_dir`
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_dir.join(name)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

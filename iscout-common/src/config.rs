//! Configuration loading and data directory resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the SQLite database file inside the data directory
pub const DATABASE_FILE: &str = "influencers.db";

/// Environment variable holding the Anthropic credential
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Runtime settings supplied via process environment at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Anthropic API key (required)
    pub api_key: String,
    /// HTTP listen port
    pub port: u16,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// The API key is required; the port defaults when absent.
    pub fn from_env(port: u16) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} not set", API_KEY_ENV)))?;

        Ok(Self { api_key, port })
    }
}

/// Data directory resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. ISCOUT_DATA environment variable
/// 3. TOML config file (`data_dir` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("ISCOUT_DATA") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = config_file_path() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return PathBuf::from(data_dir);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_dir()
}

/// Create the data directory if missing and return the database path
pub fn ensure_data_dir(data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| Error::Config(format!("Cannot create data directory {:?}: {}", data_dir, e)))?;
    Ok(data_dir.join(DATABASE_FILE))
}

/// Get the configuration file path for the platform
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("iscout").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// Get OS-dependent default data directory path
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("iscout"))
        .unwrap_or_else(|| PathBuf::from("./iscout_data"))
}

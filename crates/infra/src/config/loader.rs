//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PPE_API_HOST`: Service host, expanded to `https://<host>/api`
//! - `PPE_API_BASE_URL`: Full API root (overrides `PPE_API_HOST`)
//! - `PPE_API_USER`: API user sent in the `X-User` header
//! - `PPE_API_PASSWORD`: API password sent in the `X-Password` header
//! - `PPE_API_TIMEOUT_SECS`: Optional per-request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./ppe.json` or `./ppe.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../ppe.json` or `../ppe.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use ppe_domain::{ApiConfig, Credentials, PpeConfig, PpeError, Result};

const FILE_NAMES: [&str; 4] = ["ppe.json", "ppe.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PpeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<PpeConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PpeError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<PpeConfig> {
    let host = env_opt("PPE_API_HOST");
    let base_url = env_opt("PPE_API_BASE_URL");
    let user = env_var("PPE_API_USER")?;
    let password = env_var("PPE_API_PASSWORD")?;

    let timeout_secs = env_opt("PPE_API_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>().map_err(|e| PpeError::Config(format!("Invalid API timeout: {}", e)))
        })
        .transpose()?;

    let config = PpeConfig {
        api: ApiConfig { host, base_url, timeout_secs },
        credentials: Credentials::new(user, password),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PpeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<PpeConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PpeError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PpeError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PpeError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<PpeConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PpeError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PpeError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PpeError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the
/// executable's directory for `ppe.{json,toml}` and `config.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `PpeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| PpeError::Config(format!("Missing required environment variable: {}", key)))
}

/// Optional environment variable; blank counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

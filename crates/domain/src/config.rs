//! Client configuration value objects
//!
//! Loaded by `ppe_infra::config` from the environment or a JSON/TOML file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PpeError, Result};

/// Top-level configuration for the API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpeConfig {
    pub api: ApiConfig,
    pub credentials: Credentials,
}

impl PpeConfig {
    /// Check that the configuration can produce a working client.
    ///
    /// # Errors
    /// Returns `PpeError::Config` if no API address is configured or the
    /// credentials are blank.
    pub fn validate(&self) -> Result<()> {
        self.api.api_root()?;
        self.credentials.validate()
    }
}

/// Where the API lives and how long a single call may take
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service host, e.g. `us1.proofpointessentials.com`. Expanded to
    /// `https://<host>/api`.
    #[serde(default)]
    pub host: Option<String>,
    /// Full API root; takes precedence over `host` when set.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout. `None` keeps the HTTP stack's defaults.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Configuration for a service host with no timeout.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self { host: Some(host.into()), ..Self::default() }
    }

    /// Configuration for an explicit API root with no timeout.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), ..Self::default() }
    }

    /// Resolve the API root every request path is appended to.
    ///
    /// # Errors
    /// Returns `PpeError::Config` if neither `base_url` nor `host` is set.
    pub fn api_root(&self) -> Result<String> {
        if let Some(base_url) = self.base_url.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            return Ok(base_url.trim_end_matches('/').to_string());
        }

        match self.host.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(host) => Ok(format!("https://{}/api", host.trim_end_matches('/'))),
            None => Err(PpeError::Config("API host or base URL must be configured".to_string())),
        }
    }
}

/// Static credentials sent as identity headers on every request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self { user: user.into(), password: password.into() }
    }

    /// # Errors
    /// Returns `PpeError::Config` if the user or password is blank.
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(PpeError::Config("API user must not be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(PpeError::Config("API password must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

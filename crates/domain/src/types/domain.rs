//! Mail domain types

use serde::{Deserialize, Serialize};

use crate::{PpeError, Result};

/// A mail domain configured under an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Primary domain of the owning organization
    pub organization: String,
    pub name: String,
    /// Mail server inbound mail is delivered to
    pub destination: String,
    pub failover: String,
    pub relay: bool,
    pub active: bool,
}

/// Request shape for creating a domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewDomain {
    pub domain_name: String,
    pub destination: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub failover: String,
    #[serde(rename = "is_relay", serialize_with = "super::flag::serialize")]
    pub relay: bool,
    #[serde(rename = "is_active", serialize_with = "super::flag::serialize")]
    pub active: bool,
}

impl NewDomain {
    /// An active, non-relay domain delivering to `destination`.
    pub fn new(domain_name: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            destination: destination.into(),
            active: true,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `PpeError::InvalidInput` if the domain name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.domain_name.trim().is_empty() {
            return Err(PpeError::InvalidInput("domain_name must not be empty".to_string()));
        }
        Ok(())
    }
}

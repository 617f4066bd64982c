//! User types
//!
//! Mailbox identities that belong to an organization.

use serde::{Deserialize, Serialize};

use crate::{PpeError, Result};

/// A user (mailbox) under an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary domain of the owning organization
    pub organization: String,
    pub firstname: String,
    pub surname: String,
    /// Primary email address
    pub email: String,
    /// Alias addresses in server order, duplicates included
    pub aliases: Vec<String>,
    pub white_list_senders: Vec<String>,
    pub black_list_senders: Vec<String>,
    pub active: bool,
    /// Role category as reported by the service (e.g. `end_user`)
    pub user_type: String,
}

/// Request shape for creating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub primary_email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firstname: String,
    pub lastname: String,
    pub alias_emails: Vec<String>,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl NewUser {
    pub fn new(primary_email: impl Into<String>, user_type: impl Into<String>) -> Self {
        Self { primary_email: primary_email.into(), user_type: user_type.into(), ..Self::default() }
    }

    /// # Errors
    /// Returns `PpeError::InvalidInput` if the primary email is blank or has
    /// no `@`.
    pub fn validate(&self) -> Result<()> {
        let email = self.primary_email.trim();
        if email.is_empty() {
            return Err(PpeError::InvalidInput("primary_email must not be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(PpeError::InvalidInput(format!(
                "primary_email is not an email address: {email}"
            )));
        }
        Ok(())
    }
}

//! Organization types
//!
//! An organization is a tenant account keyed by its primary domain. The
//! primary domain appears in the path of nearly every sub-resource request.

use serde::{Deserialize, Serialize};

use super::{NewUser, User};
use crate::{PpeError, Result};

/// A tenant account as last reported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub primary_domain: String,
    /// Account category as reported by the service (e.g. `customer`, `partner`)
    pub org_type: String,
    pub user_licenses: u32,
    pub active_users: u32,
    pub licensing_package: String,
    pub on_trial: bool,
    pub when_renewal: String,
    pub www: String,
    pub address: String,
    pub postcode: String,
    pub country: String,
    pub phone: String,
    pub outgoing_servers: Vec<String>,
    pub white_list_senders: Vec<String>,
    pub black_list_senders: Vec<String>,
    pub active: bool,
    pub admin_user: Option<User>,
    /// Member domain names in server order; drives positional alignment of
    /// the domain listing.
    domain_names: Vec<String>,
}

impl Organization {
    /// A bare organization handle, e.g. to address a known primary domain
    /// without fetching it first.
    pub fn new(name: impl Into<String>, primary_domain: impl Into<String>) -> Self {
        Self { name: name.into(), primary_domain: primary_domain.into(), ..Self::default() }
    }

    /// Replace the recorded member domain names.
    #[must_use]
    pub fn with_domain_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Member domain names recorded when the organization was fetched.
    pub fn domain_names(&self) -> &[String] {
        &self.domain_names
    }
}

/// Domain entry in an organization creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrganizationDomain {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl NewOrganizationDomain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), destination: None }
    }
}

/// Request shape for creating a sub-organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub primary_domain: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub org_type: String,
    pub admin_user: NewUser,
    pub domains: Vec<NewOrganizationDomain>,
    #[serde(rename = "user_licences", skip_serializing_if = "Option::is_none")]
    pub user_licenses: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub licensing_package: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub www: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postcode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

impl NewOrganization {
    /// Organization whose primary domain is also its only member domain.
    pub fn new(
        name: impl Into<String>,
        primary_domain: impl Into<String>,
        admin_user: NewUser,
    ) -> Self {
        let primary_domain = primary_domain.into();
        Self {
            name: name.into(),
            domains: vec![NewOrganizationDomain::new(primary_domain.clone())],
            primary_domain,
            admin_user,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `PpeError::InvalidInput` if the name or primary domain is
    /// blank, or the admin user is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PpeError::InvalidInput("organization name must not be empty".to_string()));
        }
        if self.primary_domain.trim().is_empty() {
            return Err(PpeError::InvalidInput("primary_domain must not be empty".to_string()));
        }
        self.admin_user.validate()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_handle_has_no_recorded_domains() {
        let org = Organization::new("Example", "example.com");
        assert_eq!(org.primary_domain, "example.com");
        assert!(org.domain_names().is_empty());
    }

    #[test]
    fn domain_names_keep_order_and_duplicates() {
        let org =
            Organization::new("Example", "example.com").with_domain_names(["b.com", "a.com", "b.com"]);
        assert_eq!(org.domain_names(), ["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn creation_shape_nests_admin_and_domains() {
        let mut new_org = NewOrganization::new(
            "Example Ltd",
            "example.com",
            NewUser::new("admin@example.com", "organization_admin"),
        );
        new_org.user_licenses = Some(25);

        assert_eq!(
            serde_json::to_value(&new_org).unwrap(),
            json!({
                "name": "Example Ltd",
                "primary_domain": "example.com",
                "admin_user": {
                    "primary_email": "admin@example.com",
                    "lastname": "",
                    "alias_emails": [],
                    "type": "organization_admin"
                },
                "domains": [{ "name": "example.com" }],
                "user_licences": 25
            })
        );
    }

    #[test]
    fn validation_checks_admin_user() {
        let new_org = NewOrganization::new("Example", "example.com", NewUser::default());
        assert!(matches!(new_org.validate(), Err(PpeError::InvalidInput(_))));
    }
}

//! Wire (JSON) resource shapes returned by the service
//!
//! Every field tolerates being absent or `null`; activity and relay flags
//! arrive as integers and become `bool` here.

use ppe_domain::{Domain, Organization, User};
use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Non-zero means set.
fn flag(value: i64) -> bool {
    value != 0
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OrgResponse {
    #[serde(deserialize_with = "null_as_default")]
    primary_domain: String,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    org_type: String,
    #[serde(deserialize_with = "null_as_default")]
    www: String,
    #[serde(deserialize_with = "null_as_default")]
    address: String,
    #[serde(deserialize_with = "null_as_default")]
    postcode: String,
    #[serde(deserialize_with = "null_as_default")]
    country: String,
    #[serde(deserialize_with = "null_as_default")]
    phone: String,
    #[serde(deserialize_with = "null_as_default")]
    active_users: u32,
    #[serde(deserialize_with = "null_as_default")]
    licensing_package: String,
    #[serde(deserialize_with = "null_as_default")]
    user_licences: u32,
    #[serde(deserialize_with = "null_as_default")]
    on_trial: i64,
    #[serde(deserialize_with = "null_as_default")]
    when_renewal: String,
    #[serde(deserialize_with = "null_as_default")]
    outgoing_servers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    white_list_senders: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    black_list_senders: Vec<String>,
    admin_user: Option<UserResource>,
    #[serde(deserialize_with = "null_as_default")]
    isactive: i64,
    #[serde(deserialize_with = "null_as_default")]
    domains: Vec<OrgDomainResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrgDomainResponse {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
}

impl OrgResponse {
    pub(crate) fn into_organization(self) -> Organization {
        let domain_names = self.domains.into_iter().map(|d| d.name);
        let mut org = Organization::new(self.name, self.primary_domain)
            .with_domain_names(domain_names);

        org.admin_user = self.admin_user.map(|admin| admin.into_user(&org.primary_domain));
        org.org_type = self.org_type;
        org.user_licenses = self.user_licences;
        org.active_users = self.active_users;
        org.licensing_package = self.licensing_package;
        org.on_trial = flag(self.on_trial);
        org.when_renewal = self.when_renewal;
        org.www = self.www;
        org.address = self.address;
        org.postcode = self.postcode;
        org.country = self.country;
        org.phone = self.phone;
        org.outgoing_servers = self.outgoing_servers;
        org.white_list_senders = self.white_list_senders;
        org.black_list_senders = self.black_list_senders;
        org.active = flag(self.isactive);
        org
    }
}

/// Domain endpoints wrap results in a collection, even for a single domain.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DomainsResponse {
    #[serde(rename = "message", deserialize_with = "null_as_default")]
    pub(crate) domains: Vec<DomainResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DomainResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) domain_name: String,
    #[serde(deserialize_with = "null_as_default")]
    destination: String,
    #[serde(deserialize_with = "null_as_default")]
    failover: String,
    #[serde(deserialize_with = "null_as_default")]
    is_relay: i64,
    #[serde(deserialize_with = "null_as_default")]
    is_active: i64,
}

impl DomainResponse {
    pub(crate) fn into_domain(self, organization: &str) -> Domain {
        Domain {
            organization: organization.to_string(),
            name: self.domain_name,
            destination: self.destination,
            failover: self.failover,
            relay: flag(self.is_relay),
            active: flag(self.is_active),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UserResource {
    #[serde(deserialize_with = "null_as_default")]
    firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    surname: String,
    #[serde(deserialize_with = "null_as_default")]
    primary_email: String,
    #[serde(deserialize_with = "null_as_default")]
    alias_emails: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    white_list_senders: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    black_list_senders: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    isactive: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    user_type: String,
}

impl UserResource {
    pub(crate) fn into_user(self, organization: &str) -> User {
        User {
            organization: organization.to_string(),
            firstname: self.firstname,
            surname: self.surname,
            email: self.primary_email,
            aliases: self.alias_emails,
            white_list_senders: self.white_list_senders,
            black_list_senders: self.black_list_senders,
            active: flag(self.isactive),
            user_type: self.user_type,
        }
    }
}

/// Response to a bulk create call. Success is the absence of failures; any
/// reported count is informational only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateResponse {
    pub(crate) created: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) fail_results: Vec<FailResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FailResult {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) message: String,
}

impl CreateResponse {
    /// Message of the first reported failure; later failures are dropped.
    pub(crate) fn first_failure(self) -> Option<String> {
        self.fail_results.into_iter().next().map(|f| f.message)
    }

    /// All failure messages joined with `", "`.
    pub(crate) fn joined_failures(self) -> Option<String> {
        if self.fail_results.is_empty() {
            return None;
        }
        let messages: Vec<String> = self.fail_results.into_iter().map(|f| f.message).collect();
        Some(messages.join(", "))
    }
}

//! Domain endpoints
//!
//! All domain reads come back wrapped in a `{"message": [...]}` collection,
//! including lookups of a single domain.

use ppe_domain::{Domain, NewDomain, Organization};
use tracing::{debug, info, instrument, warn};

use super::client::ApiClient;
use super::errors::ApiError;
use super::wire::{CreateResponse, DomainsResponse};

/// Outcome of matching the domain listing against an organization's
/// recorded member domains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainReconciliation {
    /// One slot per recorded domain name, in recorded order. `None` where
    /// the listing had no entry with that name.
    pub slots: Vec<Option<Domain>>,
    /// Recorded names the listing did not contain
    pub missing: Vec<String>,
    /// Listed names the organization has not recorded; their domains are
    /// not placed in any slot
    pub unrecorded: Vec<String>,
}

impl DomainReconciliation {
    /// True when every recorded name was found and nothing extra was listed.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unrecorded.is_empty()
    }

    fn reconcile(org: &Organization, response: DomainsResponse) -> Self {
        let recorded = org.domain_names();
        let mut slots: Vec<Option<Domain>> = vec![None; recorded.len()];
        let mut unrecorded = Vec::new();

        for listed in response.domains {
            let positions: Vec<usize> = recorded
                .iter()
                .enumerate()
                .filter(|(_, name)| **name == listed.domain_name)
                .map(|(i, _)| i)
                .collect();

            if positions.is_empty() {
                unrecorded.push(listed.domain_name);
                continue;
            }

            let domain = listed.into_domain(&org.primary_domain);
            for i in positions {
                slots[i] = Some(domain.clone());
            }
        }

        let missing = recorded
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| name.clone())
            .collect();

        Self { slots, missing, unrecorded }
    }
}

impl ApiClient {
    /// Fetch one domain of `org` by name.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the service returns an empty
    /// collection, or any transport/decode error.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn domain(&self, org: &Organization, name: &str) -> Result<Domain, ApiError> {
        let response: DomainsResponse =
            self.get(&format!("/domains/{}/{}", org.primary_domain, name)).await?;

        let first = response.domains.into_iter().next().ok_or_else(|| {
            ApiError::NotFound(format!(
                "domain {} in organization {}",
                name, org.primary_domain
            ))
        })?;

        Ok(first.into_domain(&org.primary_domain))
    }

    /// Look up a domain without knowing its organization.
    ///
    /// The service may return several domains for `name`; only an exact
    /// (case-sensitive) match counts. On a match the owning organization is
    /// fetched with a second request. `Ok(None)` means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails or a body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn find_domain(&self, name: &str) -> Result<Option<Domain>, ApiError> {
        let response: DomainsResponse = self.get(&format!("/domains/{}", name)).await?;

        let Some(found) = response.domains.into_iter().find(|d| d.domain_name == name) else {
            debug!("No exact domain match");
            return Ok(None);
        };

        let org = self.organization(name).await?;
        Ok(Some(found.into_domain(&org.primary_domain)))
    }

    /// List the domains of `org`, aligned with `org.domain_names()`.
    ///
    /// The result has exactly one entry per recorded name. A recorded name
    /// the service did not return leaves `None` at its position; listed
    /// domains the organization has not recorded are dropped. Use
    /// [`ApiClient::reconcile_domains`] to see what was dropped or missing.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn domains(&self, org: &Organization) -> Result<Vec<Option<Domain>>, ApiError> {
        Ok(self.reconcile_domains(org).await?.slots)
    }

    /// List the domains of `org` and report how the listing lines up with
    /// the organization's recorded member domains.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn reconcile_domains(
        &self,
        org: &Organization,
    ) -> Result<DomainReconciliation, ApiError> {
        let response: DomainsResponse =
            self.get(&format!("/domains/{}", org.primary_domain)).await?;

        let reconciliation = DomainReconciliation::reconcile(org, response);

        if !reconciliation.is_complete() {
            warn!(
                missing = ?reconciliation.missing,
                unrecorded = ?reconciliation.unrecorded,
                "Domain listing does not match recorded domains"
            );
        }
        Ok(reconciliation)
    }

    /// Create a domain under `org`.
    ///
    /// If the service reports failures, only the first failure's message
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if `new_domain` fails validation,
    /// `ApiError::Rejected` if the service reports a failure, or any
    /// transport error.
    #[instrument(
        skip(self, org, new_domain),
        fields(primary_domain = %org.primary_domain, domain = %new_domain.domain_name)
    )]
    pub async fn create_domain(
        &self,
        org: &Organization,
        new_domain: &NewDomain,
    ) -> Result<(), ApiError> {
        new_domain.validate()?;

        let response: CreateResponse =
            self.post(&format!("/domains/{}", org.primary_domain), &[new_domain]).await?;

        let created = response.created.clone();
        if let Some(message) = response.first_failure() {
            let err = ApiError::Rejected(message);
            warn!(category = err.category().as_str(), error = %err, "Domain creation rejected");
            return Err(err);
        }

        info!(created = ?created, "Domain created");
        Ok(())
    }
}

//! Organization endpoints
//!
//! `GET /orgs/{key}`, `GET /orgs/{primary}/orgs`, `POST /orgs/{primary}/orgs`.

use ppe_domain::{NewOrganization, Organization};
use tracing::{debug, info, instrument, warn};

use super::client::ApiClient;
use super::errors::ApiError;
use super::wire::{CreateResponse, OrgResponse};

impl ApiClient {
    /// Fetch an organization by its primary domain (or any key the service
    /// resolves to an organization, such as a member domain name).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn organization(&self, key: &str) -> Result<Organization, ApiError> {
        let response: OrgResponse = self.get(&format!("/orgs/{}", key)).await?;
        let org = response.into_organization();

        debug!(
            primary_domain = %org.primary_domain,
            domains = org.domain_names().len(),
            "Organization fetched"
        );
        Ok(org)
    }

    /// List the organizations registered under `org`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn organizations(&self, org: &Organization) -> Result<Vec<Organization>, ApiError> {
        // A bare `null` body means no sub-organizations.
        let responses: Option<Vec<OrgResponse>> =
            self.get(&format!("/orgs/{}/orgs", org.primary_domain)).await?;

        let orgs: Vec<Organization> = responses
            .unwrap_or_default()
            .into_iter()
            .map(OrgResponse::into_organization)
            .collect();

        debug!(count = orgs.len(), "Sub-organizations listed");
        Ok(orgs)
    }

    /// Create a sub-organization under `org`.
    ///
    /// If the service reports failures, only the first failure's message
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if `new_org` fails validation,
    /// `ApiError::Rejected` if the service reports a failure, or any
    /// transport error.
    #[instrument(
        skip(self, org, new_org),
        fields(primary_domain = %org.primary_domain, new_primary_domain = %new_org.primary_domain)
    )]
    pub async fn create_organization(
        &self,
        org: &Organization,
        new_org: &NewOrganization,
    ) -> Result<(), ApiError> {
        new_org.validate()?;

        let response: CreateResponse =
            self.post(&format!("/orgs/{}/orgs", org.primary_domain), &[new_org]).await?;

        let created = response.created.clone();
        if let Some(message) = response.first_failure() {
            let err = ApiError::Rejected(message);
            warn!(
                category = err.category().as_str(),
                error = %err,
                "Organization creation rejected"
            );
            return Err(err);
        }

        info!(created = ?created, "Organization created");
        Ok(())
    }
}

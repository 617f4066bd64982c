//! User endpoints under `/orgs/{primary}/users`

use ppe_domain::{NewUser, Organization, User};
use tracing::{debug, info, instrument, warn};

use super::client::ApiClient;
use super::errors::ApiError;
use super::wire::{CreateResponse, UserResource};

impl ApiClient {
    /// Fetch one user of `org` by primary email.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn user(&self, org: &Organization, email: &str) -> Result<User, ApiError> {
        let resource: UserResource =
            self.get(&format!("/orgs/{}/users/{}", org.primary_domain, email)).await?;
        Ok(resource.into_user(&org.primary_domain))
    }

    /// List all users of `org`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, org), fields(primary_domain = %org.primary_domain))]
    pub async fn users(&self, org: &Organization) -> Result<Vec<User>, ApiError> {
        let resources: Option<Vec<UserResource>> =
            self.get(&format!("/orgs/{}/users", org.primary_domain)).await?;

        let users: Vec<User> = resources
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.into_user(&org.primary_domain))
            .collect();

        debug!(count = users.len(), "Users listed");
        Ok(users)
    }

    /// Create a user under `org`.
    ///
    /// Unlike domain and organization creation, every reported failure
    /// message is kept, joined with `", "`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if `new_user` fails validation,
    /// `ApiError::Rejected` if the service reports failures, or any
    /// transport error.
    #[instrument(
        skip(self, org, new_user),
        fields(primary_domain = %org.primary_domain, email = %new_user.primary_email)
    )]
    pub async fn create_user(&self, org: &Organization, new_user: &NewUser) -> Result<(), ApiError> {
        new_user.validate()?;

        let response: CreateResponse =
            self.post(&format!("/orgs/{}/users", org.primary_domain), &[new_user]).await?;

        let created = response.created.clone();
        if let Some(message) = response.joined_failures() {
            let err = ApiError::Rejected(message);
            warn!(category = err.category().as_str(), error = %err, "User creation rejected");
            return Err(err);
        }

        info!(created = ?created, "User created");
        Ok(())
    }
}

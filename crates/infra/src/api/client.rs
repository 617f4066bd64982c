//! API client for the Proofpoint Essentials REST API
//!
//! Every call is a single request/response round trip authenticated with
//! two static identity headers. There is no retry, no token refresh and no
//! status classification beyond 401.

use std::time::Duration;

use ppe_domain::{ApiConfig, Credentials, PpeConfig};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Header carrying the API user
pub const USER_HEADER: &str = "X-User";
/// Header carrying the API password
pub const PASSWORD_HEADER: &str = "X-Password";

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// API root every path is appended to (e.g. "https://us1.proofpointessentials.com/api")
    pub base_url: String,
    /// Timeout applied to each request; `None` keeps the HTTP stack default
    pub timeout: Option<Duration>,
}

impl ApiClientConfig {
    /// Configuration for a service host: `https://<host>/api`, no timeout.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if `host` is blank.
    pub fn for_host(host: &str) -> Result<Self, ApiError> {
        Self::from_api_config(&ApiConfig::for_host(host))
    }

    /// # Errors
    /// Returns `ApiError::Config` if the API address cannot be resolved.
    pub fn from_api_config(api: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self { base_url: api.api_root()?, timeout: api.timeout_secs.map(Duration::from_secs) })
    }
}

/// Authenticated client for the organization, domain and user endpoints
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is not a valid absolute
    /// URL, the credentials are blank, or the HTTP client cannot be built.
    pub fn new(config: ApiClientConfig, credentials: Credentials) -> Result<Self, ApiError> {
        credentials.validate()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;

        let http_client =
            HttpClient::builder().default_headers(identity_headers(&credentials)?).build()?;

        Ok(Self { http_client, base_url, credentials, timeout: config.timeout })
    }

    /// Client for `https://<host>/api` with the given credentials.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn for_host(
        host: &str,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::new(ApiClientConfig::for_host(host)?, Credentials::new(user, password))
    }

    /// Client built from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is incomplete.
    pub fn from_config(config: &PpeConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Self::new(ApiClientConfig::from_api_config(&config.api)?, config.credentials.clone())
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// A clone whose requests give up after `timeout`.
    ///
    /// Use it to bound individual calls; dropping the returned future
    /// cancels an in-flight call.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self { timeout: Some(timeout), ..self.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API user sent in the `X-User` header.
    pub fn api_user(&self) -> &str {
        &self.credentials.user
    }

    /// Send one request and decode the JSON response body into `R`.
    ///
    /// The identity headers travel as client default headers. A JSON
    /// content type is declared only for POST and PUT bodies.
    ///
    /// # Errors
    ///
    /// - `ApiError::Unauthorized` on HTTP 401
    /// - `ApiError::Transport` for network, DNS, TLS or timeout failures
    /// - `ApiError::Decode` if the body is not the expected JSON shape
    /// - `ApiError::Encode` if `body` cannot be serialized
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http_client.request(method.clone(), &url);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;
            if method == Method::POST || method == Method::PUT {
                request = request.header(CONTENT_TYPE, "application/json");
            }
            request = request.body(payload);
        }

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let err = ApiError::Unauthorized;
            warn!(url = %url, category = err.category().as_str(), "API rejected credentials");
            return Err(err);
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status, decoding body anyway");
        }

        let bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&bytes)?;

        debug!(url = %url, status = status.as_u16(), bytes = bytes.len(), "response decoded");
        Ok(decoded)
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Execute a PUT request with a JSON body
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::DELETE, path, None).await
    }
}

/// `X-User` / `X-Password` header pair; the password is marked sensitive.
fn identity_headers(credentials: &Credentials) -> Result<HeaderMap, ApiError> {
    let invalid = |name: &str| ApiError::Config(format!("{} is not a valid header value", name));

    let user = HeaderValue::from_str(&credentials.user).map_err(|_| invalid("API user"))?;
    let mut password =
        HeaderValue::from_str(&credentials.password).map_err(|_| invalid("API password"))?;
    password.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(USER_HEADER, user);
    headers.insert(PASSWORD_HEADER, password);
    Ok(headers)
}

/// Builder for API client
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    host: Option<String>,
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Address the service at `https://<host>/api`
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Use an explicit API root; takes precedence over `host`
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(user, password));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the address or credentials are missing, or client
    /// creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let api = ApiConfig { host: self.host, base_url: self.base_url, timeout_secs: None };
        let base_url = api.api_root()?;
        let credentials =
            self.credentials.ok_or_else(|| ApiError::Config("Credentials not set".to_string()))?;

        ApiClient::new(ApiClientConfig { base_url, timeout: self.timeout }, credentials)
    }
}

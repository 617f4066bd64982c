//! Proofpoint Essentials API client
//!
//! This module turns typed calls into authenticated HTTP requests and maps
//! the JSON responses back into `ppe_domain` types.
//!
//! # Architecture
//!
//! - `client`: transport (identity headers, 401 mapping, JSON decoding)
//! - `organizations`, `domains`, `users`: per-resource endpoint mapping,
//!   implemented as methods on [`ApiClient`]
//! - `wire`: private JSON resource shapes
//!
//! # Example
//!
//! ```no_run
//! use ppe_infra::api::ApiClient;
//!
//! # async fn example() -> Result<(), ppe_infra::api::ApiError> {
//! let client = ApiClient::for_host("us1.proofpointessentials.com", "admin@example.com", "secret")?;
//!
//! let org = client.organization("example.com").await?;
//! for user in client.users(&org).await? {
//!     tracing::info!(email = %user.email, "user");
//! }
//!
//! if let Some(domain) = client.find_domain("example.org").await? {
//!     tracing::info!(organization = %domain.organization, "domain owner");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domains;
pub mod errors;
pub mod organizations;
pub mod users;
mod wire;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, PASSWORD_HEADER, USER_HEADER};
pub use domains::DomainReconciliation;
pub use errors::{ApiError, ApiErrorCategory};

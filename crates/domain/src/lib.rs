//! # PPE Domain
//!
//! Domain types and models for the Proofpoint Essentials API client.
//!
//! This crate contains:
//! - Read-side snapshots (Organization, Domain, User)
//! - Write-only creation shapes (NewOrganization, NewDomain, NewUser)
//! - Client configuration value objects
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other PPE crates
//! - No I/O; the HTTP side lives in `ppe-infra`

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

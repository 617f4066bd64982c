//! # PPE Infrastructure
//!
//! HTTP-side implementation of the Proofpoint Essentials API client.
//!
//! This crate contains:
//! - The reqwest-based HTTP transport
//! - The API client and per-resource endpoint mapping
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Depends on `ppe-domain` for all public types
//! - Contains all I/O (network, config files)

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiError};
pub use http::*;

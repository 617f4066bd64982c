//! Domain types and models
//!
//! Read-side types are snapshots rebuilt from each API response. The `New*`
//! types are write-only request shapes; the service accepts different field
//! sets on create than it returns on read.

pub mod domain;
pub mod organization;
pub mod user;

pub use domain::{Domain, NewDomain};
pub use organization::{NewOrganization, NewOrganizationDomain, Organization};
pub use user::{NewUser, User};

/// Serde helpers for the service's integer-encoded flags.
pub(crate) mod flag {
    use serde::Serializer;

    /// Writes `true`/`false` as `1`/`0`.
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }
}

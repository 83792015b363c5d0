//! samlzone Core Library
//!
//! Shared types and capability traits for the tenant-aware SAML service
//! provider.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (TenantId)
//! - [`tenant`] - Tenant snapshot and tenant-scoped SAML settings
//! - [`credentials`] - Key-and-certificate pairs
//! - [`traits`] - Consumed capabilities (TenantResolver, CredentialStore)

pub mod credentials;
pub mod ids;
pub mod tenant;
pub mod traits;

pub use credentials::KeyWithCert;
pub use ids::{ParseIdError, TenantId};
pub use tenant::{SamlConfig, Tenant};
pub use traits::{CredentialStore, FixedTenantResolver, StaticCredentialStore, TenantResolver};

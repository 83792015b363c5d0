//! Tenant-aware SAML 2.0 Service Provider registrations for samlzone
//!
//! Every tenant (zone) of a multi-tenant identity service acts as its own
//! SAML Service Provider. This crate computes, per request, the relying
//! party registration of the current tenant:
//! - entity ID and alias, derived from the tenant subdomain or an override
//! - signing and decryption credentials, tenant keys or system defaults
//! - ACS and single logout endpoint templates keyed by alias
//! - a static `example` registration for publishing metadata early
//! - the metadata download endpoint with tenant-specific filenames

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod saml;
pub mod services;

pub use config::{ConfigError, SpConfig, DEFAULT_REGISTRATION_ID};
pub use error::{SamlError, SamlResult};
pub use handlers::{BaseUrlProvider, MetadataRenderer, MetadataState, StaticBaseUrl};
pub use models::{Registration, X509Credential};
pub use repository::{RegistrationRepository, EXAMPLE_REGISTRATION_ID};
pub use router::saml_metadata_router;

//! Registration model and the descriptors it carries

pub mod asserting_party;
pub mod binding;
pub mod registration;

pub use asserting_party::{
    AssertingPartyDescriptor, PLACEHOLDER_IDP_ENTITY_ID, PLACEHOLDER_IDP_SSO_LOCATION,
};
pub use binding::Binding;
pub use registration::{CredentialUsage, Registration, X509Credential};

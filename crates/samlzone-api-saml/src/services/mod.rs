//! Resolution services: identity, credentials, assembly, export filename

pub mod credential_selector;
pub mod identity_resolver;
pub mod metadata_filename;
pub mod registration_assembler;

pub use credential_selector::{select_credentials, CredentialSelection};
pub use identity_resolver::{IdentityResolver, SpIdentity};
pub use metadata_filename::{content_disposition, metadata_filename};
pub use registration_assembler::{RegistrationAssembler, SigningDefaults, EXAMPLE_REGISTRATION_ID};

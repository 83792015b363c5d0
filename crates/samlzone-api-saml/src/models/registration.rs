//! The assembled relying-party registration.
//!
//! A `Registration` is produced fresh by every lookup and has no setters;
//! metadata rendering and `AuthnRequest` construction only read it.

use super::asserting_party::AssertingPartyDescriptor;
use super::binding::Binding;
use samlzone_core::KeyWithCert;

/// What a credential is advertised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialUsage {
    Signing,
    Decryption,
}

impl CredentialUsage {
    /// `use` attribute value of the metadata `KeyDescriptor`.
    #[must_use]
    pub fn key_descriptor_use(&self) -> &'static str {
        match self {
            Self::Signing => "signing",
            Self::Decryption => "encryption",
        }
    }
}

/// A key-and-certificate pair bound to one usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Credential {
    material: KeyWithCert,
    usage: CredentialUsage,
}

impl X509Credential {
    #[must_use]
    pub fn signing(material: KeyWithCert) -> Self {
        Self {
            material,
            usage: CredentialUsage::Signing,
        }
    }

    #[must_use]
    pub fn decryption(material: KeyWithCert) -> Self {
        Self {
            material,
            usage: CredentialUsage::Decryption,
        }
    }

    #[must_use]
    pub fn usage(&self) -> CredentialUsage {
        self.usage
    }

    #[must_use]
    pub fn material(&self) -> &KeyWithCert {
        &self.material
    }

    #[must_use]
    pub fn certificate(&self) -> &str {
        self.material.certificate()
    }
}

/// Relying-party registration consumed by metadata export and SSO/SLO flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub(crate) registration_id: String,
    pub(crate) entity_id: String,
    pub(crate) alias: String,
    pub(crate) name_id_format: Option<String>,
    pub(crate) assertion_consumer_service_location: String,
    pub(crate) assertion_consumer_service_binding: Binding,
    pub(crate) single_logout_service_response_location: String,
    pub(crate) signing_credentials: Vec<X509Credential>,
    pub(crate) decryption_credentials: Vec<X509Credential>,
    pub(crate) authn_requests_signed: bool,
    pub(crate) want_assertions_signed: bool,
    pub(crate) asserting_party: AssertingPartyDescriptor,
}

impl Registration {
    #[must_use]
    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn name_id_format(&self) -> Option<&str> {
        self.name_id_format.as_deref()
    }

    /// ACS location, still containing the `{baseUrl}` placeholder.
    #[must_use]
    pub fn assertion_consumer_service_location(&self) -> &str {
        &self.assertion_consumer_service_location
    }

    #[must_use]
    pub fn assertion_consumer_service_binding(&self) -> Binding {
        self.assertion_consumer_service_binding
    }

    /// SLO response location, still containing the `{baseUrl}` placeholder.
    #[must_use]
    pub fn single_logout_service_response_location(&self) -> &str {
        &self.single_logout_service_response_location
    }

    /// Signing credentials, primary first.
    #[must_use]
    pub fn signing_credentials(&self) -> &[X509Credential] {
        &self.signing_credentials
    }

    /// At most one credential: the primary key.
    #[must_use]
    pub fn decryption_credentials(&self) -> &[X509Credential] {
        &self.decryption_credentials
    }

    #[must_use]
    pub fn authn_requests_signed(&self) -> bool {
        self.authn_requests_signed
    }

    #[must_use]
    pub fn want_assertions_signed(&self) -> bool {
        self.want_assertions_signed
    }

    #[must_use]
    pub fn asserting_party(&self) -> &AssertingPartyDescriptor {
        &self.asserting_party
    }

    #[must_use]
    pub fn asserting_party_entity_id(&self) -> &str {
        &self.asserting_party.entity_id
    }
}

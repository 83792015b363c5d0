//! Assembly of the immutable [`Registration`] record.
//!
//! Combines the tenant's identity, the selected credentials and the static
//! protocol defaults. Endpoint locations keep the `{baseUrl}` placeholder; the
//! web layer expands it per request.

use super::credential_selector::select_credentials;
use super::identity_resolver::{IdentityResolver, SpIdentity};
use crate::config::{ConfigError, SpConfig};
use crate::models::{AssertingPartyDescriptor, Binding, Registration};
use crate::saml::{assertion_consumer_service_location, single_logout_service_response_location};
use samlzone_core::{KeyWithCert, Tenant};

/// Registration id of the tenant-independent example registration.
pub const EXAMPLE_REGISTRATION_ID: &str = "example";

/// Signing requirements applied when a tenant has no SAML settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningDefaults {
    pub sign_requests: bool,
    pub want_assertions_signed: bool,
}

impl Default for SigningDefaults {
    fn default() -> Self {
        Self {
            sign_requests: true,
            want_assertions_signed: true,
        }
    }
}

/// Builds registrations from tenant snapshots and static defaults.
#[derive(Debug, Clone)]
pub struct RegistrationAssembler {
    identity: IdentityResolver,
    name_id_format: Option<String>,
    signing_defaults: SigningDefaults,
    asserting_party: AssertingPartyDescriptor,
}

impl RegistrationAssembler {
    /// Create an assembler.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyEntityId` or `ConfigError::EmptyAlias` when
    /// the identity defaults could yield an empty entity ID or alias.
    pub fn new(
        identity: IdentityResolver,
        name_id_format: Option<String>,
        signing_defaults: SigningDefaults,
        asserting_party: AssertingPartyDescriptor,
    ) -> Result<Self, ConfigError> {
        if identity.default_entity_id().trim().is_empty() {
            return Err(ConfigError::EmptyEntityId);
        }
        if identity.default_alias().trim().is_empty() {
            return Err(ConfigError::EmptyAlias);
        }
        Ok(Self {
            identity,
            name_id_format,
            signing_defaults,
            asserting_party,
        })
    }

    /// Create an assembler from validated SP configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `config` fails [`SpConfig::validate`].
    pub fn from_config(config: &SpConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            IdentityResolver::new(config.entity_id.clone(), config.entity_id_alias.clone()),
            config.name_id_format.clone(),
            SigningDefaults {
                sign_requests: config.sign_requests,
                want_assertions_signed: config.want_assertions_signed,
            },
            config.asserting_party.clone(),
        )
    }

    #[must_use]
    pub fn identity(&self) -> &IdentityResolver {
        &self.identity
    }

    /// Assemble the tenant-scoped SP registration.
    #[must_use]
    pub fn assemble(
        &self,
        registration_id: &str,
        tenant: &Tenant,
        default_keys: &[KeyWithCert],
    ) -> Registration {
        let identity = self.identity.resolve(tenant);
        let (authn_requests_signed, want_assertions_signed) = match &tenant.saml_config {
            Some(config) => (config.request_signed, config.want_assertion_signed),
            None => (
                self.signing_defaults.sign_requests,
                self.signing_defaults.want_assertions_signed,
            ),
        };

        let registration = self.build(
            registration_id,
            identity,
            tenant.key_list(),
            default_keys,
            authn_requests_signed,
            want_assertions_signed,
        );

        tracing::debug!(
            registration_id = %registration.registration_id,
            tenant_id = %tenant.id,
            entity_id = %registration.entity_id,
            alias = %registration.alias,
            signing_keys = registration.signing_credentials.len(),
            "Assembled SAML relying party registration"
        );

        registration
    }

    /// Assemble the tenant-independent example registration.
    ///
    /// Uses the default entity ID for both entity ID and alias, and only the
    /// system default credentials.
    #[must_use]
    pub fn assemble_example(&self, default_keys: &[KeyWithCert]) -> Registration {
        let entity_id = self.identity.default_entity_id().to_string();
        let identity = SpIdentity {
            alias: entity_id.clone(),
            entity_id,
        };
        self.build(
            EXAMPLE_REGISTRATION_ID,
            identity,
            &[],
            default_keys,
            self.signing_defaults.sign_requests,
            self.signing_defaults.want_assertions_signed,
        )
    }

    fn build(
        &self,
        registration_id: &str,
        identity: SpIdentity,
        tenant_keys: &[KeyWithCert],
        default_keys: &[KeyWithCert],
        authn_requests_signed: bool,
        want_assertions_signed: bool,
    ) -> Registration {
        let credentials = select_credentials(tenant_keys, default_keys);

        Registration {
            registration_id: registration_id.to_string(),
            assertion_consumer_service_location: assertion_consumer_service_location(
                &identity.alias,
            ),
            assertion_consumer_service_binding: Binding::HttpPost,
            single_logout_service_response_location: single_logout_service_response_location(
                &identity.alias,
            ),
            entity_id: identity.entity_id,
            alias: identity.alias,
            name_id_format: self.name_id_format.clone(),
            signing_credentials: credentials.signing,
            decryption_credentials: credentials.decryption,
            authn_requests_signed,
            want_assertions_signed,
            asserting_party: self.asserting_party.clone(),
        }
    }
}

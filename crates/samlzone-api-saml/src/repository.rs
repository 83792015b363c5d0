//! Registration lookup by registration id.
//!
//! Two registrations are known:
//!
//! - the tenant-scoped SP registration, under the configured id, recomputed
//!   from the current tenant on every lookup;
//! - the static [`EXAMPLE_REGISTRATION_ID`] registration, independent of the
//!   tenant, which lets SP metadata be published before any identity provider
//!   is configured.
//!
//! The configured id is the only tenant-scoped lookup key; any other id,
//! apart from the example id, is reported as not found rather than echoed.
//!
//! Nothing is cached: tenant configuration changes apply on the next lookup.

use crate::config::{ConfigError, SpConfig};
use crate::error::{SamlError, SamlResult};
use crate::models::Registration;
use crate::services::RegistrationAssembler;
use samlzone_core::{CredentialStore, StaticCredentialStore, Tenant, TenantResolver};
use std::sync::Arc;

pub use crate::services::EXAMPLE_REGISTRATION_ID;

/// Lookup surface backing the metadata endpoint and the SSO handshake.
#[derive(Clone)]
pub struct RegistrationRepository {
    registration_id: String,
    assembler: RegistrationAssembler,
    tenant_resolver: Arc<dyn TenantResolver>,
    credential_store: Arc<dyn CredentialStore>,
}

impl RegistrationRepository {
    /// Create a repository from explicit collaborators.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `registration_id` is empty or collides
    /// with the example registration id.
    pub fn new(
        registration_id: impl Into<String>,
        assembler: RegistrationAssembler,
        tenant_resolver: Arc<dyn TenantResolver>,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Result<Self, ConfigError> {
        let registration_id = registration_id.into();
        if registration_id.trim().is_empty() {
            return Err(ConfigError::EmptyRegistrationId);
        }
        if registration_id == EXAMPLE_REGISTRATION_ID {
            return Err(ConfigError::RegistrationIdCollision(registration_id));
        }
        Ok(Self {
            registration_id,
            assembler,
            tenant_resolver,
            credential_store,
        })
    }

    /// Create a repository from SP configuration.
    ///
    /// Default credentials are served from `config.default_keys`; use
    /// [`RegistrationRepository::new`] to plug in another `CredentialStore`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `config` fails validation.
    pub fn from_config(
        config: &SpConfig,
        tenant_resolver: Arc<dyn TenantResolver>,
    ) -> Result<Self, ConfigError> {
        let assembler = RegistrationAssembler::from_config(config)?;
        Self::new(
            config.registration_id.clone(),
            assembler,
            tenant_resolver,
            Arc::new(StaticCredentialStore::new(config.default_keys.clone())),
        )
    }

    /// Id of the tenant-scoped registration.
    #[must_use]
    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    /// Look up a registration for the tenant of the current request.
    ///
    /// # Errors
    ///
    /// Returns `SamlError::RegistrationNotFound` for an unknown id.
    pub fn find_by_registration_id(&self, registration_id: &str) -> SamlResult<Registration> {
        if registration_id == EXAMPLE_REGISTRATION_ID {
            return Ok(self.example_registration());
        }
        self.ensure_known(registration_id)?;

        let tenant = self.tenant_resolver.current_tenant();
        Ok(self.assemble_for(registration_id, &tenant))
    }

    /// Look up a registration for an explicitly supplied tenant.
    ///
    /// # Errors
    ///
    /// Returns `SamlError::RegistrationNotFound` for an unknown id.
    pub fn resolve(&self, registration_id: &str, tenant: &Tenant) -> SamlResult<Registration> {
        if registration_id == EXAMPLE_REGISTRATION_ID {
            return Ok(self.example_registration());
        }
        self.ensure_known(registration_id)?;
        Ok(self.assemble_for(registration_id, tenant))
    }

    fn ensure_known(&self, registration_id: &str) -> SamlResult<()> {
        if registration_id == self.registration_id {
            return Ok(());
        }
        tracing::warn!(
            registration_id = %registration_id,
            "Unknown SAML relying party registration requested"
        );
        Err(SamlError::RegistrationNotFound(registration_id.to_string()))
    }

    fn assemble_for(&self, registration_id: &str, tenant: &Tenant) -> Registration {
        let default_keys = self.credential_store.default_keys();
        self.assembler
            .assemble(registration_id, tenant, &default_keys)
    }

    fn example_registration(&self) -> Registration {
        let default_keys = self.credential_store.default_keys();
        self.assembler.assemble_example(&default_keys)
    }
}

impl std::fmt::Debug for RegistrationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRepository")
            .field("registration_id", &self.registration_id)
            .field("assembler", &self.assembler)
            .finish_non_exhaustive()
    }
}

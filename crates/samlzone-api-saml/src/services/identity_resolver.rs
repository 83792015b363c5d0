//! Effective SP entity ID and alias for a tenant.
//!
//! The default tenant advertises the configured identity as is. Every other
//! tenant gets a subdomain-prefixed identity unless its SAML settings carry an
//! entity ID override. The override only replaces the entity ID: the alias is
//! always derived from the subdomain, so endpoint paths stay predictable.

use samlzone_core::Tenant;

/// Entity ID and alias advertised for one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpIdentity {
    pub entity_id: String,
    pub alias: String,
}

/// Applies the per-tenant identity fallback chain.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    default_entity_id: String,
    default_alias: Option<String>,
}

impl IdentityResolver {
    #[must_use]
    pub fn new(default_entity_id: impl Into<String>, default_alias: Option<String>) -> Self {
        Self {
            default_entity_id: default_entity_id.into(),
            default_alias,
        }
    }

    #[must_use]
    pub fn default_entity_id(&self) -> &str {
        &self.default_entity_id
    }

    /// Configured alias, or the entity ID when no alias is configured.
    #[must_use]
    pub fn default_alias(&self) -> &str {
        self.default_alias
            .as_deref()
            .unwrap_or(&self.default_entity_id)
    }

    #[must_use]
    pub fn resolve(&self, tenant: &Tenant) -> SpIdentity {
        if tenant.is_default {
            return SpIdentity {
                entity_id: self.default_entity_id.clone(),
                alias: self.default_alias().to_string(),
            };
        }

        let entity_id = tenant
            .saml_config
            .as_ref()
            .and_then(|config| config.entity_id_override())
            .map_or_else(
                || format!("{}.{}", tenant.subdomain, self.default_entity_id),
                str::to_string,
            );

        SpIdentity {
            entity_id,
            alias: format!("{}.{}", tenant.subdomain, self.default_alias()),
        }
    }
}

//! Tenant (zone) snapshot and its SAML settings.
//!
//! These values are owned by tenant administration. The resolution layer only
//! reads a snapshot for the duration of one lookup.

use crate::credentials::KeyWithCert;
use crate::ids::TenantId;
use serde::Deserialize;

/// Tenant-scoped SAML settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SamlConfig {
    /// Entity ID to advertise instead of the subdomain-derived one.
    pub entity_id_override: Option<String>,
    /// Whether `AuthnRequest`s sent by this SP are signed.
    pub request_signed: bool,
    /// Whether this SP requires signed assertions.
    pub want_assertion_signed: bool,
    /// Ordered credentials; the first one is the primary key.
    pub keys: Vec<KeyWithCert>,
}

impl Default for SamlConfig {
    fn default() -> Self {
        Self {
            entity_id_override: None,
            request_signed: true,
            want_assertion_signed: true,
            keys: Vec::new(),
        }
    }
}

impl SamlConfig {
    /// The entity ID override, ignoring an empty value.
    #[must_use]
    pub fn entity_id_override(&self) -> Option<&str> {
        self.entity_id_override
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// Credentials in configured order, primary first.
    #[must_use]
    pub fn key_list(&self) -> &[KeyWithCert] {
        &self.keys
    }
}

/// One multi-tenant partition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub subdomain: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub saml_config: Option<SamlConfig>,
}

impl Tenant {
    /// The system's default tenant, served without a subdomain.
    #[must_use]
    pub fn default_tenant(id: TenantId) -> Self {
        Self {
            id,
            subdomain: String::new(),
            is_default: true,
            saml_config: None,
        }
    }

    /// A non-default tenant reachable under `subdomain`.
    #[must_use]
    pub fn new(id: TenantId, subdomain: impl Into<String>) -> Self {
        Self {
            id,
            subdomain: subdomain.into(),
            is_default: false,
            saml_config: None,
        }
    }

    #[must_use]
    pub fn with_saml_config(mut self, saml_config: SamlConfig) -> Self {
        self.saml_config = Some(saml_config);
        self
    }

    /// Tenant-scoped credentials; empty when the tenant has no SAML settings.
    #[must_use]
    pub fn key_list(&self) -> &[KeyWithCert] {
        match &self.saml_config {
            Some(config) => config.key_list(),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_saml_config_signs() {
        let config = SamlConfig::default();
        assert!(config.request_signed);
        assert!(config.want_assertion_signed);
        assert!(config.key_list().is_empty());
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = SamlConfig {
            entity_id_override: Some(String::new()),
            ..SamlConfig::default()
        };
        assert_eq!(config.entity_id_override(), None);
    }

    #[test]
    fn test_key_list_without_saml_config_is_empty() {
        let tenant = Tenant::new(TenantId::new(), "acme");
        assert!(tenant.key_list().is_empty());
        assert!(!tenant.is_default);
    }

    #[test]
    fn test_key_list_preserves_order() {
        let first = KeyWithCert::new("k1", "p", "c1");
        let second = KeyWithCert::new("k2", "p", "c2");
        let tenant = Tenant::new(TenantId::new(), "acme").with_saml_config(SamlConfig {
            keys: vec![first.clone(), second.clone()],
            ..SamlConfig::default()
        });
        assert_eq!(tenant.key_list(), &[first, second]);
    }

    #[test]
    fn test_deserialize_tenant_without_saml_config() {
        let tenant: Tenant = serde_json::from_str(
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000","subdomain":"acme"}"#,
        )
        .unwrap();
        assert_eq!(tenant.subdomain, "acme");
        assert!(!tenant.is_default);
        assert!(tenant.saml_config.is_none());
    }
}

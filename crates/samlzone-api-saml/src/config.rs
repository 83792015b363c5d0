//! Static service-provider defaults loaded from environment variables.
//!
//! Loading is fail-fast: a missing entity ID, an empty alias or a malformed
//! key list is reported as a [`ConfigError`] at startup and never surfaces
//! while resolving a registration.

use crate::models::AssertingPartyDescriptor;
use crate::services::EXAMPLE_REGISTRATION_ID;
use samlzone_core::KeyWithCert;
use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Registration id of the tenant-scoped SP registration when none is configured.
pub const DEFAULT_REGISTRATION_ID: &str = "default";

/// Configuration errors detected while building the SP defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Default SAML entity ID must not be empty")]
    EmptyEntityId,

    #[error("SAML entity ID alias must not be empty when set")]
    EmptyAlias,

    #[error("Registration ID must not be empty")]
    EmptyRegistrationId,

    #[error("Registration ID '{0}' is reserved for the example registration")]
    RegistrationIdCollision(String),
}

/// Service-provider defaults shared by every tenant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpConfig {
    /// Id under which the tenant-scoped registration is looked up.
    #[serde(default = "default_registration_id")]
    pub registration_id: String,

    /// Entity ID of the default tenant; prefix base for other tenants.
    pub entity_id: String,

    /// Alias of the default tenant; falls back to `entity_id`.
    #[serde(default)]
    pub entity_id_alias: Option<String>,

    #[serde(default)]
    pub name_id_format: Option<String>,

    /// Applied when the tenant carries no SAML settings.
    #[serde(default = "default_true")]
    pub sign_requests: bool,

    /// Applied when the tenant carries no SAML settings.
    #[serde(default = "default_true")]
    pub want_assertions_signed: bool,

    /// System default credentials, primary first.
    #[serde(default)]
    pub default_keys: Vec<KeyWithCert>,

    #[serde(default)]
    pub asserting_party: AssertingPartyDescriptor,
}

fn default_registration_id() -> String {
    DEFAULT_REGISTRATION_ID.to_string()
}

fn default_true() -> bool {
    true
}

impl SpConfig {
    /// Minimal configuration with the given default entity ID.
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            registration_id: default_registration_id(),
            entity_id: entity_id.into(),
            entity_id_alias: None,
            name_id_format: None,
            sign_requests: true,
            want_assertions_signed: true,
            default_keys: Vec::new(),
            asserting_party: AssertingPartyDescriptor::default(),
        }
    }

    /// Load from the process environment.
    ///
    /// - `SAML_ENTITY_ID` (required)
    /// - `SAML_ENTITY_ID_ALIAS`
    /// - `SAML_NAME_ID_FORMAT`
    /// - `SAML_REGISTRATION_ID` (default: `default`)
    /// - `SAML_SIGN_REQUEST` (default: `true`)
    /// - `SAML_WANT_ASSERTION_SIGNED` (default: `true`)
    /// - `SAML_KEYS`: JSON array of `{"key", "passphrase", "certificate"}`
    ///
    /// Empty values count as unset, except `SAML_ENTITY_ID_ALIAS`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a required variable is missing, a value
    /// cannot be parsed, or the result fails [`SpConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`SpConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let entity_id = non_empty("SAML_ENTITY_ID")
            .ok_or_else(|| ConfigError::MissingVar("SAML_ENTITY_ID".to_string()))?;

        let mut config = Self::new(entity_id);
        // An alias that is set but empty is rejected by validate().
        config.entity_id_alias = lookup("SAML_ENTITY_ID_ALIAS");
        config.name_id_format = non_empty("SAML_NAME_ID_FORMAT");
        if let Some(registration_id) = non_empty("SAML_REGISTRATION_ID") {
            config.registration_id = registration_id;
        }
        if let Some(value) = non_empty("SAML_SIGN_REQUEST") {
            config.sign_requests = parse_bool("SAML_SIGN_REQUEST", &value)?;
        }
        if let Some(value) = non_empty("SAML_WANT_ASSERTION_SIGNED") {
            config.want_assertions_signed = parse_bool("SAML_WANT_ASSERTION_SIGNED", &value)?;
        }
        if let Some(json) = non_empty("SAML_KEYS") {
            config.default_keys = parse_keys(&json)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot yield a non-empty identity.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found among a blank entity ID, a blank
    /// alias, a blank registration ID, or a registration ID equal to the
    /// example registration id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity_id.trim().is_empty() {
            return Err(ConfigError::EmptyEntityId);
        }
        if matches!(self.entity_id_alias.as_deref(), Some(alias) if alias.trim().is_empty()) {
            return Err(ConfigError::EmptyAlias);
        }
        if self.registration_id.trim().is_empty() {
            return Err(ConfigError::EmptyRegistrationId);
        }
        if self.registration_id == EXAMPLE_REGISTRATION_ID {
            return Err(ConfigError::RegistrationIdCollision(
                self.registration_id.clone(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

fn parse_keys(json: &str) -> Result<Vec<KeyWithCert>, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::InvalidValue {
        var: "SAML_KEYS".to_string(),
        message: format!("Invalid JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("SAML_ENTITY_ID".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: SAML_ENTITY_ID"
        );
        let err = ConfigError::RegistrationIdCollision("example".to_string());
        assert_eq!(
            err.to_string(),
            "Registration ID 'example' is reserved for the example registration"
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = SpConfig::from_lookup(lookup_from(&[("SAML_ENTITY_ID", "entityId")])).unwrap();
        assert_eq!(config.entity_id, "entityId");
        assert_eq!(config.registration_id, DEFAULT_REGISTRATION_ID);
        assert_eq!(config.entity_id_alias, None);
        assert_eq!(config.name_id_format, None);
        assert!(config.sign_requests);
        assert!(config.want_assertions_signed);
        assert!(config.default_keys.is_empty());
        assert!(config.asserting_party.is_placeholder());
    }

    #[test]
    fn test_from_lookup_missing_entity_id() {
        let err = SpConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("SAML_ENTITY_ID".to_string()));
    }

    #[test]
    fn test_from_lookup_empty_alias_rejected() {
        let err = SpConfig::from_lookup(lookup_from(&[
            ("SAML_ENTITY_ID", "entityId"),
            ("SAML_ENTITY_ID_ALIAS", ""),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyAlias);
    }

    #[test]
    fn test_from_lookup_all_values() {
        let config = SpConfig::from_lookup(lookup_from(&[
            ("SAML_ENTITY_ID", "integration-saml-entity-id"),
            ("SAML_ENTITY_ID_ALIAS", "integration-saml-entity-id-alias"),
            ("SAML_NAME_ID_FORMAT", crate::saml::NAMEID_FORMAT_EMAIL),
            ("SAML_REGISTRATION_ID", "sp"),
            ("SAML_SIGN_REQUEST", "false"),
            ("SAML_WANT_ASSERTION_SIGNED", "FALSE"),
            (
                "SAML_KEYS",
                r#"[{"key":"k1","passphrase":"p","certificate":"c1"},{"key":"k2","certificate":"c2"}]"#,
            ),
        ]))
        .unwrap();
        assert_eq!(
            config.entity_id_alias.as_deref(),
            Some("integration-saml-entity-id-alias")
        );
        assert_eq!(
            config.name_id_format.as_deref(),
            Some(crate::saml::NAMEID_FORMAT_EMAIL)
        );
        assert_eq!(config.registration_id, "sp");
        assert!(!config.sign_requests);
        assert!(!config.want_assertions_signed);
        assert_eq!(config.default_keys.len(), 2);
        assert_eq!(config.default_keys[0].certificate(), "c1");
        assert_eq!(config.default_keys[1].certificate(), "c2");
    }

    #[test]
    fn test_from_lookup_empty_registration_id_uses_default() {
        let config = SpConfig::from_lookup(lookup_from(&[
            ("SAML_ENTITY_ID", "entityId"),
            ("SAML_REGISTRATION_ID", ""),
        ]))
        .unwrap();
        assert_eq!(config.registration_id, DEFAULT_REGISTRATION_ID);
    }

    #[test]
    fn test_from_lookup_invalid_bool() {
        let err = SpConfig::from_lookup(lookup_from(&[
            ("SAML_ENTITY_ID", "entityId"),
            ("SAML_SIGN_REQUEST", "sometimes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SAML_SIGN_REQUEST"));
    }

    #[test]
    fn test_from_lookup_invalid_keys_json() {
        let err = SpConfig::from_lookup(lookup_from(&[
            ("SAML_ENTITY_ID", "entityId"),
            ("SAML_KEYS", "not json"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SAML_KEYS"));
    }

    #[test]
    fn test_validate_rejects_blank_entity_id() {
        assert_eq!(SpConfig::new("  ").validate(), Err(ConfigError::EmptyEntityId));
    }

    #[test]
    fn test_validate_rejects_reserved_registration_id() {
        let mut config = SpConfig::new("entityId");
        config.registration_id = EXAMPLE_REGISTRATION_ID.to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::RegistrationIdCollision("example".to_string()))
        );

        config.registration_id = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyRegistrationId));

        config.registration_id = "   ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyRegistrationId));
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: SpConfig = serde_json::from_str(
            r#"{"entity_id":"entityId","entity_id_alias":"entityIdAlias","sign_requests":false}"#,
        )
        .unwrap();
        assert_eq!(config.registration_id, DEFAULT_REGISTRATION_ID);
        assert_eq!(config.entity_id_alias.as_deref(), Some("entityIdAlias"));
        assert!(!config.sign_requests);
        assert!(config.want_assertions_signed);
        assert!(config.validate().is_ok());
    }

    // All process-environment scenarios live in one test to avoid races
    // between parallel tests.
    #[test]
    fn test_from_env() {
        std::env::remove_var("SAML_ENTITY_ID");
        assert!(matches!(
            SpConfig::from_env(),
            Err(ConfigError::MissingVar(_))
        ));

        std::env::set_var("SAML_ENTITY_ID", "env-entity-id");
        let config = SpConfig::from_env().unwrap();
        assert_eq!(config.entity_id, "env-entity-id");

        std::env::remove_var("SAML_ENTITY_ID");
    }
}

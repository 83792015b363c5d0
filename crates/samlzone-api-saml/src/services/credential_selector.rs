//! Credential selection between tenant-scoped and system-default keys.
//!
//! Tenant keys replace the defaults entirely when present; the two lists are
//! never merged. Only the primary (first) key decrypts, while every key stays
//! advertised for signing so signatures made with an older key keep verifying
//! during a rollover.

use crate::models::X509Credential;
use samlzone_core::KeyWithCert;

/// Credentials chosen for one registration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialSelection {
    /// Empty or exactly the primary key.
    pub decryption: Vec<X509Credential>,
    /// Every effective key, primary first.
    pub signing: Vec<X509Credential>,
}

impl CredentialSelection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signing.is_empty()
    }
}

/// Pick decryption and signing credentials.
#[must_use]
pub fn select_credentials(
    tenant_keys: &[KeyWithCert],
    default_keys: &[KeyWithCert],
) -> CredentialSelection {
    let effective = if tenant_keys.is_empty() {
        default_keys
    } else {
        tenant_keys
    };

    let Some(primary) = effective.first() else {
        return CredentialSelection::default();
    };

    CredentialSelection {
        decryption: vec![X509Credential::decryption(primary.clone())],
        signing: effective
            .iter()
            .cloned()
            .map(X509Credential::signing)
            .collect(),
    }
}

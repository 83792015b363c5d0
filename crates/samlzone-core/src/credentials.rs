//! Key-and-certificate pairs used for SAML signing and decryption.
//!
//! The material is carried as opaque PEM text. Parsing and validating it is
//! left to the signing layer; this crate only decides which pair is used for
//! what.

use serde::Deserialize;
use std::fmt;

/// One SAML credential: private key, its passphrase, and the certificate.
///
/// Immutable once constructed. A tenant without credentials is represented by
/// an empty key list, never by a placeholder `KeyWithCert`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct KeyWithCert {
    key: String,
    #[serde(default)]
    passphrase: String,
    certificate: String,
}

impl KeyWithCert {
    /// Create a credential from PEM key, passphrase and PEM certificate.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        passphrase: impl Into<String>,
        certificate: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            passphrase: passphrase.into(),
            certificate: certificate.into(),
        }
    }

    /// PEM-encoded private key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Passphrase protecting the private key (may be empty).
    #[must_use]
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// PEM-encoded X.509 certificate.
    #[must_use]
    pub fn certificate(&self) -> &str {
        &self.certificate
    }
}

// Key material must never reach logs.
impl fmt::Debug for KeyWithCert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyWithCert")
            .field("key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .field("certificate", &self.certificate)
            .finish()
    }
}

//! SAML protocol bindings

use serde::Deserialize;
use std::fmt;

/// SAML 2.0 binding used on an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Binding {
    #[default]
    HttpPost,
    HttpRedirect,
}

impl Binding {
    /// Binding URN as it appears in metadata.
    #[must_use]
    pub fn urn(&self) -> &'static str {
        match self {
            Self::HttpPost => "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST",
            Self::HttpRedirect => "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.urn())
    }
}

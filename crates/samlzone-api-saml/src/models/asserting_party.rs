//! Identity-provider side of a registration.
//!
//! Publishing SP metadata needs a counterpart descriptor even before an
//! operator has registered a real identity provider, and some identity
//! providers only hand out their metadata after receiving ours. Until then the
//! placeholder returned by [`AssertingPartyDescriptor::default`] is threaded
//! through unchanged.

use super::binding::Binding;
use serde::Deserialize;

/// Entity ID of the placeholder identity provider.
pub const PLACEHOLDER_IDP_ENTITY_ID: &str = "exampleEntityId";

/// SSO endpoint of the placeholder identity provider.
pub const PLACEHOLDER_IDP_SSO_LOCATION: &str = "https://idp.example.com/saml/SSO";

/// Identity-provider metadata forwarded into every registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssertingPartyDescriptor {
    pub entity_id: String,
    pub single_sign_on_service_location: String,
    pub single_sign_on_service_binding: Binding,
    pub want_authn_requests_signed: bool,
    /// Signature algorithm URIs; empty means the signer's default.
    pub signing_algorithms: Vec<String>,
}

impl Default for AssertingPartyDescriptor {
    /// The placeholder identity provider.
    fn default() -> Self {
        Self {
            entity_id: PLACEHOLDER_IDP_ENTITY_ID.to_string(),
            single_sign_on_service_location: PLACEHOLDER_IDP_SSO_LOCATION.to_string(),
            single_sign_on_service_binding: Binding::HttpRedirect,
            want_authn_requests_signed: true,
            signing_algorithms: Vec::new(),
        }
    }
}

impl AssertingPartyDescriptor {
    /// True while no real identity provider has been configured.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.entity_id == PLACEHOLDER_IDP_ENTITY_ID
    }
}

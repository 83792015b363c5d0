//! SP endpoint location templates.
//!
//! Locations are built around the `{baseUrl}` placeholder. The placeholder is
//! only expanded at render time, against the inbound request.

/// Placeholder substituted with the externally visible base URL.
pub const BASE_URL_PLACEHOLDER: &str = "{baseUrl}";

/// Assertion consumer service location for `alias`.
#[must_use]
pub fn assertion_consumer_service_location(alias: &str) -> String {
    format!("{BASE_URL_PLACEHOLDER}/saml/SSO/alias/{alias}")
}

/// Single logout response location for `alias`.
#[must_use]
pub fn single_logout_service_response_location(alias: &str) -> String {
    format!("{BASE_URL_PLACEHOLDER}/saml/SingleLogout/alias/{alias}")
}

/// Replace `{baseUrl}` in `template`, dropping a trailing slash from `base_url`.
#[must_use]
pub fn expand_base_url(template: &str, base_url: &str) -> String {
    template.replace(BASE_URL_PLACEHOLDER, base_url.trim_end_matches('/'))
}

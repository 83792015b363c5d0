//! Suggested filename for the exported SP metadata document.

use samlzone_core::Tenant;

/// Filename the metadata download is offered under.
#[must_use]
pub fn metadata_filename(tenant: &Tenant) -> String {
    if tenant.is_default {
        "saml-sp.xml".to_string()
    } else {
        format!("saml-{}-sp.xml", tenant.subdomain)
    }
}

/// `Content-Disposition` value offering the document as `filename`.
///
/// Carries both the plain form and the RFC 5987 `filename*` form.
#[must_use]
pub fn content_disposition(filename: &str) -> String {
    // Strip characters that would break out of the quoted-string.
    let quoted: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    format!(
        "attachment; filename=\"{quoted}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

//! SAML `NameID` format identifiers

pub const NAMEID_FORMAT_EMAIL: &str = "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress";
pub const NAMEID_FORMAT_PERSISTENT: &str = "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent";
pub const NAMEID_FORMAT_TRANSIENT: &str = "urn:oasis:names:tc:SAML:2.0:nameid-format:transient";
pub const NAMEID_FORMAT_UNSPECIFIED: &str =
    "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified";
pub const NAMEID_FORMAT_X509SUBJECT: &str =
    "urn:oasis:names:tc:SAML:1.1:nameid-format:X509SubjectName";

/// Formats advertised in the SP metadata document.
pub const SUPPORTED_NAME_ID_FORMATS: [&str; 5] = [
    NAMEID_FORMAT_EMAIL,
    NAMEID_FORMAT_PERSISTENT,
    NAMEID_FORMAT_TRANSIENT,
    NAMEID_FORMAT_UNSPECIFIED,
    NAMEID_FORMAT_X509SUBJECT,
];

/// Check if a `NameID` format is one this SP advertises
#[must_use]
pub fn is_supported_nameid_format(format: &str) -> bool {
    SUPPORTED_NAME_ID_FORMATS.contains(&format)
}

//! SAML-specific constants and URL templates

pub mod locations;
pub mod name_id;

pub use locations::{
    assertion_consumer_service_location, expand_base_url, single_logout_service_response_location,
    BASE_URL_PLACEHOLDER,
};
pub use name_id::{
    is_supported_nameid_format, NAMEID_FORMAT_EMAIL, NAMEID_FORMAT_PERSISTENT,
    NAMEID_FORMAT_TRANSIENT, NAMEID_FORMAT_UNSPECIFIED, NAMEID_FORMAT_X509SUBJECT,
    SUPPORTED_NAME_ID_FORMATS,
};

//! HTTP handlers for SAML endpoints

pub mod metadata;

pub use metadata::{
    get_metadata, get_metadata_by_id, BaseUrlProvider, MetadataRenderer, MetadataState,
    StaticBaseUrl,
};

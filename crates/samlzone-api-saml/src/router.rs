//! SAML route definitions

use crate::handlers::{get_metadata, get_metadata_by_id, MetadataState};
use axum::{routing::get, Router};

/// Create the public SP metadata router.
///
/// Handlers read the request's `Tenant` from request extensions, so the
/// caller must layer tenant resolution in front of this router.
pub fn saml_metadata_router(state: MetadataState) -> Router {
    Router::new()
        .route("/saml/metadata", get(get_metadata))
        .route("/saml/metadata/", get(get_metadata))
        .route("/saml/metadata/:registration_id", get(get_metadata_by_id))
        .route("/saml/metadata/:registration_id/", get(get_metadata_by_id))
        .with_state(state)
}

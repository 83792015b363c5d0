//! SAML SP metadata download handler

use crate::error::{SamlError, SamlResult};
use crate::models::Registration;
use crate::repository::RegistrationRepository;
use crate::services::{content_disposition, metadata_filename};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use samlzone_core::Tenant;
use std::sync::Arc;

/// Serializes a registration into an `EntityDescriptor` document.
///
/// Endpoint locations in the registration still carry the `{baseUrl}`
/// placeholder; `base_url` is the value to expand it with.
pub trait MetadataRenderer: Send + Sync {
    fn render(&self, registration: &Registration, base_url: &str) -> Result<String, String>;
}

/// Externally visible base URL of the current request.
pub trait BaseUrlProvider: Send + Sync {
    fn base_url(&self, tenant: &Tenant) -> String;
}

/// Same base URL for every tenant.
#[derive(Debug, Clone)]
pub struct StaticBaseUrl(String);

impl StaticBaseUrl {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self(base_url.into())
    }
}

impl BaseUrlProvider for StaticBaseUrl {
    fn base_url(&self, _tenant: &Tenant) -> String {
        self.0.clone()
    }
}

/// Application state for SAML metadata handlers
#[derive(Clone)]
pub struct MetadataState {
    pub repository: Arc<RegistrationRepository>,
    pub renderer: Arc<dyn MetadataRenderer>,
    pub base_url_provider: Arc<dyn BaseUrlProvider>,
}

/// Return SP metadata for the tenant-scoped registration
#[utoipa::path(
    get,
    path = "/saml/metadata",
    responses(
        (status = 200, description = "SP metadata XML offered as a download"),
        (status = 500, description = "Failed to generate metadata"),
    ),
    tag = "SAML"
)]
pub async fn get_metadata(
    State(state): State<MetadataState>,
    Extension(tenant): Extension<Tenant>,
) -> Response {
    let registration_id = state.repository.registration_id().to_string();
    metadata_response(&state, &registration_id, &tenant)
}

/// Return SP metadata for a named registration
#[utoipa::path(
    get,
    path = "/saml/metadata/{registration_id}",
    params(
        ("registration_id" = String, Path, description = "Relying party registration id"),
    ),
    responses(
        (status = 200, description = "SP metadata XML offered as a download"),
        (status = 404, description = "Unknown registration id"),
        (status = 500, description = "Failed to generate metadata"),
    ),
    tag = "SAML"
)]
pub async fn get_metadata_by_id(
    State(state): State<MetadataState>,
    Extension(tenant): Extension<Tenant>,
    Path(registration_id): Path<String>,
) -> Response {
    metadata_response(&state, &registration_id, &tenant)
}

fn metadata_response(state: &MetadataState, registration_id: &str, tenant: &Tenant) -> Response {
    match render_metadata(state, registration_id, tenant) {
        Ok(xml) => {
            let disposition = content_disposition(&metadata_filename(tenant));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/xml; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                xml,
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn render_metadata(
    state: &MetadataState,
    registration_id: &str,
    tenant: &Tenant,
) -> SamlResult<String> {
    let registration = state.repository.resolve(registration_id, tenant)?;
    let base_url = state.base_url_provider.base_url(tenant);

    let xml = state
        .renderer
        .render(&registration, &base_url)
        .map_err(SamlError::MetadataGenerationFailed)?;

    tracing::info!(
        tenant_id = %tenant.id,
        registration_id = %registration.registration_id(),
        entity_id = %registration.entity_id(),
        "SAML SP metadata requested"
    );

    Ok(xml)
}

//! Common fixtures and test doubles for samlzone-api-saml integration tests.

use samlzone_api_saml::handlers::{MetadataRenderer, MetadataState, StaticBaseUrl};
use samlzone_api_saml::models::{AssertingPartyDescriptor, Registration};
use samlzone_api_saml::saml::expand_base_url;
use samlzone_api_saml::{RegistrationRepository, SpConfig};
use samlzone_core::{KeyWithCert, SamlConfig, Tenant, TenantId, TenantResolver};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness's captured writer.
#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("samlzone_api_saml=debug"))
            .with_test_writer()
            .try_init();
    });
}

#[allow(dead_code)]
pub const TEST_BASE_URL: &str = "https://login.samlzone.test";

/// Tenant resolver whose tenant can be swapped between lookups.
#[derive(Default)]
pub struct SwitchableTenantResolver {
    tenant: RwLock<Option<Tenant>>,
}

#[allow(dead_code)]
impl SwitchableTenantResolver {
    pub fn new(tenant: Tenant) -> Self {
        Self {
            tenant: RwLock::new(Some(tenant)),
        }
    }

    pub fn set(&self, tenant: Tenant) {
        *self.tenant.write().unwrap() = Some(tenant);
    }
}

impl TenantResolver for SwitchableTenantResolver {
    fn current_tenant(&self) -> Tenant {
        self.tenant
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Tenant::default_tenant(TenantId::new()))
    }
}

/// Renders a small, predictable stand-in for the metadata document.
pub struct StubRenderer;

impl MetadataRenderer for StubRenderer {
    fn render(&self, registration: &Registration, base_url: &str) -> Result<String, String> {
        Ok(format!(
            "<md:EntityDescriptor entityID=\"{}\"><md:AssertionConsumerService Location=\"{}\"/></md:EntityDescriptor>",
            registration.entity_id(),
            expand_base_url(registration.assertion_consumer_service_location(), base_url)
        ))
    }
}

/// Renderer that always fails.
#[allow(dead_code)]
pub struct FailingRenderer;

impl MetadataRenderer for FailingRenderer {
    fn render(&self, _registration: &Registration, _base_url: &str) -> Result<String, String> {
        Err("private key could not be loaded".to_string())
    }
}

#[allow(dead_code)]
pub fn key(name: &str) -> KeyWithCert {
    KeyWithCert::new(format!("{name}-key"), "", format!("{name}-cert"))
}

#[allow(dead_code)]
pub fn default_keys() -> Vec<KeyWithCert> {
    vec![key("default-1"), key("default-2")]
}

/// Config with entity id `entityId` and alias `entityIdAlias`.
pub fn sp_config() -> SpConfig {
    let mut config = SpConfig::new("entityId");
    config.entity_id_alias = Some("entityIdAlias".to_string());
    config.registration_id = "registrationId".to_string();
    config.asserting_party = AssertingPartyDescriptor::default();
    config
}

#[allow(dead_code)]
pub fn zone(subdomain: &str) -> Tenant {
    Tenant::new(TenantId::new(), subdomain)
}

#[allow(dead_code)]
pub fn zone_with_config(subdomain: &str, saml_config: SamlConfig) -> Tenant {
    zone(subdomain).with_saml_config(saml_config)
}

#[allow(dead_code)]
pub fn repository(
    config: &SpConfig,
    resolver: Arc<dyn TenantResolver>,
    keys: Vec<KeyWithCert>,
) -> RegistrationRepository {
    let mut config = config.clone();
    config.default_keys = keys;
    RegistrationRepository::from_config(&config, resolver).unwrap()
}

#[allow(dead_code)]
pub fn metadata_state(renderer: Arc<dyn MetadataRenderer>) -> MetadataState {
    let resolver = Arc::new(SwitchableTenantResolver::default());
    MetadataState {
        repository: Arc::new(repository(&sp_config(), resolver, default_keys())),
        renderer,
        base_url_provider: Arc::new(StaticBaseUrl::new(TEST_BASE_URL)),
    }
}

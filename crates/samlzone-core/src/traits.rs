//! Capabilities the resolution layer consumes from the surrounding system.
//!
//! Both traits are synchronous: a lookup is a pure computation over snapshots,
//! so implementations must hand back data they already hold.
//!
//! # Example
//!
//! ```
//! use samlzone_core::{
//!     CredentialStore, FixedTenantResolver, KeyWithCert, StaticCredentialStore, Tenant,
//!     TenantId, TenantResolver,
//! };
//!
//! let resolver = FixedTenantResolver::new(Tenant::new(TenantId::new(), "acme"));
//! assert_eq!(resolver.current_tenant().subdomain, "acme");
//!
//! let store = StaticCredentialStore::new(vec![KeyWithCert::new("key", "", "cert")]);
//! assert_eq!(store.default_keys().len(), 1);
//! ```

use crate::credentials::KeyWithCert;
use crate::tenant::Tenant;

/// Resolves the caller's tenant from ambient request context.
///
/// Object-safe so it can be shared as `Arc<dyn TenantResolver>`.
pub trait TenantResolver: Send + Sync {
    /// Snapshot of the current tenant.
    fn current_tenant(&self) -> Tenant;
}

/// System-wide default signing/decryption credentials.
pub trait CredentialStore: Send + Sync {
    /// Default credentials in configured order, primary first.
    fn default_keys(&self) -> Vec<KeyWithCert>;
}

/// Resolver that always answers with the same tenant.
///
/// Suits request-scoped wiring where the routing layer already determined the
/// tenant, and tests.
#[derive(Debug, Clone)]
pub struct FixedTenantResolver {
    tenant: Tenant,
}

impl FixedTenantResolver {
    #[must_use]
    pub fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }
}

impl TenantResolver for FixedTenantResolver {
    fn current_tenant(&self) -> Tenant {
        self.tenant.clone()
    }
}

/// Credential store backed by a fixed, ordered list.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    keys: Vec<KeyWithCert>,
}

impl StaticCredentialStore {
    #[must_use]
    pub fn new(keys: Vec<KeyWithCert>) -> Self {
        Self { keys }
    }
}

impl CredentialStore for StaticCredentialStore {
    fn default_keys(&self) -> Vec<KeyWithCert> {
        self.keys.clone()
    }
}

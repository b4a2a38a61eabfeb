//! # Monitoring Admin
//!
//! The read-only administrative surface. Every entry point takes an
//! identifier pattern (see [`crate::identifier`]) and returns the live objects
//! of one kind that match it, or fails with an [`AdminError`](crate::error::AdminError).
//!
//! | Entry point | Kind | Key |
//! |---|---|---|
//! | `get_system` | SystemObject | singleton |
//! | `get_vdbs` | Vdb | `name\|version` |
//! | `get_connector_types` | ConnectorType | `name` |
//! | `get_connector_bindings` | ConnectorBinding | `name` |
//! | `get_connector_bindings_in_vdb` | ConnectorBinding | VDB pattern |
//! | `get_extension_modules` | ExtensionModule | `name` |
//! | `get_queue_worker_pools` | QueueWorkerPool | `name` |
//! | `get_caches` | Cache | `name` |
//! | `get_sessions` | Session | `session` |
//! | `get_requests` | Request | `session\|request` |
//! | `get_source_requests` | SourceRequest | `session\|request\|node` |
//! | `get_property_definitions` | PropertyDefinition | per class |

mod registry_admin;

pub use registry_admin::RegistryMonitoringAdmin;

use crate::error::AdminResult;
use crate::models::{
    Cache, ConnectorBinding, ConnectorType, ExtensionModule, PropertyDefinition, QueueWorkerPool,
    Request, Session, SourceRequest, SystemObject, Vdb,
};
use async_trait::async_trait;

/// Read-only monitoring operations over the engine's live registries.
#[async_trait]
pub trait MonitoringAdmin: Send + Sync {
    /// The singleton system object.
    async fn get_system(&self) -> AdminResult<SystemObject>;

    async fn get_connector_types(&self, identifier: &str) -> AdminResult<Vec<ConnectorType>>;

    async fn get_vdbs(&self, identifier: &str) -> AdminResult<Vec<Vdb>>;

    async fn get_connector_bindings(&self, identifier: &str)
        -> AdminResult<Vec<ConnectorBinding>>;

    /// Bindings declared by the VDBs `vdb_identifier` resolves to.
    async fn get_connector_bindings_in_vdb(
        &self,
        vdb_identifier: &str,
    ) -> AdminResult<Vec<ConnectorBinding>>;

    async fn get_extension_modules(&self, identifier: &str) -> AdminResult<Vec<ExtensionModule>>;

    async fn get_queue_worker_pools(&self, identifier: &str) -> AdminResult<Vec<QueueWorkerPool>>;

    async fn get_caches(&self, identifier: &str) -> AdminResult<Vec<Cache>>;

    async fn get_sessions(&self, identifier: &str) -> AdminResult<Vec<Session>>;

    async fn get_requests(&self, identifier: &str) -> AdminResult<Vec<Request>>;

    async fn get_source_requests(&self, identifier: &str) -> AdminResult<Vec<SourceRequest>>;

    /// Property descriptors of `class_name`, with current values of the
    /// instance `identifier` names where one is live.
    async fn get_property_definitions(
        &self,
        identifier: &str,
        class_name: &str,
    ) -> AdminResult<Vec<PropertyDefinition>>;
}

//! Registry-backed [`MonitoringAdmin`].

use super::MonitoringAdmin;
use crate::catalog::{PropertyDefinitionCatalog, PropertyDescriptorSource};
use crate::config::AdminConfig;
use crate::constants::{DeploymentMode, MATCH_ALL};
use crate::error::{AdminError, AdminResult};
use crate::models::{
    Cache, ConnectorBinding, ConnectorType, ExtensionModule, PropertyDefinition, QueueWorkerPool,
    Request, Session, SourceRequest, SystemObject, Vdb,
};
use crate::registry::RegistrySet;
use crate::resolver::Resolver;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Answers monitoring queries by resolving identifiers against a
/// [`RegistrySet`].
#[derive(Debug, Clone)]
pub struct RegistryMonitoringAdmin {
    resolver: Resolver,
    catalog: PropertyDefinitionCatalog,
}

impl RegistryMonitoringAdmin {
    pub fn new(
        config: &AdminConfig,
        registries: RegistrySet,
        descriptors: Arc<dyn PropertyDescriptorSource>,
    ) -> Self {
        let resolver =
            Resolver::new(Arc::new(registries)).with_fetch_timeout(config.registry_timeout());
        let catalog = PropertyDefinitionCatalog::new(config.deployment_mode, descriptors);

        info!(
            deployment_mode = %config.deployment_mode,
            registry_timeout_ms = config.registry_timeout_ms,
            configured_kinds = resolver.registries().configured_kinds().len(),
            "Monitoring admin ready"
        );

        Self { resolver, catalog }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn deployment_mode(&self) -> DeploymentMode {
        self.catalog.mode()
    }
}

#[async_trait]
impl MonitoringAdmin for RegistryMonitoringAdmin {
    async fn get_system(&self) -> AdminResult<SystemObject> {
        let systems: Vec<SystemObject> = self.resolver.resolve(MATCH_ALL).await?;
        if systems.len() > 1 {
            debug!(
                count = systems.len(),
                "System registry holds several objects, using the first"
            );
        }
        systems
            .into_iter()
            .next()
            .ok_or_else(|| AdminError::system("System object registry is empty"))
    }

    async fn get_connector_types(&self, identifier: &str) -> AdminResult<Vec<ConnectorType>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_vdbs(&self, identifier: &str) -> AdminResult<Vec<Vdb>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_connector_bindings(
        &self,
        identifier: &str,
    ) -> AdminResult<Vec<ConnectorBinding>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_connector_bindings_in_vdb(
        &self,
        vdb_identifier: &str,
    ) -> AdminResult<Vec<ConnectorBinding>> {
        self.resolver
            .resolve_connector_bindings_in_vdb(vdb_identifier)
            .await
    }

    async fn get_extension_modules(&self, identifier: &str) -> AdminResult<Vec<ExtensionModule>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_queue_worker_pools(&self, identifier: &str) -> AdminResult<Vec<QueueWorkerPool>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_caches(&self, identifier: &str) -> AdminResult<Vec<Cache>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_sessions(&self, identifier: &str) -> AdminResult<Vec<Session>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_requests(&self, identifier: &str) -> AdminResult<Vec<Request>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_source_requests(&self, identifier: &str) -> AdminResult<Vec<SourceRequest>> {
        self.resolver.resolve(identifier).await
    }

    async fn get_property_definitions(
        &self,
        identifier: &str,
        class_name: &str,
    ) -> AdminResult<Vec<PropertyDefinition>> {
        self.catalog
            .definitions_for(identifier, class_name, &self.resolver)
            .await
    }
}

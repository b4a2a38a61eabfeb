//! # Registry Set
//!
//! One registry collaborator per object kind, assembled by the host engine at
//! startup. The set selects the registry-access path for a kind; a kind with
//! no registry configured surfaces as `SystemError` when queried.

use super::ObjectRegistry;
use crate::error::{AdminError, AdminResult};
use crate::models::{
    AdminObject, Cache, ConnectorBinding, ConnectorType, ExtensionModule, ObjectKind,
    QueueWorkerPool, Request, Session, SourceRequest, SystemObject, Vdb,
};
use std::fmt;
use std::sync::Arc;

/// Registries for every object kind.
#[derive(Default, Clone)]
pub struct RegistrySet {
    system: Option<Arc<dyn ObjectRegistry<SystemObject>>>,
    vdbs: Option<Arc<dyn ObjectRegistry<Vdb>>>,
    connector_types: Option<Arc<dyn ObjectRegistry<ConnectorType>>>,
    connector_bindings: Option<Arc<dyn ObjectRegistry<ConnectorBinding>>>,
    extension_modules: Option<Arc<dyn ObjectRegistry<ExtensionModule>>>,
    queue_worker_pools: Option<Arc<dyn ObjectRegistry<QueueWorkerPool>>>,
    caches: Option<Arc<dyn ObjectRegistry<Cache>>>,
    sessions: Option<Arc<dyn ObjectRegistry<Session>>>,
    requests: Option<Arc<dyn ObjectRegistry<Request>>>,
    source_requests: Option<Arc<dyn ObjectRegistry<SourceRequest>>>,
}

impl fmt::Debug for RegistrySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrySet")
            .field("configured_kinds", &self.configured_kinds())
            .finish()
    }
}

/// Maps an object type to its slot in a [`RegistrySet`].
pub trait RegistryAccess: AdminObject {
    fn registry(set: &RegistrySet) -> Option<&Arc<dyn ObjectRegistry<Self>>>;
}

macro_rules! registry_slot {
    ($ty:ty, $field:ident, $builder:ident) => {
        impl RegistryAccess for $ty {
            fn registry(set: &RegistrySet) -> Option<&Arc<dyn ObjectRegistry<Self>>> {
                set.$field.as_ref()
            }
        }

        impl RegistrySet {
            #[must_use]
            pub fn $builder(mut self, registry: Arc<dyn ObjectRegistry<$ty>>) -> Self {
                self.$field = Some(registry);
                self
            }
        }
    };
}

registry_slot!(SystemObject, system, with_system);
registry_slot!(Vdb, vdbs, with_vdbs);
registry_slot!(ConnectorType, connector_types, with_connector_types);
registry_slot!(ConnectorBinding, connector_bindings, with_connector_bindings);
registry_slot!(ExtensionModule, extension_modules, with_extension_modules);
registry_slot!(QueueWorkerPool, queue_worker_pools, with_queue_worker_pools);
registry_slot!(Cache, caches, with_caches);
registry_slot!(Session, sessions, with_sessions);
registry_slot!(Request, requests, with_requests);
registry_slot!(SourceRequest, source_requests, with_source_requests);

impl RegistrySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for `T`, or `SystemError` when none was configured.
    pub fn registry_for<T: RegistryAccess>(&self) -> AdminResult<&Arc<dyn ObjectRegistry<T>>> {
        T::registry(self).ok_or_else(|| {
            AdminError::system(format!("No registry configured for {}", T::KIND))
        })
    }

    /// Kinds that have a registry, in [`ObjectKind::ALL`] order.
    pub fn configured_kinds(&self) -> Vec<ObjectKind> {
        let configured = [
            self.system.is_some(),
            self.vdbs.is_some(),
            self.connector_types.is_some(),
            self.connector_bindings.is_some(),
            self.extension_modules.is_some(),
            self.queue_worker_pools.is_some(),
            self.caches.is_some(),
            self.sessions.is_some(),
            self.requests.is_some(),
            self.source_requests.is_some(),
        ];
        ObjectKind::ALL
            .into_iter()
            .zip(configured)
            .filter_map(|(kind, present)| present.then_some(kind))
            .collect()
    }
}

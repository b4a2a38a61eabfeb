//! # In-Memory Registry
//!
//! Order-preserving [`ObjectRegistry`] backed by a `parking_lot::RwLock`.
//! Embedded hosts publish their live objects into one of these, and tests use
//! it as a registry double.
//!
//! ## Usage
//!
//! ```rust
//! use federation_admin::models::ConnectorType;
//! use federation_admin::registry::{InMemoryRegistry, ObjectRegistry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = InMemoryRegistry::with_objects(
//!     "connector_types",
//!     vec![ConnectorType::new("JDBC"), ConnectorType::new("Text File")],
//! );
//! registry.register(ConnectorType::new("LDAP"));
//!
//! let snapshot = registry.list_all().await?;
//! assert_eq!(snapshot.len(), 3);
//! # Ok(())
//! # }
//! ```

use super::ObjectRegistry;
use crate::error::{AdminError, AdminResult};
use crate::models::AdminObject;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub struct InMemoryRegistry<T: AdminObject> {
    /// Objects in registration order
    objects: RwLock<Vec<T>>,

    /// Registry name for logging
    name: String,

    /// When set, enumeration fails as if the subsystem were unreachable
    unavailable: AtomicBool,
}

impl<T: AdminObject> fmt::Debug for InMemoryRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRegistry")
            .field("name", &self.name)
            .field("kind", &T::KIND)
            .field("len", &self.objects.read().len())
            .field("unavailable", &self.unavailable.load(Ordering::Relaxed))
            .finish()
    }
}

impl<T: AdminObject> InMemoryRegistry<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_objects(name, Vec::new())
    }

    pub fn with_objects(name: impl Into<String>, objects: Vec<T>) -> Self {
        Self {
            objects: RwLock::new(objects),
            name: name.into(),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Add an object, replacing any object with the same identifier in place.
    pub fn register(&self, object: T) {
        let identifier = object.identifier();
        let mut objects = self.objects.write();
        match objects.iter().position(|o| o.identifier() == identifier) {
            Some(index) => objects[index] = object,
            None => objects.push(object),
        }
        debug!(registry = %self.name, identifier = %identifier, "Registered object");
    }

    /// Remove the object with the given identifier, returning it if present.
    pub fn remove(&self, identifier: &str) -> Option<T> {
        let mut objects = self.objects.write();
        let index = objects.iter().position(|o| o.identifier() == identifier)?;
        Some(objects.remove(index))
    }

    pub fn clear(&self) {
        self.objects.write().clear();
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Simulate the backing subsystem going away (or coming back).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }
}

#[async_trait]
impl<T: AdminObject> ObjectRegistry<T> for InMemoryRegistry<T> {
    async fn list_all(&self) -> AdminResult<Vec<T>> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(AdminError::system(format!(
                "{} registry '{}' is unavailable",
                T::KIND,
                self.name
            )));
        }
        Ok(self.objects.read().clone())
    }

    fn registry_name(&self) -> &str {
        &self.name
    }
}

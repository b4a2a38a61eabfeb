//! # Property Descriptor Sources
//!
//! Class-to-descriptor-set lookup. The engine's configuration subsystem owns
//! the real schema; [`InMemoryDescriptorSource`] is the in-process variant
//! embedded hosts populate at startup.

use super::AdminClass;
use crate::error::AdminResult;
use crate::models::PropertyDefinition;
use async_trait::async_trait;
use dashmap::DashMap;
use std::fmt;

/// Supplies the configurable property descriptors of a class.
///
/// A class with nothing registered yields an empty set, not an error.
#[async_trait]
pub trait PropertyDescriptorSource: Send + Sync + fmt::Debug {
    async fn descriptors_for(&self, class: AdminClass) -> AdminResult<Vec<PropertyDefinition>>;

    /// Source name for logging.
    fn source_name(&self) -> &str;
}

/// Descriptor sets keyed by class; descriptor order is registration order.
pub struct InMemoryDescriptorSource {
    descriptors: DashMap<AdminClass, Vec<PropertyDefinition>>,
    name: String,
}

impl fmt::Debug for InMemoryDescriptorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes: Vec<AdminClass> = self.descriptors.iter().map(|entry| *entry.key()).collect();
        f.debug_struct("InMemoryDescriptorSource")
            .field("name", &self.name)
            .field("classes", &classes)
            .finish()
    }
}

impl Default for InMemoryDescriptorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDescriptorSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: DashMap::new(),
            name: "InMemoryDescriptorSource".to_string(),
        }
    }

    /// Replace the descriptor set of `class`.
    pub fn register(&self, class: AdminClass, definitions: Vec<PropertyDefinition>) {
        self.descriptors.insert(class, definitions);
    }

    /// Append one descriptor, replacing an existing one of the same name.
    pub fn add(&self, class: AdminClass, definition: PropertyDefinition) {
        let mut entry = self.descriptors.entry(class).or_default();
        match entry.iter().position(|d| d.name == definition.name) {
            Some(index) => entry[index] = definition,
            None => entry.push(definition),
        }
    }

    #[must_use]
    pub fn with_definitions(self, class: AdminClass, definitions: Vec<PropertyDefinition>) -> Self {
        self.register(class, definitions);
        self
    }
}

#[async_trait]
impl PropertyDescriptorSource for InMemoryDescriptorSource {
    async fn descriptors_for(&self, class: AdminClass) -> AdminResult<Vec<PropertyDefinition>> {
        Ok(self
            .descriptors
            .get(&class)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

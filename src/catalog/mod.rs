//! # Property Definition Catalog
//!
//! Describes the configurable properties of an administrable class, gated by
//! the active deployment mode. For classes backed by a live registry the
//! descriptors carry the current values of the instance the identifier names.

mod admin_class;
mod descriptor_source;

pub use admin_class::AdminClass;
pub use descriptor_source::{InMemoryDescriptorSource, PropertyDescriptorSource};

use crate::constants::DeploymentMode;
use crate::error::{AdminError, AdminResult};
use crate::identifier::{classify, Pattern};
use crate::models::{
    ConnectorBinding, ConnectorType, PropertyDefinition, PropertyValues, SystemObject,
};
use crate::registry::RegistryAccess;
use crate::resolver::{validate_shape, Resolver};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Mode-aware property introspection.
#[derive(Debug, Clone)]
pub struct PropertyDefinitionCatalog {
    mode: DeploymentMode,
    source: Arc<dyn PropertyDescriptorSource>,
}

impl PropertyDefinitionCatalog {
    pub fn new(mode: DeploymentMode, source: Arc<dyn PropertyDescriptorSource>) -> Self {
        Self { mode, source }
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Check that `class_name` names a class the active mode exposes.
    pub fn supported_class(&self, class_name: &str) -> AdminResult<AdminClass> {
        match AdminClass::from_class_name(class_name) {
            Some(class) if self.mode.supports(class) => Ok(class),
            _ => {
                debug!(
                    class_name = %class_name,
                    mode = %self.mode,
                    supported = ?self.mode.supported_classes(),
                    "Rejected property definition class"
                );
                Err(AdminError::UnsupportedClass {
                    class_name: class_name.to_string(),
                    mode: self.mode,
                })
            }
        }
    }

    /// Property descriptors of `class_name`, scoped by `identifier`.
    ///
    /// The class is checked against the deployment mode before anything else
    /// is consulted. For registry-backed classes the descriptors carry the
    /// values of the first live instance the identifier resolves to, in
    /// registry order; when nothing resolves the defaults are reported.
    #[instrument(skip(self, resolver), fields(mode = %self.mode))]
    pub async fn definitions_for(
        &self,
        identifier: &str,
        class_name: &str,
        resolver: &Resolver,
    ) -> AdminResult<Vec<PropertyDefinition>> {
        let class = self.supported_class(class_name)?;
        let pattern = classify(identifier)?;

        let current = match class.object_kind() {
            Some(kind) => {
                validate_shape(&pattern, kind, identifier)?;
                match class {
                    AdminClass::SystemObject => {
                        first_instance_values::<SystemObject>(resolver, &pattern).await?
                    }
                    AdminClass::ConnectorBinding => {
                        first_instance_values::<ConnectorBinding>(resolver, &pattern).await?
                    }
                    AdminClass::ConnectorType => {
                        first_instance_values::<ConnectorType>(resolver, &pattern).await?
                    }
                    _ => None,
                }
            }
            None => None,
        };

        let descriptors = self.source.descriptors_for(class).await?;
        debug!(
            class = %class,
            source = self.source.source_name(),
            descriptors = descriptors.len(),
            with_values = current.is_some(),
            "Collected property definitions"
        );

        Ok(descriptors
            .iter()
            .map(|descriptor| {
                let value = current
                    .as_ref()
                    .and_then(|values| values.get(&descriptor.name))
                    .map(String::as_str);
                descriptor.with_current_value(value)
            })
            .collect())
    }
}

async fn first_instance_values<T: RegistryAccess>(
    resolver: &Resolver,
    pattern: &Pattern,
) -> AdminResult<Option<PropertyValues>> {
    let instances: Vec<T> = resolver.resolve_pattern(pattern).await?;
    Ok(instances
        .into_iter()
        .next()
        .and_then(|instance| instance.properties().cloned()))
}

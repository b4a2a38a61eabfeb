use super::{AdminObject, ObjectKey, ObjectKind, PropertyValues};
use crate::constants::DeploymentMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single system-wide object of a running engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemObject {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub deployment_mode: DeploymentMode,
    #[serde(default)]
    pub properties: PropertyValues,
}

impl SystemObject {
    pub fn new(name: impl Into<String>, deployment_mode: DeploymentMode) -> Self {
        Self {
            name: name.into(),
            started_at: Utc::now(),
            deployment_mode,
            properties: PropertyValues::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl AdminObject for SystemObject {
    const KIND: ObjectKind = ObjectKind::SystemObject;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }

    fn properties(&self) -> Option<&PropertyValues> {
        Some(&self.properties)
    }
}

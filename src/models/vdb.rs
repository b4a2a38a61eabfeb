use super::{AdminObject, ObjectKey, ObjectKind, PropertyValues};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deployment status of a virtual database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdbStatus {
    Active,
    Inactive,
    Incomplete,
    Deleted,
}

/// A named, versioned virtual database.
///
/// Several VDBs may share a name; the version tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vdb {
    pub name: String,
    pub version: String,
    pub status: VdbStatus,
    /// Names of the connector bindings this VDB declares, in declaration order
    #[serde(default)]
    pub connector_bindings: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub properties: PropertyValues,
}

impl Vdb {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            status: VdbStatus::Active,
            connector_bindings: Vec::new(),
            models: Vec::new(),
            created_at: Utc::now(),
            properties: PropertyValues::new(),
        }
    }

    pub fn with_status(mut self, status: VdbStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_binding(mut self, binding_name: impl Into<String>) -> Self {
        self.connector_bindings.push(binding_name.into());
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.models.push(model_name.into());
        self
    }
}

impl AdminObject for Vdb {
    const KIND: ObjectKind = ObjectKind::Vdb;

    fn key(&self) -> ObjectKey {
        ObjectKey::new(vec![self.name.clone(), self.version.clone()])
    }

    fn properties(&self) -> Option<&PropertyValues> {
        Some(&self.properties)
    }
}

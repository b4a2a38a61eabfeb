use super::{AdminObject, ObjectKey, ObjectKind, PropertyValues};
use serde::{Deserialize, Serialize};

/// A kind of connector that bindings can be created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: PropertyValues,
}

impl ConnectorType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: PropertyValues::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl AdminObject for ConnectorType {
    const KIND: ObjectKind = ObjectKind::ConnectorType;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }

    fn properties(&self) -> Option<&PropertyValues> {
        Some(&self.properties)
    }
}

/// Runtime state of a connector binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingState {
    Open,
    NotConfigured,
    Closed,
    DataSourceUnavailable,
    Failed,
}

/// A configured instance of a connector type, wired to a physical source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorBinding {
    pub name: String,
    pub connector_type: String,
    pub state: BindingState,
    #[serde(default)]
    pub properties: PropertyValues,
}

impl ConnectorBinding {
    pub fn new(name: impl Into<String>, connector_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connector_type: connector_type.into(),
            state: BindingState::Open,
            properties: PropertyValues::new(),
        }
    }

    pub fn with_state(mut self, state: BindingState) -> Self {
        self.state = state;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl AdminObject for ConnectorBinding {
    const KIND: ObjectKind = ObjectKind::ConnectorBinding;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }

    fn properties(&self) -> Option<&PropertyValues> {
        Some(&self.properties)
    }
}

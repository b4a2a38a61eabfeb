//! Configurable property descriptors.
//!
//! Descriptors are class-level schema. The `value` field is the only
//! instance-level part and is filled in by the catalog when an instance
//! resolves.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValueType {
    #[default]
    String,
    Integer,
    Long,
    Boolean,
    Float,
    Password,
}

/// Description of one configurable property of an administrable class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value_type: PropertyValueType,
    #[serde(default)]
    pub default_value: Option<String>,
    /// Current value of the scoped instance, or the default when none resolved
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_modifiable")]
    pub modifiable: bool,
    #[serde(default)]
    pub masked: bool,
    #[serde(default)]
    pub expert: bool,
    #[serde(default)]
    pub requires_restart: bool,
    #[serde(default)]
    pub allowed_values: Vec<String>,
}

fn default_modifiable() -> bool {
    true
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            value_type: PropertyValueType::String,
            default_value: None,
            value: None,
            required: false,
            modifiable: true,
            masked: false,
            expert: false,
            requires_restart: false,
            allowed_values: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value_type(mut self, value_type: PropertyValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the value is limited to `allowed_values`.
    pub fn is_constrained(&self) -> bool {
        !self.allowed_values.is_empty()
    }

    /// Copy of this descriptor carrying `current` (or the default) as its value.
    pub fn with_current_value(&self, current: Option<&str>) -> Self {
        let mut definition = self.clone();
        definition.value = current
            .map(str::to_string)
            .or_else(|| self.default_value.clone());
        definition
    }
}

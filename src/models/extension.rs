use super::{AdminObject, ObjectKey, ObjectKind};
use serde::{Deserialize, Serialize};

/// A deployed extension module (connector jar, function library, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionModule {
    pub name: String,
    pub module_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub size_bytes: u64,
}

impl ExtensionModule {
    pub fn new(name: impl Into<String>, module_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            module_type: module_type.into(),
            description: None,
            size_bytes,
        }
    }
}

impl AdminObject for ExtensionModule {
    const KIND: ObjectKind = ObjectKind::ExtensionModule;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }
}

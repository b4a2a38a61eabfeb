//! Administrable classes and which deployment modes expose them.

use crate::constants::DeploymentMode;
use crate::models::ObjectKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A class whose configurable properties can be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminClass {
    SystemObject,
    Host,
    ProcessObject,
    ConnectorBinding,
    ConnectorType,
    Dqp,
    Resource,
}

impl AdminClass {
    pub const ALL: [AdminClass; 7] = [
        AdminClass::SystemObject,
        AdminClass::Host,
        AdminClass::ProcessObject,
        AdminClass::ConnectorBinding,
        AdminClass::ConnectorType,
        AdminClass::Dqp,
        AdminClass::Resource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminClass::SystemObject => "SystemObject",
            AdminClass::Host => "Host",
            AdminClass::ProcessObject => "ProcessObject",
            AdminClass::ConnectorBinding => "ConnectorBinding",
            AdminClass::ConnectorType => "ConnectorType",
            AdminClass::Dqp => "DQP",
            AdminClass::Resource => "Resource",
        }
    }

    /// Parse a caller-supplied class name.
    ///
    /// Accepts the simple name (`"Host"`) or a dotted qualified name whose
    /// final segment is the simple name. Case-sensitive.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        let simple = class_name.rsplit('.').next().unwrap_or(class_name);
        Self::ALL.into_iter().find(|class| class.as_str() == simple)
    }

    /// Object kind whose live instances carry this class's property values.
    ///
    /// Hosts, processes, the query engine and resources have no registry in
    /// this layer.
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            AdminClass::SystemObject => Some(ObjectKind::SystemObject),
            AdminClass::ConnectorBinding => Some(ObjectKind::ConnectorBinding),
            AdminClass::ConnectorType => Some(ObjectKind::ConnectorType),
            AdminClass::Host | AdminClass::ProcessObject | AdminClass::Dqp | AdminClass::Resource => {
                None
            }
        }
    }
}

impl fmt::Display for AdminClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DeploymentMode {
    /// Whether this mode exposes `class` for property introspection.
    pub fn supports(&self, class: AdminClass) -> bool {
        match self {
            DeploymentMode::Full => true,
            DeploymentMode::Embedded => matches!(
                class,
                AdminClass::ConnectorBinding | AdminClass::ConnectorType | AdminClass::SystemObject
            ),
        }
    }

    pub fn supported_classes(&self) -> Vec<AdminClass> {
        AdminClass::ALL
            .into_iter()
            .filter(|class| self.supports(*class))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_qualified_names() {
        assert_eq!(AdminClass::from_class_name("Host"), Some(AdminClass::Host));
        assert_eq!(
            AdminClass::from_class_name("com.example.admin.objects.ConnectorBinding"),
            Some(AdminClass::ConnectorBinding)
        );
        assert_eq!(AdminClass::from_class_name("DQP"), Some(AdminClass::Dqp));
        assert_eq!(AdminClass::from_class_name("host"), None);
        assert_eq!(AdminClass::from_class_name("Session"), None);
        assert_eq!(AdminClass::from_class_name(""), None);
    }

    #[test]
    fn test_embedded_mode_supports_three_classes() {
        assert_eq!(
            DeploymentMode::Embedded.supported_classes(),
            vec![
                AdminClass::SystemObject,
                AdminClass::ConnectorBinding,
                AdminClass::ConnectorType
            ]
        );
        assert_eq!(DeploymentMode::Full.supported_classes().len(), AdminClass::ALL.len());
    }

    #[test]
    fn test_object_kind_mapping() {
        assert_eq!(
            AdminClass::ConnectorType.object_kind(),
            Some(ObjectKind::ConnectorType)
        );
        assert_eq!(AdminClass::Host.object_kind(), None);
    }
}

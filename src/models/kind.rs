//! Object kinds and the shape of their natural keys.
//!
//! Key-shape validation is table-driven: every kind has exactly one
//! [`KeyShape`] entry and the resolver consults only that table.

use crate::constants::DELIMITER_STR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of live runtime objects the admin layer can locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    SystemObject,
    Vdb,
    ConnectorType,
    ConnectorBinding,
    ExtensionModule,
    QueueWorkerPool,
    Cache,
    Session,
    Request,
    SourceRequest,
}

/// Structure of a kind's natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyShape {
    /// Number of segments in the natural key
    pub segments: usize,
    /// Whether an exact pattern may name only the leading segments
    pub partial_exact: bool,
}

impl KeyShape {
    const fn single() -> Self {
        Self {
            segments: 1,
            partial_exact: false,
        }
    }
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 10] = [
        ObjectKind::SystemObject,
        ObjectKind::Vdb,
        ObjectKind::ConnectorType,
        ObjectKind::ConnectorBinding,
        ObjectKind::ExtensionModule,
        ObjectKind::QueueWorkerPool,
        ObjectKind::Cache,
        ObjectKind::Session,
        ObjectKind::Request,
        ObjectKind::SourceRequest,
    ];

    pub const fn key_shape(&self) -> KeyShape {
        match self {
            ObjectKind::Vdb => KeyShape {
                segments: 2,
                partial_exact: true,
            },
            ObjectKind::Request => KeyShape {
                segments: 2,
                partial_exact: false,
            },
            ObjectKind::SourceRequest => KeyShape {
                segments: 3,
                partial_exact: false,
            },
            ObjectKind::SystemObject
            | ObjectKind::ConnectorType
            | ObjectKind::ConnectorBinding
            | ObjectKind::ExtensionModule
            | ObjectKind::QueueWorkerPool
            | ObjectKind::Cache
            | ObjectKind::Session => KeyShape::single(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::SystemObject => "SystemObject",
            ObjectKind::Vdb => "VDB",
            ObjectKind::ConnectorType => "ConnectorType",
            ObjectKind::ConnectorBinding => "ConnectorBinding",
            ObjectKind::ExtensionModule => "ExtensionModule",
            ObjectKind::QueueWorkerPool => "QueueWorkerPool",
            ObjectKind::Cache => "Cache",
            ObjectKind::Session => "Session",
            ObjectKind::Request => "Request",
            ObjectKind::SourceRequest => "SourceRequest",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered segment values of an object's natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(Vec<String>);

impl ObjectKey {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn single(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key in caller-facing identifier form.
    pub fn identifier(&self) -> String {
        self.0.join(DELIMITER_STR)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SEGMENTS;

    #[test]
    fn test_key_shape_table() {
        assert_eq!(ObjectKind::Vdb.key_shape().segments, 2);
        assert!(ObjectKind::Vdb.key_shape().partial_exact);
        assert_eq!(ObjectKind::Request.key_shape().segments, 2);
        assert!(!ObjectKind::Request.key_shape().partial_exact);
        assert_eq!(ObjectKind::SourceRequest.key_shape().segments, 3);
        assert_eq!(ObjectKind::Session.key_shape().segments, 1);
        assert_eq!(ObjectKind::ConnectorType.key_shape().segments, 1);
    }

    #[test]
    fn test_no_kind_exceeds_max_segments() {
        for kind in ObjectKind::ALL {
            assert!(kind.key_shape().segments <= MAX_SEGMENTS, "{kind}");
        }
    }

    #[test]
    fn test_object_key_identifier() {
        let key = ObjectKey::new(vec!["12".to_string(), "3".to_string(), "0".to_string()]);
        assert_eq!(key.identifier(), "12|3|0");
        assert_eq!(key.len(), 3);
        assert_eq!(ObjectKey::single("Parts").to_string(), "Parts");
    }
}

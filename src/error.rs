//! Error types for the administrative introspection layer.
//!
//! Every resolver and catalog operation fails with exactly one [`AdminError`].
//! The taxonomy is flat: callers branch on [`AdminError::kind`] and show the
//! `Display` text to operators. Nothing here is retried internally.

use crate::constants::DeploymentMode;
use crate::models::ObjectKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The identifier string is not a well-formed pattern
    #[error("Malformed identifier '{identifier}': {reason}")]
    MalformedIdentifier { identifier: String, reason: String },

    /// Well-formed pattern whose shape does not fit the requested kind
    #[error("Invalid identifier '{identifier}' for {kind}: {reason}")]
    InvalidIdentifier {
        identifier: String,
        kind: ObjectKind,
        reason: String,
    },

    /// Property-definition request for a class the active mode does not expose
    #[error("Unsupported class '{class_name}' in {mode} mode")]
    UnsupportedClass {
        class_name: String,
        mode: DeploymentMode,
    },

    /// Registry collaborator unreachable, timed out, or otherwise failed
    #[error("System error: {0}")]
    SystemError(String),
}

impl AdminError {
    pub fn malformed(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        AdminError::MalformedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid(
        identifier: impl Into<String>,
        kind: ObjectKind,
        reason: impl Into<String>,
    ) -> Self {
        AdminError::InvalidIdentifier {
            identifier: identifier.into(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        AdminError::SystemError(message.into())
    }

    /// Flat tag for this failure.
    pub fn kind(&self) -> AdminErrorKind {
        match self {
            AdminError::MalformedIdentifier { .. } => AdminErrorKind::MalformedIdentifier,
            AdminError::InvalidIdentifier { .. } => AdminErrorKind::InvalidIdentifier,
            AdminError::UnsupportedClass { .. } => AdminErrorKind::UnsupportedClass,
            AdminError::SystemError(_) => AdminErrorKind::SystemError,
        }
    }
}

/// Discriminant of [`AdminError`], stable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminErrorKind {
    MalformedIdentifier,
    InvalidIdentifier,
    UnsupportedClass,
    SystemError,
}

impl AdminErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminErrorKind::MalformedIdentifier => "malformed_identifier",
            AdminErrorKind::InvalidIdentifier => "invalid_identifier",
            AdminErrorKind::UnsupportedClass => "unsupported_class",
            AdminErrorKind::SystemError => "system_error",
        }
    }
}

impl fmt::Display for AdminErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type AdminResult<T> = std::result::Result<T, AdminError>;

//! Sessions and the requests running inside them.
//!
//! These registries churn continuously; a snapshot may already be stale by
//! the time a caller looks at it.

use super::{AdminObject, ObjectKey, ObjectKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: u64,
    pub user_name: String,
    #[serde(default)]
    pub application_name: Option<String>,
    pub vdb_name: String,
    pub vdb_version: String,
    pub logged_in_at: DateTime<Utc>,
    #[serde(default)]
    pub client_host: Option<String>,
}

impl Session {
    pub fn new(
        session_id: u64,
        user_name: impl Into<String>,
        vdb_name: impl Into<String>,
        vdb_version: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            user_name: user_name.into(),
            application_name: None,
            vdb_name: vdb_name.into(),
            vdb_version: vdb_version.into(),
            logged_in_at: Utc::now(),
            client_host: None,
        }
    }
}

impl AdminObject for Session {
    const KIND: ObjectKind = ObjectKind::Session;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(self.session_id.to_string())
    }
}

/// An in-flight client request, numbered within its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub session_id: u64,
    pub request_id: u64,
    pub command: String,
    pub started_at: DateTime<Utc>,
    /// Whether the request was issued by a connector against a source
    #[serde(default)]
    pub source_request: bool,
}

impl Request {
    pub fn new(session_id: u64, request_id: u64, command: impl Into<String>) -> Self {
        Self {
            session_id,
            request_id,
            command: command.into(),
            started_at: Utc::now(),
            source_request: false,
        }
    }
}

impl AdminObject for Request {
    const KIND: ObjectKind = ObjectKind::Request;

    fn key(&self) -> ObjectKey {
        ObjectKey::new(vec![
            self.session_id.to_string(),
            self.request_id.to_string(),
        ])
    }
}

/// The part of a request pushed down to one source, identified by plan node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRequest {
    pub session_id: u64,
    pub request_id: u64,
    pub node_id: u32,
    pub connector_binding: String,
    pub command: String,
    pub started_at: DateTime<Utc>,
}

impl SourceRequest {
    pub fn new(
        session_id: u64,
        request_id: u64,
        node_id: u32,
        connector_binding: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            request_id,
            node_id,
            connector_binding: connector_binding.into(),
            command: command.into(),
            started_at: Utc::now(),
        }
    }
}

impl AdminObject for SourceRequest {
    const KIND: ObjectKind = ObjectKind::SourceRequest;

    fn key(&self) -> ObjectKey {
        ObjectKey::new(vec![
            self.session_id.to_string(),
            self.request_id.to_string(),
            self.node_id.to_string(),
        ])
    }
}

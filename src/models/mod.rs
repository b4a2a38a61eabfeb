//! # Administrative Object Model
//!
//! Read-only snapshots of the live runtime objects an operator can inspect.
//! The engine subsystems own the real objects; these values are what a
//! registry collaborator hands back from a single enumeration.
//!
//! ## Module Organization
//!
//! - [`kind`] - Object kinds, key shapes and natural keys
//! - [`system`] - The singleton system object
//! - [`vdb`] - Virtual databases (name + version)
//! - [`connector`] - Connector types and connector bindings
//! - [`extension`] - Extension modules
//! - [`runtime`] - Queue worker pools and caches
//! - [`session`] - Sessions, requests and per-source requests
//! - [`property`] - Configurable property descriptors

pub mod connector;
pub mod extension;
pub mod kind;
pub mod property;
pub mod runtime;
pub mod session;
pub mod system;
pub mod vdb;

pub use connector::{BindingState, ConnectorBinding, ConnectorType};
pub use extension::ExtensionModule;
pub use kind::{KeyShape, ObjectKey, ObjectKind};
pub use property::{PropertyDefinition, PropertyValueType};
pub use runtime::{Cache, QueueWorkerPool, WorkerPoolStats};
pub use session::{Request, Session, SourceRequest};
pub use system::SystemObject;
pub use vdb::{Vdb, VdbStatus};

use std::collections::BTreeMap;
use std::fmt;

/// Current configuration values of an object, keyed by property name.
pub type PropertyValues = BTreeMap<String, String>;

/// Contract shared by every administrable object.
///
/// `key()` must be stable for the lifetime of the object and have exactly
/// `KIND.key_shape().segments` segments.
pub trait AdminObject: Clone + Send + Sync + fmt::Debug + 'static {
    /// Kind every instance of this type belongs to.
    const KIND: ObjectKind;

    /// Natural key used for identifier matching.
    fn key(&self) -> ObjectKey;

    /// Caller-facing identifier, the key joined by the delimiter.
    fn identifier(&self) -> String {
        self.key().identifier()
    }

    /// Current configuration values, if this kind carries any.
    fn properties(&self) -> Option<&PropertyValues> {
        None
    }
}

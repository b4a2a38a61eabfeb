//! # Registry Infrastructure
//!
//! Read-only access to the engine's live runtime registries.
//!
//! ## Overview
//!
//! The runtime subsystems that own VDBs, bindings, sessions, requests, caches
//! and worker pools are external to this crate. They are reached only through
//! the [`ObjectRegistry`] contract, one registry per object kind, grouped in a
//! [`RegistrySet`].
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── ObjectRegistry<T>     (per-kind enumeration contract)
//! ├── InMemoryRegistry<T>   (order-preserving in-process registry)
//! └── RegistrySet           (kind -> registry selection)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use federation_admin::models::{Session, Vdb};
//! use federation_admin::registry::{InMemoryRegistry, RegistrySet};
//! use std::sync::Arc;
//!
//! let registries = RegistrySet::new()
//!     .with_vdbs(Arc::new(InMemoryRegistry::with_objects(
//!         "vdbs",
//!         vec![Vdb::new("Parts", "1")],
//!     )))
//!     .with_sessions(Arc::new(InMemoryRegistry::<Session>::new("sessions")));
//!
//! assert_eq!(registries.configured_kinds().len(), 2);
//! ```

pub mod memory;
pub mod object_registry;
pub mod registry_set;

pub use memory::InMemoryRegistry;
pub use object_registry::ObjectRegistry;
pub use registry_set::{RegistryAccess, RegistrySet};

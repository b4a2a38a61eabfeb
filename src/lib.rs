#![allow(clippy::doc_markdown)] // Allow technical terms like VDB, DQP in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Federation Admin
//!
//! Administrative introspection core for a federated query engine.
//!
//! ## Overview
//!
//! An operator names objects with an identifier pattern (an exact key, a
//! prefix ending in `*`, or `*` alone) and asks for one object kind. The
//! crate resolves the pattern against the engine's live runtime registries
//! and returns the matching snapshots, or the property descriptors of a
//! class, without ever mutating runtime state.
//!
//! ## Architecture
//!
//! ```text
//! MonitoringAdmin ──► Resolver ──► RegistrySet ──► ObjectRegistry<T>
//!        │               ▲
//!        └──► PropertyDefinitionCatalog ──► PropertyDescriptorSource
//! ```
//!
//! ## Identifier Syntax
//!
//! | Pattern | Meaning |
//! |---|---|
//! | `*` | every object of the kind |
//! | `Parts\|*` | every version of VDB `Parts` |
//! | `Par*` | every key whose first segment starts with `Par` |
//! | `Parts\|1` | exactly VDB `Parts` version `1` |
//! | `5\|2\|0` | source request node `0` of request `2` in session `5` |
//!
//! ## Module Organization
//!
//! - [`admin`] - The monitoring entry points and their registry-backed adapter
//! - [`catalog`] - Mode-aware property-definition introspection
//! - [`config`] - Layered configuration
//! - [`constants`] - Identifier syntax and deployment modes
//! - [`error`] - The admin error taxonomy
//! - [`identifier`] - Pattern classification
//! - [`logging`] - Console tracing setup
//! - [`models`] - Administrative object snapshots
//! - [`registry`] - Registry collaborators
//! - [`resolver`] - Pattern resolution against registries
//!
//! ## Quick Start
//!
//! ```rust
//! use federation_admin::admin::{MonitoringAdmin, RegistryMonitoringAdmin};
//! use federation_admin::catalog::InMemoryDescriptorSource;
//! use federation_admin::config::AdminConfig;
//! use federation_admin::models::Vdb;
//! use federation_admin::registry::{InMemoryRegistry, RegistrySet};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let registries = RegistrySet::new().with_vdbs(Arc::new(InMemoryRegistry::with_objects(
//!     "vdbs",
//!     vec![Vdb::new("Parts", "1"), Vdb::new("Parts", "2"), Vdb::new("Orders", "1")],
//! )));
//!
//! let admin = RegistryMonitoringAdmin::new(
//!     &AdminConfig::default(),
//!     registries,
//!     Arc::new(InMemoryDescriptorSource::new()),
//! );
//!
//! let parts = admin.get_vdbs("Parts|*").await.unwrap();
//! assert_eq!(parts.len(), 2);
//! # });
//! ```

pub mod admin;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod models;
pub mod registry;
pub mod resolver;

pub use admin::{MonitoringAdmin, RegistryMonitoringAdmin};
pub use catalog::{
    AdminClass, InMemoryDescriptorSource, PropertyDefinitionCatalog, PropertyDescriptorSource,
};
pub use config::AdminConfig;
pub use constants::DeploymentMode;
pub use error::{AdminError, AdminErrorKind, AdminResult};
pub use identifier::{classify, Pattern};
pub use registry::{InMemoryRegistry, ObjectRegistry, RegistryAccess, RegistrySet};
pub use resolver::Resolver;

//! # Object Registry Contract
//!
//! The read-only enumeration interface the engine's runtime subsystems expose
//! for each object kind. Implementations own their synchronization; the
//! resolver treats one `list_all()` call as one atomic snapshot.

use crate::error::AdminResult;
use crate::models::AdminObject;
use async_trait::async_trait;
use std::fmt;

/// Enumeration of the live objects of one kind.
///
/// ## Contract
///
/// - **DO**: Return objects in the registry's natural enumeration order
/// - **DO**: Return an empty vector when nothing is live
/// - **DO**: Fail with `SystemError` when the backing subsystem is unreachable
/// - **DON'T**: Mutate state while enumerating
/// - **DON'T**: Filter; pattern matching belongs to the resolver
#[async_trait]
pub trait ObjectRegistry<T: AdminObject>: Send + Sync + fmt::Debug {
    /// Momentary snapshot of every live object of kind `T::KIND`.
    async fn list_all(&self) -> AdminResult<Vec<T>>;

    /// Registry name for logging.
    fn registry_name(&self) -> &str;
}

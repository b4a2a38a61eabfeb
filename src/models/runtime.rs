//! Worker pools and caches.
//!
//! Metric values are whatever the owning subsystem reported at enumeration
//! time; nothing here computes them.

use super::{AdminObject, ObjectKey, ObjectKind};
use serde::{Deserialize, Serialize};

/// Counters of a worker pool's request queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPoolStats {
    pub queued: u64,
    pub highest_queued: u64,
    pub total_enqueued: u64,
    pub total_dequeued: u64,
    pub active_threads: u32,
    pub max_threads: u32,
}

/// A worker pool queue, tagged by the subsystem or connector binding it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueWorkerPool {
    pub name: String,
    #[serde(default)]
    pub stats: WorkerPoolStats,
}

impl QueueWorkerPool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: WorkerPoolStats::default(),
        }
    }

    pub fn with_stats(mut self, stats: WorkerPoolStats) -> Self {
        self.stats = stats;
        self
    }
}

impl AdminObject for QueueWorkerPool {
    const KIND: ObjectKind = ObjectKind::QueueWorkerPool;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }
}

/// An engine cache (code table, result set, prepared plan, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    pub name: String,
    pub cache_type: String,
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

impl Cache {
    pub fn new(name: impl Into<String>, cache_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache_type: cache_type.into(),
            entries: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Fraction of lookups served from the cache, `None` before any lookup.
    pub fn hit_ratio(&self) -> Option<f64> {
        let lookups = self.hits + self.misses;
        (lookups > 0).then(|| self.hits as f64 / lookups as f64)
    }
}

impl AdminObject for Cache {
    const KIND: ObjectKind = ObjectKind::Cache;

    fn key(&self) -> ObjectKey {
        ObjectKey::single(&self.name)
    }
}

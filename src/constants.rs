//! # System Constants
//!
//! Identifier syntax characters and the deployment modes that bound which
//! administrative classes an engine exposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved delimiter separating hierarchical identifier segments.
pub const DELIMITER: char = '|';

/// [`DELIMITER`] as a string slice, for joining keys.
pub const DELIMITER_STR: &str = "|";

/// Wildcard character; valid alone or as the last character of the final segment.
pub const WILDCARD: char = '*';

/// Identifier that matches every object of a kind.
pub const MATCH_ALL: &str = "*";

/// Largest segment count of any known object kind (source requests).
pub const MAX_SEGMENTS: usize = 3;

/// Default budget for a single registry fetch.
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 5_000;

/// Engine deployment mode.
///
/// The full server exposes every administrable class; an embedded engine
/// only exposes connector bindings, connector types and the system object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    #[default]
    Full,
    Embedded,
}

impl DeploymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Full => "full",
            DeploymentMode::Embedded => "embedded",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

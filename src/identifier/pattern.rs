//! # Identifier Patterns
//!
//! Parses an operator-supplied identifier string into a [`Pattern`] once, at
//! ingestion. Everything downstream matches against the parsed value and
//! never looks at the raw string again.
//!
//! ## Syntax
//!
//! | Identifier | Pattern |
//! |------------|---------|
//! | `*` | [`Pattern::MatchAll`] |
//! | `name*` | [`Pattern::Prefix`] on the first segment |
//! | `name` | [`Pattern::Exact`] |
//! | `name\|1` | [`Pattern::Exact`] on two segments |
//! | `5\|*` | [`Pattern::Prefix`] scoped to session `5`, empty prefix |
//!
//! Classification is kind-agnostic: it only checks syntax. Whether a pattern
//! has the right number of segments for a given object kind is decided by
//! the resolver.

use crate::constants::{DELIMITER, DELIMITER_STR, MATCH_ALL, MAX_SEGMENTS, WILDCARD};
use crate::error::{AdminError, AdminResult};
use crate::models::ObjectKey;
use std::fmt;
use std::str::FromStr;

/// A classified identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches every candidate
    MatchAll,
    /// Leading segments exact, last segment a prefix (possibly empty)
    Prefix { scope: Vec<String>, prefix: String },
    /// Every given segment exact
    Exact(Vec<String>),
}

impl Pattern {
    /// Number of key segments this pattern constrains, `None` for [`Pattern::MatchAll`].
    pub fn segment_count(&self) -> Option<usize> {
        match self {
            Pattern::MatchAll => None,
            Pattern::Prefix { scope, .. } => Some(scope.len() + 1),
            Pattern::Exact(segments) => Some(segments.len()),
        }
    }

    /// Test a candidate key.
    ///
    /// A pattern of `n` segments is compared against the first `n` segments
    /// of the key; a key shorter than the pattern never matches. Comparison
    /// is case-sensitive.
    pub fn matches(&self, key: &ObjectKey) -> bool {
        let candidate = key.segments();
        match self {
            Pattern::MatchAll => true,
            Pattern::Exact(segments) => {
                segments.len() <= candidate.len()
                    && segments.iter().zip(candidate).all(|(want, have)| want == have)
            }
            Pattern::Prefix { scope, prefix } => {
                if scope.len() >= candidate.len() {
                    return false;
                }
                scope.iter().zip(candidate).all(|(want, have)| want == have)
                    && candidate[scope.len()].starts_with(prefix.as_str())
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::MatchAll => f.write_str(MATCH_ALL),
            Pattern::Prefix { scope, prefix } => {
                for segment in scope {
                    write!(f, "{segment}{DELIMITER}")?;
                }
                write!(f, "{prefix}{WILDCARD}")
            }
            Pattern::Exact(segments) => f.write_str(&segments.join(DELIMITER_STR)),
        }
    }
}

impl FromStr for Pattern {
    type Err = AdminError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        classify(raw)
    }
}

/// Classify a raw identifier.
///
/// Fails with `MalformedIdentifier` when a segment is empty, when there are
/// more segments than any kind supports, or when a wildcard appears anywhere
/// but as the final character.
pub fn classify(raw: &str) -> AdminResult<Pattern> {
    if raw == MATCH_ALL {
        return Ok(Pattern::MatchAll);
    }

    let wildcard_positions: Vec<usize> = raw.match_indices(WILDCARD).map(|(i, _)| i).collect();
    let trailing_wildcard = raw.ends_with(WILDCARD);
    let misplaced = match wildcard_positions.as_slice() {
        [] => false,
        [only] => *only != raw.len() - WILDCARD.len_utf8(),
        _ => true,
    };
    if misplaced {
        return Err(AdminError::malformed(
            raw,
            format!("wildcard '{WILDCARD}' is only allowed as the final character"),
        ));
    }

    let segments: Vec<&str> = raw.split(DELIMITER).collect();
    if segments.len() > MAX_SEGMENTS {
        return Err(AdminError::malformed(
            raw,
            format!(
                "{} segments given, no object kind has more than {MAX_SEGMENTS}",
                segments.len()
            ),
        ));
    }
    if let Some(position) = segments.iter().position(|segment| segment.is_empty()) {
        return Err(AdminError::malformed(
            raw,
            format!("segment {} is empty", position + 1),
        ));
    }

    let mut owned: Vec<String> = segments.into_iter().map(str::to_string).collect();
    if trailing_wildcard {
        let mut prefix = owned.pop().unwrap_or_default();
        prefix.pop();
        Ok(Pattern::Prefix {
            scope: owned,
            prefix,
        })
    } else {
        Ok(Pattern::Exact(owned))
    }
}

//! # Identifier Handling
//!
//! Parsing of the uniform identifier-pattern syntax shared by every
//! monitoring entry point.

pub mod pattern;

pub use pattern::{classify, Pattern};

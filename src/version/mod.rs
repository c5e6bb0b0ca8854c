//! Version ordering and latest-version resolution
//!
//! This module implements the ordering policy used everywhere a version list
//! is ranked: the literal `latest` tag dominates, semver precedence applies
//! when both names coerce to semantic versions, and lexical comparison is the
//! fallback for free-form names.
//!
//! # Modules
//!
//! - [`semver`]: permissive coercion of free-form names into semantic versions
//! - [`compare`]: the total order over version descriptors
//! - [`resolve`]: hidden-version filtering and current-version selection
//! - [`error`]: error types for resolution

pub mod compare;
pub mod error;
pub mod resolve;
pub mod semver;

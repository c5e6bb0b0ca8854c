//! Core library for a documentation portal: version ordering, latest-version
//! resolution, project search, and per-user favorite flags.
//!
//! The resolution and search layers are pure computations over project data
//! the caller already holds; [`api::client::ApiClient`] is the collaborator
//! that fetches that data (and performs uploads/deletes) over HTTP, and
//! [`favorites`] persists the favorite flags in a local key-value store.

pub mod api;
pub mod config;
pub mod favorites;
pub mod project;
pub mod search;
pub mod version;

//! Project and version descriptors shared across the crate

pub mod types;

pub use types::{Project, ProjectVersion};

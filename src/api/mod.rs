//! HTTP collaborator layer for the portal backend
//!
//! Read endpoints degrade to empty collections on failure (the portal can
//! render "no versions"); mutating endpoints always surface an [`ApiError`]
//! so the caller can inform the user. No retries are performed here.

pub mod client;
pub mod error;
pub mod urls;

pub use client::ApiClient;
pub use error::ApiError;

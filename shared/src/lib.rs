//! Shared types for the Gilt admin toolkit
//!
//! Data models exchanged with the storefront API, plus the auth DTOs
//! used by the client crate. All wire types are camelCase JSON with
//! Mongo-style `_id` identifiers.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

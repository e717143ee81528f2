//! Data models
//!
//! Shared between the editor core and the API client (via JSON).
//! All IDs are Mongo-style `_id` strings; money fields are `Decimal`
//! serialized as plain JSON numbers.

pub mod catalog_item;
pub mod category;
pub mod order;
pub mod stats;
pub mod user;

// Re-exports
pub use catalog_item::*;
pub use category::*;
pub use order::*;
pub use stats::*;
pub use user::*;

//! Gilt Editor - catalog item editor logic
//!
//! Pure transforms between raw operator input (text fields, file picks,
//! pasted URLs) and the payload the storefront catalog API accepts, plus
//! the inverse transform that loads a persisted item back into editable
//! form fields. The embedding shell owns the single mutable draft and
//! replaces it wholesale on each change; nothing in this crate performs
//! network I/O.

pub mod draft;
pub mod error;
pub mod images;
pub mod payload;
pub mod pricing;

pub use draft::CatalogItemDraft;
pub use error::{ImageError, ValidationError};
pub use images::ImageEntry;
pub use payload::build_payload;

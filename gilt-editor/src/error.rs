//! Editor error types

use std::path::PathBuf;
use thiserror::Error;

/// Submission validation error
///
/// Price is the only hard gate: everything else is trimmed/coerced
/// without rejecting the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Price absent, non-numeric, or not strictly positive
    #[error("price must be a positive number")]
    InvalidPrice,
}

/// Image file encoding error
///
/// Raised by the add-files batch. The batch is all-or-nothing: any
/// failure leaves the draft's image list untouched and the operator
/// may retry the file pick.
#[derive(Debug, Error)]
pub enum ImageError {
    /// File could not be read from disk
    #[error("failed to read image file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File does not look like an image (by MIME type)
    #[error("{path} is not an image file")]
    NotAnImage { path: PathBuf },
}

//! Image List Reconciler
//!
//! Maintains the ordered, deduplicated image list of a draft as the
//! operator adds, removes, or bulk-uploads images, and repairs
//! historically corrupted entries on hydration.
//!
//! Every function is a pure transform over the current list: the caller
//! replaces its list wholesale with the returned one.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures::future;
use tracing::warn;

use crate::error::ImageError;

/// Prefix of a self-contained image data URL
const DATA_IMAGE_PREFIX: &str = "data:image";
/// Marker separating the data-URL header from the base64 payload
const BASE64_MARKER: &str = "base64,";

/// A single image in the draft, classified once at ingestion
///
/// Downstream consumers match on the variant instead of prefix-sniffing
/// the string. Dedup and payload serialization use the exact underlying
/// string in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEntry {
    /// Remote URL reference
    Url(String),
    /// Image fully embedded as a `data:image/...;base64,...` string
    Encoded(String),
}

impl ImageEntry {
    /// Classify a raw string; `None` for empty/whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with(DATA_IMAGE_PREFIX) {
            Some(ImageEntry::Encoded(trimmed.to_string()))
        } else {
            Some(ImageEntry::Url(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageEntry::Url(s) | ImageEntry::Encoded(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ImageEntry::Url(s) | ImageEntry::Encoded(s) => s,
        }
    }
}

impl std::fmt::Display for ImageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append a pasted URL, set-semantics on the exact string.
///
/// Trims the input; empty input and exact duplicates are no-ops.
/// Existing entries keep their relative order, the new entry goes last.
pub fn add_url(current: &[ImageEntry], url: &str) -> Vec<ImageEntry> {
    let mut next = current.to_vec();
    if let Some(entry) = ImageEntry::parse(url)
        && !next.iter().any(|e| e.as_str() == entry.as_str())
    {
        next.push(entry);
    }
    next
}

/// Remove the entry at `index`; out-of-range is a silent no-op.
pub fn remove_at(current: &[ImageEntry], index: usize) -> Vec<ImageEntry> {
    let mut next = current.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Drop the whole list.
pub fn clear() -> Vec<ImageEntry> {
    Vec::new()
}

/// Repair pass applied when hydrating a draft from a persisted item.
///
/// Some historical write path joined the image array with commas and
/// split it again, which fragments any data URL at the comma after its
/// header. An entry that starts with the data-URL prefix but lacks the
/// `base64,` marker is spliced back together with the following element,
/// consuming both positions. Empty/whitespace-only entries are dropped.
///
/// This cannot recover a split inside the base64 payload itself; each
/// entry is repaired at most once.
pub fn normalize(raw: &[String]) -> Vec<ImageEntry> {
    let mut normalized = Vec::new();
    let mut i = 0;
    while i < raw.len() {
        let current = raw[i].trim();
        if current.is_empty() {
            i += 1;
            continue;
        }

        if current.starts_with(DATA_IMAGE_PREFIX)
            && !current.contains(BASE64_MARKER)
            && let Some(next) = raw.get(i + 1)
        {
            warn!(index = i, "repairing image entry split by legacy comma join");
            normalized.push(ImageEntry::Encoded(format!("{},{}", current, next.trim())));
            i += 2;
            continue;
        }

        if let Some(entry) = ImageEntry::parse(current) {
            normalized.push(entry);
        }
        i += 1;
    }
    normalized
}

/// Encode a batch of picked files and merge them into the current list.
///
/// Each file is read and converted to a self-contained base64 data URL
/// independently and concurrently. The batch is all-or-nothing: if any
/// file cannot be read (or is not an image), the whole operation fails
/// and `current` is returned untouched to the caller by virtue of never
/// being replaced. Successes merge with the same dedup rule as
/// [`add_url`], appended in the order the files were given.
pub async fn add_files(
    current: &[ImageEntry],
    files: &[PathBuf],
) -> Result<Vec<ImageEntry>, ImageError> {
    let encoded = future::try_join_all(files.iter().map(|p| encode_file(p))).await?;

    let mut next = current.to_vec();
    for entry in encoded {
        if !next.iter().any(|e| e.as_str() == entry.as_str()) {
            next.push(entry);
        }
    }
    Ok(next)
}

/// Read one file and embed it as a data URL.
async fn encode_file(path: &Path) -> Result<ImageEntry, ImageError> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| ImageError::NotAnImage {
            path: path.to_path_buf(),
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let payload = BASE64.encode(&bytes);
    Ok(ImageEntry::Encoded(format!(
        "data:{};{}{}",
        mime.essence_str(),
        BASE64_MARKER,
        payload
    )))
}

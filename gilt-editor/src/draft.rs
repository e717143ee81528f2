//! Catalog item draft state
//!
//! The in-progress, unsaved edit state of a catalog item. Numeric and
//! list fields hold the raw text exactly as the operator typed it;
//! coercion happens once, in the payload builder. The embedding shell
//! owns one draft and replaces/mutates it through these methods.

use std::path::PathBuf;

use shared::models::CatalogItem;

use crate::error::ImageError;
use crate::images::{self, ImageEntry};
use crate::pricing;

/// Mutable form state for creating or editing a catalog item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogItemDraft {
    pub name: String,
    pub category: String,
    /// Occasion/type label
    pub kind: String,
    pub description: String,
    /// Raw list-price input, required to submit
    pub price: String,
    /// Raw discounted-price input; when valid it is the source of truth
    /// for the discount percent
    pub discounted_price: String,
    /// Raw manually entered discount percent
    pub discount: String,
    pub stock: String,
    /// Raw comma-separated tags input
    pub tags: String,
    pub images: Vec<ImageEntry>,
    pub is_active: bool,
}

impl CatalogItemDraft {
    /// Empty draft for a new item, visible on the storefront by default.
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Hydrate a draft from a persisted item for editing.
    ///
    /// Legacy image corruption is repaired here ([`images::normalize`]),
    /// and the discounted-price field is reconstructed from the persisted
    /// percent, staying blank when no discount is configured.
    pub fn from_item(item: &CatalogItem) -> Self {
        let discounted_price = pricing::discounted_price_for_display(item.price, item.discount)
            .map(|d| d.to_string())
            .unwrap_or_default();

        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            kind: item.kind.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            discounted_price,
            discount: item.discount.to_string(),
            stock: item.stock.to_string(),
            tags: item.tags.join(", "),
            images: images::normalize(&item.images),
            is_active: item.is_active,
        }
    }

    /// Reset to an empty draft after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ========== Image list edits ==========

    /// Add a pasted image URL (trimmed, deduplicated).
    pub fn add_image_url(&mut self, url: &str) {
        self.images = images::add_url(&self.images, url);
    }

    /// Encode picked files and merge them into the image list.
    /// All-or-nothing: on failure the list is left untouched.
    pub async fn add_image_files(&mut self, files: &[PathBuf]) -> Result<(), ImageError> {
        self.images = images::add_files(&self.images, files).await?;
        Ok(())
    }

    /// Remove the image at `index`; out-of-range is a no-op.
    pub fn remove_image_at(&mut self, index: usize) {
        self.images = images::remove_at(&self.images, index);
    }

    /// Drop all images.
    pub fn clear_images(&mut self) {
        self.images = images::clear();
    }
}

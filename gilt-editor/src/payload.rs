//! Submission Payload Builder
//!
//! Validates and shapes a draft into the exact payload sent to the
//! catalog API. Pure function; the caller performs the network call.

use rust_decimal::Decimal;
use shared::models::CatalogItemPayload;

use crate::draft::CatalogItemDraft;
use crate::error::ValidationError;
use crate::pricing;

/// Build the create/update payload from a draft.
///
/// The price is the only hard validation gate: absent, non-numeric, or
/// non-positive input fails with [`ValidationError::InvalidPrice`] before
/// any network call. Every other field is trimmed or coerced without
/// blocking the submission.
pub fn build_payload(draft: &CatalogItemDraft) -> Result<CatalogItemPayload, ValidationError> {
    let price = parse_decimal(&draft.price)
        .filter(|p| *p > Decimal::ZERO)
        .ok_or(ValidationError::InvalidPrice)?;

    let discounted_price = parse_decimal(&draft.discounted_price);
    let manual_discount = draft.discount.trim().parse::<u8>().unwrap_or(0);
    let discount = pricing::compute_discount(price, discounted_price, manual_discount);

    Ok(CatalogItemPayload {
        name: draft.name.trim().to_string(),
        category: draft.category.trim().to_string(),
        kind: draft.kind.trim().to_string(),
        price,
        discount,
        description: draft.description.trim().to_string(),
        // Stock is not safety-critical; unparseable input becomes 0
        // rather than blocking the submission.
        stock: draft.stock.trim().parse().unwrap_or(0),
        // Entries are trimmed and non-empty by construction (see images).
        images: draft.images.iter().map(|e| e.as_str().to_string()).collect(),
        tags: split_tags(&draft.tags),
        is_active: draft.is_active,
    })
}

/// Split the comma-separated tags field: trimmed, empties dropped,
/// order preserved, duplicates kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images;

    fn draft_with_price(price: &str) -> CatalogItemDraft {
        CatalogItemDraft {
            price: price.to_string(),
            ..CatalogItemDraft::new()
        }
    }

    #[test]
    fn rejects_zero_price() {
        let draft = draft_with_price("0");
        assert_eq!(build_payload(&draft), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn rejects_missing_or_garbage_price() {
        assert_eq!(
            build_payload(&draft_with_price("")),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            build_payload(&draft_with_price("twelve")),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            build_payload(&draft_with_price("-5")),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn minimal_draft_builds_with_empty_collections() {
        let payload = build_payload(&draft_with_price("500")).unwrap();
        assert_eq!(payload.price, Decimal::from(500));
        assert_eq!(payload.discount, 0);
        assert_eq!(payload.stock, 0);
        assert!(payload.tags.is_empty());
        assert!(payload.images.is_empty());
    }

    #[test]
    fn trims_text_fields() {
        let mut draft = draft_with_price(" 500 ");
        draft.name = "  Pearl Drop  ".into();
        draft.category = " Earrings".into();
        draft.kind = "Party ".into();
        draft.description = "  shiny  ".into();

        let payload = build_payload(&draft).unwrap();
        assert_eq!(payload.name, "Pearl Drop");
        assert_eq!(payload.category, "Earrings");
        assert_eq!(payload.kind, "Party");
        assert_eq!(payload.description, "shiny");
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        assert_eq!(split_tags("a, b ,, a,"), ["a", "b", "a"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
    }

    #[test]
    fn discounted_price_overrides_manual_discount() {
        let mut draft = draft_with_price("1000");
        draft.discounted_price = "800".into();
        draft.discount = "55".into();

        let payload = build_payload(&draft).unwrap();
        assert_eq!(payload.discount, 20);
    }

    #[test]
    fn manual_discount_used_when_pair_is_invalid() {
        let mut draft = draft_with_price("1000");
        draft.discounted_price = "1200".into();
        draft.discount = "15".into();

        let payload = build_payload(&draft).unwrap();
        assert_eq!(payload.discount, 15);
    }

    #[test]
    fn garbage_numeric_fields_coerce_without_blocking() {
        let mut draft = draft_with_price("1000");
        draft.discounted_price = "n/a".into();
        draft.discount = "lots".into();
        draft.stock = "many".into();

        let payload = build_payload(&draft).unwrap();
        assert_eq!(payload.discount, 0);
        assert_eq!(payload.stock, 0);
    }

    #[test]
    fn images_serialize_as_exact_strings() {
        let mut draft = draft_with_price("500");
        draft.images = images::add_url(&draft.images, "https://x/a.png");
        draft.images = images::add_url(&draft.images, "data:image/png;base64,abc");

        let payload = build_payload(&draft).unwrap();
        assert_eq!(payload.images, ["https://x/a.png", "data:image/png;base64,abc"]);
    }
}

//! Pricing Calculator
//!
//! Derives the persisted discount percent from either a manually entered
//! value or a list-price/discounted-price pair. Uses rust_decimal for
//! precise calculations; percentages round half-up to a whole percent.

use rust_decimal::prelude::*;

/// Round to a whole number, half-up
#[inline]
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Derive the discount percent to persist.
///
/// A discounted price that is present, positive, and strictly below the
/// list price is the source of truth: `round((price - dp) / price * 100)`.
/// Anything else (absent, zero, negative, or >= price) is ignored and the
/// manually entered percent is returned instead.
pub fn compute_discount(
    price: Decimal,
    discounted_price: Option<Decimal>,
    manual_discount: u8,
) -> u8 {
    let Some(dp) = discounted_price else {
        return manual_discount;
    };
    if dp <= Decimal::ZERO || dp >= price {
        return manual_discount;
    }

    let percent = round_whole((price - dp) / price * Decimal::ONE_HUNDRED);
    percent.to_u8().unwrap_or_default()
}

/// Reconstruct the "discounted price" form field from a persisted percent.
///
/// `round(price * (1 - discount/100))`, returned only when strictly less
/// than `price`; `None` signals that no discount is configured and the
/// field should stay blank.
pub fn discounted_price_for_display(price: Decimal, discount: u8) -> Option<Decimal> {
    let multiplier = Decimal::ONE - Decimal::from(discount) / Decimal::ONE_HUNDRED;
    let value = round_whole(price * multiplier);
    (value < price).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn derives_percent_from_price_pair() {
        assert_eq!(compute_discount(d("1000"), Some(d("800")), 0), 20);
        assert_eq!(compute_discount(d("1499"), Some(d("999")), 0), 33);
    }

    #[test]
    fn derived_percent_overrides_manual_entry() {
        assert_eq!(compute_discount(d("1000"), Some(d("800")), 55), 20);
    }

    #[test]
    fn discounted_price_at_or_above_list_price_is_ignored() {
        assert_eq!(compute_discount(d("1000"), Some(d("1000")), 15), 15);
        assert_eq!(compute_discount(d("1000"), Some(d("1200")), 15), 15);
    }

    #[test]
    fn non_positive_discounted_price_is_ignored() {
        assert_eq!(compute_discount(d("1000"), Some(d("0")), 7), 7);
        assert_eq!(compute_discount(d("1000"), Some(d("-50")), 7), 7);
    }

    #[test]
    fn absent_discounted_price_falls_back_to_manual() {
        assert_eq!(compute_discount(d("1000"), None, 0), 0);
        assert_eq!(compute_discount(d("1000"), None, 42), 42);
    }

    #[test]
    fn rounds_half_up() {
        // 5 / 1000 = 0.5% -> 1%
        assert_eq!(compute_discount(d("1000"), Some(d("995")), 0), 1);
        // 1 / 3 = 33.33% -> 33%
        assert_eq!(compute_discount(d("3"), Some(d("2")), 0), 33);
    }

    #[test]
    fn near_total_discount_rounds_to_one_hundred() {
        // 999 / 1000 = 99.9% -> 100; plain half-up rounding, no clamping.
        assert_eq!(compute_discount(d("1000"), Some(d("1")), 0), 100);
    }

    #[test]
    fn display_price_from_percent() {
        assert_eq!(discounted_price_for_display(d("1000"), 20), Some(d("800")));
        // 999 * 0.67 = 669.33 -> 669
        assert_eq!(discounted_price_for_display(d("999"), 33), Some(d("669")));
    }

    #[test]
    fn display_price_absent_when_no_discount_configured() {
        assert_eq!(discounted_price_for_display(d("1000"), 0), None);
    }

    #[test]
    fn display_price_round_trips_through_compute() {
        let dp = discounted_price_for_display(d("1000"), 20).unwrap();
        assert_eq!(compute_discount(d("1000"), Some(dp), 0), 20);
    }
}

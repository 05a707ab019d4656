//! Money arithmetic shared by order and chat-order line items.
//!
//! Every screen that edits a line item recomputes totals with these
//! functions; the math lives here exactly once.

use rust_decimal::{Decimal, RoundingStrategy};

/// Compute the total for one line item.
///
/// `price * quantity * (1 - discount_pct / 100)`, rounded half-up to two
/// decimal places. The result always carries exactly two decimal places, so
/// amounts serialize as `180.00` rather than `180.0`.
#[must_use]
pub fn line_total(price: Decimal, quantity: u32, discount_pct: Decimal) -> Decimal {
    let multiplier = Decimal::ONE - (discount_pct / Decimal::ONE_HUNDRED);
    to_amount(price * Decimal::from(quantity) * multiplier)
}

/// Sum already-rounded line totals into an order total.
#[must_use]
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    to_amount(lines.into_iter().sum::<Decimal>())
}

/// Round half-up to two decimal places and pin the scale there.
fn to_amount(value: Decimal) -> Decimal {
    let mut amount = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    amount
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_line_total_with_discount() {
        // price=100, quantity=2, discount=10% -> 180.00
        let total = line_total(dec("100"), 2, dec("10"));
        assert_eq!(total, dec("180.00"));
    }

    #[test]
    fn test_line_total_no_discount() {
        assert_eq!(line_total(dec("49.99"), 3, Decimal::ZERO), dec("149.97"));
    }

    #[test]
    fn test_line_total_full_discount() {
        assert_eq!(line_total(dec("100"), 5, dec("100")), dec("0.00"));
    }

    #[test]
    fn test_line_total_rounds_half_up() {
        // 0.335 rounds away from zero, not to even
        assert_eq!(line_total(dec("0.335"), 1, Decimal::ZERO), dec("0.34"));
    }

    #[test]
    fn test_order_total_sums_lines() {
        let total = order_total([dec("180.00"), dec("49.99"), dec("0.01")]);
        assert_eq!(total, dec("230.00"));
    }

    #[test]
    fn test_order_total_empty() {
        assert_eq!(order_total([]), Decimal::ZERO);
    }

    #[test]
    fn test_totals_carry_two_decimal_places() {
        // 100 * 2 * 0.9 = 180 exactly; the wire string must still be 180.00
        let total = line_total(dec("100"), 2, dec("10"));
        assert_eq!(total.to_string(), "180.00");
        assert_eq!(order_total([total]).to_string(), "180.00");
    }
}

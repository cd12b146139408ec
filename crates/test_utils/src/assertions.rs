//! Custom Test Assertions
//!
//! Provides assertion helpers for premiums that give more meaningful
//! failure messages than standard assertions.

use core_kernel::Money;
use domain_rating::Premium;
use rust_decimal::Decimal;

/// Asserts that a premium's total equals its base rate plus every adjustment
///
/// The expected total is folded directly over the raw decimal amounts rather
/// than through `Money` arithmetic.
///
/// # Panics
///
/// Panics if the total differs from the recomputed sum
pub fn assert_premium_consistent(premium: &Premium) {
    let adjustments = premium
        .adjustments()
        .iter()
        .fold(Decimal::ZERO, |acc, adjustment| acc + adjustment.amount.amount());
    let expected = premium.base_rate().amount() + adjustments;

    assert_eq!(
        premium.total().amount(),
        expected,
        "Total ({}) doesn't equal base rate ({}) plus adjustments ({})",
        premium.total(),
        premium.base_rate(),
        adjustments
    );
}

/// Asserts that the premium's adjustment labels appear in exactly this order
pub fn assert_adjustment_labels(premium: &Premium, expected: &[&str]) {
    let labels: Vec<&str> = premium.adjustments().iter().map(|a| a.label.as_str()).collect();
    assert_eq!(
        labels, expected,
        "Adjustment labels {:?} don't match expected {:?}",
        labels, expected
    );
}

/// Asserts that a Money value equals the given amount exactly
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Expected {}, got {}",
        expected,
        actual
    );
}

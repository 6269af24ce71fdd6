//! # Monetary Types — Exact Decimal Money and Rates
//!
//! Defines [`Money`], the single representation for monetary amounts in the
//! Paie Stack, and [`Rate`], a decimal fraction (`0.069` = 6.9%).
//!
//! ## Rounding Invariant
//!
//! Contribution lines are rounded to 2 decimal places, half-up (midpoint
//! away from zero), exactly once per line via [`Money::round2`]. Totals sum
//! already-rounded lines and are never re-rounded. This matches how the
//! figures appear on the printed bulletin: the displayed lines must sum to
//! the displayed totals, to the cent.
//!
//! ## Sign Convention
//!
//! Amounts on pay elements and contribution lines are non-negative;
//! direction (earning vs deduction) is carried by the element kind, never by
//! the sign of an amount. `Money` itself permits negative values because
//! intermediate subtractions (net computations) legitimately pass through
//! them; non-negativity is enforced at the domain boundaries that require it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::CoreError;

/// A monetary amount in decimal currency units (euros).
///
/// Thin newtype over `rust_decimal::Decimal`. Serializes transparently as a
/// decimal number, preserving the interchange contract that amounts are
/// plain decimal currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Zero euros.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a decimal as a monetary amount.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Construct from whole euros and cents. `Money::from_cents(123456)` is
    /// `1234.56`. Convenient for fixtures and configuration defaults.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Validate that the amount is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeAmount`] if the value is below zero.
    pub fn require_non_negative(self) -> Result<Self, CoreError> {
        if self.0 < Decimal::ZERO {
            return Err(CoreError::NegativeAmount { value: self.0 });
        }
        Ok(self)
    }

    /// Round to 2 decimal places, half-up (midpoint away from zero).
    ///
    /// Applied exactly once per computed contribution line; totals are sums
    /// of already-rounded lines and must not be re-rounded.
    pub fn round2(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Access the inner decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<Rate> for Money {
    type Output = Money;
    fn mul(self, rate: Rate) -> Money {
        Money(self.0 * rate.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A contribution or accrual rate as a decimal fraction.
///
/// `Rate(0.069)` means 6.9%. Rates are pure configuration data; their legal
/// correctness is a concern of the configuration owner, not this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rate(pub Decimal);

impl Rate {
    /// Zero rate. A zero-rate contribution line still appears on the
    /// bulletin; absence of a line is always explicit.
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Wrap a decimal fraction as a rate.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Whether the rate is negative. Negative rates are rejected by the
    /// contribution ledger; the check lives there so the error can carry
    /// the rule label.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Access the inner decimal fraction.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    // ── Rounding tests ───────────────────────────────────────────────

    #[test]
    fn test_round2_half_up() {
        assert_eq!(Money(dec!(399.83982)).round2(), Money(dec!(399.84)));
        assert_eq!(Money(dec!(753.3214)).round2(), Money(dec!(753.32)));
        assert_eq!(Money(dec!(1.005)).round2(), Money(dec!(1.01)));
        assert_eq!(Money(dec!(1.004)).round2(), Money(dec!(1.00)));
        assert_eq!(Money(dec!(-1.005)).round2(), Money(dec!(-1.01)));
    }

    #[test]
    fn test_round2_is_idempotent() {
        let m = Money(dec!(234.68859)).round2();
        assert_eq!(m.round2(), m);
    }

    #[test]
    fn test_base_times_rate() {
        let line = (Money(dec!(5794.78)) * Rate(dec!(0.069))).round2();
        assert_eq!(line, Money(dec!(399.84)));
    }

    // ── Arithmetic tests ─────────────────────────────────────────────

    #[test]
    fn test_sum_of_rounded_lines() {
        let lines = [Money(dec!(399.84)), Money(dec!(557.95)), Money(dec!(246.53))];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total, Money(dec!(1204.32)));
    }

    #[test]
    fn test_require_non_negative() {
        assert!(Money(dec!(0.00)).require_non_negative().is_ok());
        assert!(Money(dec!(-0.01)).require_non_negative().is_err());
    }

    // ── Serialization tests ──────────────────────────────────────────

    #[test]
    fn test_money_serializes_transparently() {
        let json = serde_json::to_string(&Money(dec!(4929.28))).unwrap();
        assert_eq!(json, "\"4929.28\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money(dec!(4929.28)));
    }

    // ── Property tests ───────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_round2_within_half_cent(cents in -1_000_000_000i64..1_000_000_000i64, extra in 0u32..9999u32) {
            // value with up to 6 decimal places
            let raw = Decimal::new(cents, 2) + Decimal::new(i64::from(extra), 6);
            let rounded = Money(raw).round2();
            let diff = (rounded.0 - raw).abs();
            prop_assert!(diff <= dec!(0.005));
        }

        #[test]
        fn prop_sum_is_associative_over_order(a in -10_000_00i64..10_000_00i64,
                                              b in -10_000_00i64..10_000_00i64,
                                              c in -10_000_00i64..10_000_00i64) {
            let (x, y, z) = (Money::from_cents(a), Money::from_cents(b), Money::from_cents(c));
            prop_assert_eq!((x + y) + z, x + (y + z));
        }
    }
}

//! # Pay Elements — Gross-Pay Composition Lines
//!
//! A [`PayElement`] is one line of the remuneration table: base salary,
//! overtime, a bonus, or a deduction such as an unpaid absence.
//!
//! ## Sign Invariant
//!
//! `amount` is always non-negative. Direction is carried by
//! [`ElementKind`], never by the sign of the amount. An element
//! deserialized with a negative amount is rejected at computation time.

use paie_core::{CoreError, Money, Rate};
use serde::{Deserialize, Serialize};

/// Direction of a pay element: does it add to gross pay or deduct from it?
///
/// Serializes as the interchange boolean `isAddition` (`true` = addition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Contributes to gross salary (salary, overtime, bonus).
    Addition,
    /// Reduces pay (unpaid absence, advance recovery).
    Deduction,
}

impl ElementKind {
    /// Whether this element adds to gross pay.
    pub fn is_addition(&self) -> bool {
        matches!(self, Self::Addition)
    }
}

impl Serialize for ElementKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_addition())
    }
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let is_addition = bool::deserialize(deserializer)?;
        Ok(if is_addition {
            Self::Addition
        } else {
            Self::Deduction
        })
    }
}

/// One line of gross-pay composition or one deduction.
///
/// `base` and `rate` are optional display inputs (e.g. hours × hourly rate
/// for overtime); `amount` is the authoritative figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayElement {
    /// Display label, as printed on the bulletin.
    pub label: String,
    /// Optional computation base (hours, days, reference salary).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Money>,
    /// Optional rate applied to the base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    /// Non-negative amount in decimal currency units.
    pub amount: Money,
    /// Direction of the line. Wire name: `isAddition`.
    #[serde(rename = "isAddition")]
    pub kind: ElementKind,
}

impl PayElement {
    /// Create an addition-type element (salary, bonus, overtime).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeAmount`] if `amount` is negative.
    pub fn addition(label: impl Into<String>, amount: Money) -> Result<Self, CoreError> {
        Ok(Self {
            label: label.into(),
            base: None,
            rate: None,
            amount: amount.require_non_negative()?,
            kind: ElementKind::Addition,
        })
    }

    /// Create a deduction-type element (absence, advance recovery).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeAmount`] if `amount` is negative.
    pub fn deduction(label: impl Into<String>, amount: Money) -> Result<Self, CoreError> {
        Ok(Self {
            label: label.into(),
            base: None,
            rate: None,
            amount: amount.require_non_negative()?,
            kind: ElementKind::Deduction,
        })
    }

    /// Attach the display base and rate (e.g. hours × hourly rate).
    pub fn with_base_rate(mut self, base: Money, rate: Rate) -> Self {
        self.base = Some(base);
        self.rate = Some(rate);
        self
    }
}

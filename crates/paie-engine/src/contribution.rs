//! # Contribution Ledger — Per-Line Social Contributions
//!
//! Computes employee and employer contribution amounts for a list of
//! [`ContributionRule`]s applied to their bases, plus the aggregate totals.
//!
//! ## Ordering Invariant
//!
//! The output preserves the input order of the rules. Contribution lines
//! appear on the bulletin in a regulator-expected order (the "bulletin
//! clarifié" families); reordering them is a correctness bug, not a
//! cosmetic one.
//!
//! ## Rounding Invariant
//!
//! Each line is rounded to 2 decimal places, half-up, once — totals sum the
//! already-rounded lines. The printed lines must sum to the printed totals.
//!
//! ## Zero Rates
//!
//! A rule with a zero employee rate still produces a line. Absence of a
//! line must be explicit (the rule was not supplied), never the side effect
//! of a zero rate being special-cased away.

use paie_core::{Money, Rate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Categories ──────────────────────────────────────────────────────

/// Regulator-defined contribution families, in bulletin display order.
///
/// The enum is exhaustive over the families of the French "bulletin
/// clarifié"; which rules exist within a family, and at what rates, is
/// configuration data, not engine logic. Wire strings are stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ContributionCategory {
    /// Health insurance (maladie, maternité, invalidité, décès).
    #[serde(rename = "SANTE")]
    Sante,
    /// Workplace accidents and occupational illness.
    #[serde(rename = "ACCIDENTS_TRAVAIL")]
    AccidentsTravail,
    /// Retirement (base and complementary).
    #[serde(rename = "RETRAITE")]
    Retraite,
    /// Family branch of social security.
    #[serde(rename = "FAMILLE")]
    Famille,
    /// Unemployment insurance.
    #[serde(rename = "CHOMAGE")]
    Chomage,
    /// CSG/CRDS social levies.
    #[serde(rename = "CSG_CRDS")]
    CsgCrds,
    /// Other statutory or conventional contributions.
    #[serde(rename = "AUTRES")]
    Autres,
}

impl std::fmt::Display for ContributionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sante => "Santé",
            Self::AccidentsTravail => "Accidents du travail",
            Self::Retraite => "Retraite",
            Self::Famille => "Famille",
            Self::Chomage => "Assurance chômage",
            Self::CsgCrds => "CSG / CRDS",
            Self::Autres => "Autres contributions",
        };
        f.write_str(s)
    }
}

// ─── Rules and Amounts ───────────────────────────────────────────────

/// One contribution rule: pure configuration data, immutable for the
/// lifetime of one payslip computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRule {
    /// Contribution family.
    pub category: ContributionCategory,
    /// Display label, as printed on the bulletin.
    pub label: String,
    /// Base the rates apply to, in decimal currency units.
    pub base_amount: Money,
    /// Employee-side rate as a decimal fraction (`0.069` = 6.9%).
    pub employee_rate: Rate,
    /// Employer-side rate as a decimal fraction.
    pub employer_rate: Rate,
}

/// One computed contribution line.
///
/// Carries the rule's display inputs (base, rates) alongside the derived
/// amounts so a payslip remains printable from its own snapshot, without
/// re-reading the rule configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionAmount {
    /// Contribution family.
    pub category: ContributionCategory,
    /// Display label copied from the rule.
    pub label: String,
    /// Base the rates were applied to.
    pub base_amount: Money,
    /// Employee-side rate.
    pub employee_rate: Rate,
    /// Employer-side rate.
    pub employer_rate: Rate,
    /// `round2(base_amount × employee_rate)`.
    pub employee_amount: Money,
    /// `round2(base_amount × employer_rate)`.
    pub employer_amount: Money,
}

/// The full output of a ledger computation: ordered lines plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBreakdown {
    /// Contribution lines, in the input order of the rules.
    pub amounts: Vec<ContributionAmount>,
    /// Sum of the rounded employee amounts.
    pub total_employee: Money,
    /// Sum of the rounded employer amounts.
    pub total_employer: Money,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// A malformed contribution rule.
///
/// This is the only validation the ledger performs. Rate *correctness*
/// (legal compliance) is a configuration concern outside the engine.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A rule with a negative base amount.
    #[error("contribution rule {label:?} has negative base amount {base}")]
    NegativeBase {
        /// Label of the offending rule.
        label: String,
        /// The rejected base.
        base: Decimal,
    },

    /// A rule with a negative employee or employer rate.
    #[error("contribution rule {label:?} has negative {side} rate {rate}")]
    NegativeRate {
        /// Label of the offending rule.
        label: String,
        /// Which side the rate belongs to (`employee` or `employer`).
        side: &'static str,
        /// The rejected rate.
        rate: Decimal,
    },
}

// ─── Computation ─────────────────────────────────────────────────────

/// Compute all contribution lines and their totals.
///
/// Each rule is computed independently: `round2(base × rate)` per side,
/// rounded once per line. Input order is preserved; zero-rate rules still
/// produce lines.
///
/// # Errors
///
/// Returns [`LedgerError`] if any rule has a negative base or rate.
pub fn compute_breakdown(rules: &[ContributionRule]) -> Result<LedgerBreakdown, LedgerError> {
    let mut amounts = Vec::with_capacity(rules.len());
    let mut total_employee = Money::ZERO;
    let mut total_employer = Money::ZERO;

    for rule in rules {
        if rule.base_amount.as_decimal() < Decimal::ZERO {
            return Err(LedgerError::NegativeBase {
                label: rule.label.clone(),
                base: rule.base_amount.as_decimal(),
            });
        }
        if rule.employee_rate.is_negative() {
            return Err(LedgerError::NegativeRate {
                label: rule.label.clone(),
                side: "employee",
                rate: rule.employee_rate.as_decimal(),
            });
        }
        if rule.employer_rate.is_negative() {
            return Err(LedgerError::NegativeRate {
                label: rule.label.clone(),
                side: "employer",
                rate: rule.employer_rate.as_decimal(),
            });
        }

        let employee_amount = (rule.base_amount * rule.employee_rate).round2();
        let employer_amount = (rule.base_amount * rule.employer_rate).round2();
        total_employee += employee_amount;
        total_employer += employer_amount;

        amounts.push(ContributionAmount {
            category: rule.category,
            label: rule.label.clone(),
            base_amount: rule.base_amount,
            employee_rate: rule.employee_rate,
            employer_rate: rule.employer_rate,
            employee_amount,
            employer_amount,
        });
    }

    Ok(LedgerBreakdown {
        amounts,
        total_employee,
        total_employer,
    })
}

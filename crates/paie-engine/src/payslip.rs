//! # Payslip Record — The Central Entity
//!
//! The [`Payslip`] is the interchange record between the engine and its
//! persistence and rendering collaborators. Field names and units (decimal
//! currency units, calendar dates, decimal-fraction rates) are a contract
//! and must not change.
//!
//! ## Snapshot Invariant
//!
//! Employee and employer identity is **copied** into the payslip at
//! generation time, never live-joined. A historical bulletin must remain
//! stable even if the employee record later changes address or name.
//!
//! ## Status
//!
//! A payslip is created in `Draft` and may only be mutated while `Draft`.
//! Once `Validated` it is immutable to the engine — superseded by a new
//! payslip if wrong, never edited in place. The transition logic lives in
//! `paie-lifecycle`; the record and its status enum live here because the
//! computation path creates them.

use chrono::NaiveDate;
use paie_core::{EmployeeId, ModificationEntry, Money, Nir, PayPeriod, PayslipId, Siret};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contribution::ContributionAmount;
use crate::element::PayElement;

// ─── Identity Snapshots ──────────────────────────────────────────────

/// Employee identity as captured at payslip generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSnapshot {
    /// Stable employee identifier (links payslips of one employee).
    pub employee_id: EmployeeId,
    /// Full name at generation time.
    pub full_name: String,
    /// Postal address at generation time.
    pub address: String,
    /// Social-security number.
    pub nir: Nir,
    /// Job title, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// Employer identity as captured at payslip generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerSnapshot {
    /// Legal company name.
    pub name: String,
    /// Registered address.
    pub address: String,
    /// Company registration number.
    pub siret: Siret,
    /// APE/NAF activity code, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ape_code: Option<String>,
}

// ─── Status ──────────────────────────────────────────────────────────

/// Lifecycle status of a bulletin.
///
/// `Draft` is initial; `Validated` is terminal for the engine. There is no
/// transition back: re-opening an issued bulletin is a human process
/// outside this code, not a state the engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletinStatus {
    /// Mutable working state.
    #[serde(rename = "DRAFT")]
    Draft,
    /// Issued and locked (terminal).
    #[serde(rename = "VALIDATED")]
    Validated,
}

impl std::fmt::Display for BulletinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => f.write_str("DRAFT"),
            Self::Validated => f.write_str("VALIDATED"),
        }
    }
}

// ─── Paid Leave ──────────────────────────────────────────────────────

/// Paid-leave movement for one period, in days.
///
/// `balance` is a running balance carried month to month, not a flow
/// quantity: annual aggregation takes the chronologically-last balance,
/// never a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidLeave {
    /// Days acquired this period.
    pub acquired: Decimal,
    /// Days taken this period.
    pub taken: Decimal,
    /// Running balance after this period.
    pub balance: Decimal,
}

// ─── Payslip ─────────────────────────────────────────────────────────

/// A fully reconciled monthly pay statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Unique payslip identifier.
    pub id: PayslipId,
    /// Employee identity snapshot.
    pub employee: EmployeeSnapshot,
    /// Employer identity snapshot.
    pub employer: EmployerSnapshot,
    /// First day covered, inclusive.
    pub period_start: NaiveDate,
    /// Last day covered, inclusive.
    pub period_end: NaiveDate,
    /// Date the net amount is paid.
    pub payment_date: NaiveDate,
    /// Remuneration lines (additions and deductions).
    pub pay_elements: Vec<PayElement>,
    /// Computed contribution lines, in rule order.
    pub contributions: Vec<ContributionAmount>,
    /// Σ amounts of addition-type elements.
    pub gross_salary: Money,
    /// Gross minus employee contributions.
    pub net_before_tax: Money,
    /// Withholding tax passed through from the tax collaborator.
    pub tax_withheld: Money,
    /// Net before tax minus withheld tax.
    pub net_to_pay: Money,
    /// Net on the social-benefit base (equals `net_before_tax` unless a
    /// distinct social rule set was supplied).
    pub net_social: Money,
    /// Gross plus employer contributions.
    pub employer_cost: Money,
    /// Days acquired this period. Wire name: `paidLeaveAcquired`.
    pub paid_leave_acquired: Decimal,
    /// Days taken this period.
    pub paid_leave_taken: Decimal,
    /// Running balance after this period.
    pub paid_leave_balance: Decimal,
    /// Lifecycle status.
    pub status: BulletinStatus,
    /// Append-only field-level audit journal.
    #[serde(default)]
    pub modification_log: Vec<ModificationEntry>,
}

impl Payslip {
    /// The pay period as a typed range.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start: self.period_start,
            end: self.period_end,
        }
    }

    /// Whether the bulletin is still editable.
    pub fn is_draft(&self) -> bool {
        self.status == BulletinStatus::Draft
    }

    /// Paid-leave movement as a typed value.
    pub fn paid_leave(&self) -> PaidLeave {
        PaidLeave {
            acquired: self.paid_leave_acquired,
            taken: self.paid_leave_taken,
            balance: self.paid_leave_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&BulletinStatus::Draft).unwrap(),
            "\"DRAFT\""
        );
        assert_eq!(
            serde_json::to_string(&BulletinStatus::Validated).unwrap(),
            "\"VALIDATED\""
        );
    }
}

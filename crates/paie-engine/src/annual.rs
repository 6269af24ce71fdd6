//! # Annual Aggregation — Monthly Buckets and Year Totals
//!
//! Folds the payslips of one employee for one calendar year into twelve
//! monthly buckets plus annual cumulative totals, category-level
//! contribution rollups, and the carried paid-leave balance.
//!
//! ## Ordering Invariant
//!
//! Input payslips need not be sorted. The aggregator sorts by period start
//! **explicitly** before processing — the carried paid-leave balance is the
//! balance of the chronologically-last payslip, and relying on caller
//! iteration order for that would be a latent correctness bug.
//!
//! ## Duplicate Months
//!
//! Two payslips for the same month: the later one (chronologically, stable
//! on ties) **overwrites** the display bucket, while both still contribute
//! to the yearly cumulative sums. Overwrite-for-display,
//! accumulate-for-totals is deliberate and must be preserved.

use chrono::{Datelike, Utc};
use paie_core::{EmployeeId, Money, PayslipId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::contribution::ContributionCategory;
use crate::payslip::Payslip;

/// Earliest year the aggregator accepts. Guards against silent empty
/// summaries from a typo like `1025`.
pub const MIN_YEAR: i32 = 2000;

// ─── Output Types ────────────────────────────────────────────────────

/// One calendar month of the summary. Zeroed placeholder for months with
/// no payslip; `payslip_id` is `Some` if and only if the bucket was
/// populated from a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// Calendar month, 1-12.
    pub month: u32,
    /// The payslip shown for this month, if any.
    pub payslip_id: Option<PayslipId>,
    /// Gross salary of the shown payslip.
    pub gross_salary: Money,
    /// Net before tax of the shown payslip.
    pub net_before_tax: Money,
    /// Net paid for the shown payslip.
    pub net_to_pay: Money,
    /// Employer cost of the shown payslip.
    pub employer_cost: Money,
    /// Employee contributions of the shown payslip.
    pub employee_contributions: Money,
    /// Employer contributions of the shown payslip.
    pub employer_contributions: Money,
    /// Paid-leave balance after the shown payslip.
    pub paid_leave_balance: Decimal,
}

impl MonthlyBucket {
    fn empty(month: u32) -> Self {
        Self {
            month,
            payslip_id: None,
            gross_salary: Money::ZERO,
            net_before_tax: Money::ZERO,
            net_to_pay: Money::ZERO,
            employer_cost: Money::ZERO,
            employee_contributions: Money::ZERO,
            employer_contributions: Money::ZERO,
            paid_leave_balance: Decimal::ZERO,
        }
    }

    fn from_payslip(payslip: &Payslip) -> Self {
        let (employee, employer) = contribution_sums(payslip);
        Self {
            month: payslip.period().month(),
            payslip_id: Some(payslip.id),
            gross_salary: payslip.gross_salary,
            net_before_tax: payslip.net_before_tax,
            net_to_pay: payslip.net_to_pay,
            employer_cost: payslip.employer_cost,
            employee_contributions: employee,
            employer_contributions: employer,
            paid_leave_balance: payslip.paid_leave_balance,
        }
    }
}

/// Cumulative totals across every payslip of the year — including
/// same-month duplicates that no longer appear in a monthly bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualTotals {
    /// Σ gross salaries.
    pub gross_salary: Money,
    /// Σ nets before tax.
    pub net_before_tax: Money,
    /// Σ nets paid.
    pub net_to_pay: Money,
    /// Σ net-social figures.
    pub net_social: Money,
    /// Σ employer costs.
    pub employer_cost: Money,
    /// Σ employee contributions.
    pub employee_contributions: Money,
    /// Σ employer contributions.
    pub employer_contributions: Money,
    /// Σ paid-leave days acquired.
    pub paid_leave_acquired: Decimal,
    /// Σ paid-leave days taken.
    pub paid_leave_taken: Decimal,
    /// Balance of the chronologically-last payslip. A running balance,
    /// not a flow: never summed, never averaged.
    pub paid_leave_balance: Decimal,
}

/// Per-category contribution rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    /// Σ employee amounts in the category.
    pub employee_amount: Money,
    /// Σ employer amounts in the category.
    pub employer_amount: Money,
}

/// The annual summary for one employee and one calendar year. Derived on
/// demand, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    /// The requested calendar year.
    pub year: i32,
    /// The employee the summary covers.
    pub employee_id: EmployeeId,
    /// Twelve buckets, January first. Months without a payslip stay zeroed.
    pub monthly: [MonthlyBucket; 12],
    /// Cumulative totals across all processed payslips.
    pub annual_totals: AnnualTotals,
    /// Contribution rollups keyed by category, in bulletin family order.
    pub annual_contributions_by_category: BTreeMap<ContributionCategory, CategoryTotals>,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Why an aggregation request was rejected.
#[derive(Error, Debug)]
pub enum AnnualError {
    /// Year outside the sane range.
    #[error("year {year} outside accepted range {min}..={max}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },
}

// ─── Aggregation ─────────────────────────────────────────────────────

/// Aggregate payslips into an [`AnnualSummary`] for `year`.
///
/// Payslips whose period start falls outside the year are ignored. The
/// input is sorted by period start before processing; the function reads
/// its inputs immutably and carries no state between calls, so aggregating
/// the same payslips twice yields identical summaries.
///
/// # Errors
///
/// Returns [`AnnualError::InvalidYear`] if `year` is before [`MIN_YEAR`] or
/// more than one year in the future.
pub fn aggregate_year(
    employee_id: EmployeeId,
    year: i32,
    payslips: &[Payslip],
) -> Result<AnnualSummary, AnnualError> {
    let max_year = Utc::now().year() + 1;
    if year < MIN_YEAR || year > max_year {
        return Err(AnnualError::InvalidYear {
            year,
            min: MIN_YEAR,
            max: max_year,
        });
    }

    // Explicit chronological sort; stable, so same-day ties keep input order.
    let mut ordered: Vec<&Payslip> = payslips.iter().collect();
    ordered.sort_by_key(|p| p.period_start);

    let mut monthly: [MonthlyBucket; 12] =
        std::array::from_fn(|i| MonthlyBucket::empty(i as u32 + 1));
    let mut totals = AnnualTotals::default();
    let mut by_category: BTreeMap<ContributionCategory, CategoryTotals> = BTreeMap::new();
    let mut last_balance = None;

    for payslip in ordered {
        if payslip.period().year() != year {
            continue;
        }

        let month_index = (payslip.period().month() - 1) as usize;
        // Overwrite-for-display: a later payslip for the same month
        // replaces the bucket …
        monthly[month_index] = MonthlyBucket::from_payslip(payslip);

        // … accumulate-for-totals: every processed payslip counts here.
        let (employee, employer) = contribution_sums(payslip);
        totals.gross_salary += payslip.gross_salary;
        totals.net_before_tax += payslip.net_before_tax;
        totals.net_to_pay += payslip.net_to_pay;
        totals.net_social += payslip.net_social;
        totals.employer_cost += payslip.employer_cost;
        totals.employee_contributions += employee;
        totals.employer_contributions += employer;
        totals.paid_leave_acquired += payslip.paid_leave_acquired;
        totals.paid_leave_taken += payslip.paid_leave_taken;
        last_balance = Some(payslip.paid_leave_balance);

        for line in &payslip.contributions {
            let entry = by_category.entry(line.category).or_default();
            entry.employee_amount += line.employee_amount;
            entry.employer_amount += line.employer_amount;
        }
    }

    totals.paid_leave_balance = last_balance.unwrap_or_default();

    Ok(AnnualSummary {
        year,
        employee_id,
        monthly,
        annual_totals: totals,
        annual_contributions_by_category: by_category,
    })
}

fn contribution_sums(payslip: &Payslip) -> (Money, Money) {
    payslip.contributions.iter().fold(
        (Money::ZERO, Money::ZERO),
        |(employee, employer), line| {
            (
                employee + line.employee_amount,
                employer + line.employer_amount,
            )
        },
    )
}

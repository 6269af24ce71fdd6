//! # Payslip Computation — Gross to Net Reconciliation
//!
//! Derives gross salary, net-before-tax, net-to-pay, net-social and
//! employer cost from pay elements and contribution rules, producing a
//! `Draft` payslip. Pure computation: no I/O, no clock reads beyond the
//! caller-supplied dates.
//!
//! ## Two Rule Sets
//!
//! France distinguishes the fiscal net base from the "net social" base used
//! for benefit eligibility. The computation therefore accepts two
//! independent rule sets; when no social set is supplied, `net_social`
//! equals `net_before_tax`.
//!
//! ## Formulas
//!
//! ```text
//! gross_salary   = Σ amount            (addition-type elements)
//! net_before_tax = gross − Σ employee contributions (fiscal set)
//! net_social     = gross − Σ employee contributions (social set, if any)
//! net_to_pay     = net_before_tax − tax_withheld    (pass-through input)
//! employer_cost  = gross + Σ employer contributions (fiscal set)
//! ```

use chrono::NaiveDate;
use paie_core::{Money, PayPeriod, PayslipId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contribution::{compute_breakdown, ContributionAmount, ContributionRule, LedgerError};
use crate::element::PayElement;
use crate::payslip::{BulletinStatus, EmployeeSnapshot, EmployerSnapshot, PaidLeave, Payslip};

// ─── Inputs ──────────────────────────────────────────────────────────

/// The fiscal rule set plus the optional, independent social-base set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSets {
    /// Rules for the fiscal net computation; these lines appear on the
    /// bulletin.
    pub fiscal: Vec<ContributionRule>,
    /// Distinct social-base rules, when the configuration owner supplies
    /// them. `None` means `net_social == net_before_tax`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<ContributionRule>>,
}

impl RuleSets {
    /// A fiscal-only rule set.
    pub fn fiscal_only(fiscal: Vec<ContributionRule>) -> Self {
        Self {
            fiscal,
            social: None,
        }
    }
}

/// Everything the computation needs to produce a `Draft` payslip.
#[derive(Debug, Clone)]
pub struct ComputationInput {
    /// Employee identity, copied into the payslip as a snapshot.
    pub employee: EmployeeSnapshot,
    /// Employer identity, copied into the payslip as a snapshot.
    pub employer: EmployerSnapshot,
    /// Period the payslip covers.
    pub period: PayPeriod,
    /// Date the net amount is paid.
    pub payment_date: NaiveDate,
    /// Remuneration lines.
    pub elements: Vec<PayElement>,
    /// Withholding tax, a pass-through input (computed by the tax
    /// collaborator, not here).
    pub tax_withheld: Money,
    /// Paid-leave movement for the period.
    pub paid_leave: PaidLeave,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Why a payslip computation was rejected.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// No addition-type element: a payslip must have at least one
    /// gross-pay line.
    #[error("payslip has no addition-type pay element")]
    EmptyPayElements,

    /// An element whose amount is negative; direction must be carried by
    /// the element kind, never by the sign.
    #[error("pay element {label:?} has negative amount {amount}")]
    NegativeElementAmount {
        /// Label of the offending element.
        label: String,
        /// The rejected amount.
        amount: Decimal,
    },

    /// A malformed contribution rule.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

// ─── Computation ─────────────────────────────────────────────────────

/// Derived totals plus the fiscal contribution lines, computed as one
/// unit so callers can swap them into a payslip atomically.
#[derive(Debug, Clone)]
pub struct DerivedTotals {
    /// Fiscal contribution lines, in rule order.
    pub contributions: Vec<ContributionAmount>,
    /// Σ addition amounts.
    pub gross_salary: Money,
    /// Gross minus employee contributions.
    pub net_before_tax: Money,
    /// Net before tax minus withheld tax.
    pub net_to_pay: Money,
    /// Net on the social base.
    pub net_social: Money,
    /// Gross plus employer contributions.
    pub employer_cost: Money,
}

/// Derive all totals from pay elements and rule sets.
///
/// This is the single derivation path: initial computation and
/// post-edit recomputation both flow through it, so a payslip can never
/// hold totals inconsistent with its elements.
///
/// # Errors
///
/// - [`ComputeError::EmptyPayElements`] if no addition-type element exists.
/// - [`ComputeError::NegativeElementAmount`] for a sign-carrying amount.
/// - [`ComputeError::Ledger`] for malformed contribution rules.
pub fn derive_totals(
    elements: &[PayElement],
    rules: &RuleSets,
    tax_withheld: Money,
) -> Result<DerivedTotals, ComputeError> {
    for element in elements {
        if element.amount.as_decimal() < Decimal::ZERO {
            return Err(ComputeError::NegativeElementAmount {
                label: element.label.clone(),
                amount: element.amount.as_decimal(),
            });
        }
    }
    if !elements.iter().any(|e| e.kind.is_addition()) {
        return Err(ComputeError::EmptyPayElements);
    }

    let gross_salary: Money = elements
        .iter()
        .filter(|e| e.kind.is_addition())
        .map(|e| e.amount)
        .sum();

    let fiscal = compute_breakdown(&rules.fiscal)?;
    let net_before_tax = gross_salary - fiscal.total_employee;
    let net_social = match &rules.social {
        Some(social_rules) => {
            let social = compute_breakdown(social_rules)?;
            gross_salary - social.total_employee
        }
        None => net_before_tax,
    };

    Ok(DerivedTotals {
        contributions: fiscal.amounts,
        gross_salary,
        net_before_tax,
        net_to_pay: net_before_tax - tax_withheld,
        net_social,
        employer_cost: gross_salary + fiscal.total_employer,
    })
}

/// Compute a new payslip in `Draft` status.
///
/// # Errors
///
/// See [`derive_totals`].
pub fn compute_payslip(input: ComputationInput, rules: &RuleSets) -> Result<Payslip, ComputeError> {
    let totals = derive_totals(&input.elements, rules, input.tax_withheld)?;

    Ok(Payslip {
        id: PayslipId::new(),
        employee: input.employee,
        employer: input.employer,
        period_start: input.period.start,
        period_end: input.period.end,
        payment_date: input.payment_date,
        pay_elements: input.elements,
        contributions: totals.contributions,
        gross_salary: totals.gross_salary,
        net_before_tax: totals.net_before_tax,
        tax_withheld: input.tax_withheld,
        net_to_pay: totals.net_to_pay,
        net_social: totals.net_social,
        employer_cost: totals.employer_cost,
        paid_leave_acquired: input.paid_leave.acquired,
        paid_leave_taken: input.paid_leave.taken,
        paid_leave_balance: input.paid_leave.balance,
        status: BulletinStatus::Draft,
        modification_log: Vec::new(),
    })
}

/// Recompute all derived fields of an existing payslip from its current
/// elements.
///
/// The new contribution lines and totals are derived completely before any
/// field of the payslip is touched: a failure mid-derivation leaves the
/// payslip exactly as it was, never with a half-replaced contribution list.
///
/// # Errors
///
/// See [`derive_totals`]. On error the payslip is unchanged.
pub fn recompute(payslip: &mut Payslip, rules: &RuleSets) -> Result<(), ComputeError> {
    let totals = derive_totals(&payslip.pay_elements, rules, payslip.tax_withheld)?;

    payslip.contributions = totals.contributions;
    payslip.gross_salary = totals.gross_salary;
    payslip.net_before_tax = totals.net_before_tax;
    payslip.net_to_pay = totals.net_to_pay;
    payslip.net_social = totals.net_social;
    payslip.employer_cost = totals.employer_cost;
    Ok(())
}

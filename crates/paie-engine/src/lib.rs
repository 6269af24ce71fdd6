//! # paie-engine — Payslip Computation for the Paie Stack
//!
//! Pure computation over immutable inputs: this crate turns raw pay
//! elements and contribution rules into fully reconciled payslips, and
//! folds sequences of monthly payslips into annual summaries.
//!
//! ## Components
//!
//! - [`contribution`] — the contribution ledger: per-line employee/employer
//!   amounts with per-line half-up rounding, order-preserving.
//! - [`compute`] — gross/net reconciliation producing `Draft` payslips,
//!   plus the single recomputation path used after edits.
//! - [`annual`] — monthly bucketing, year totals, category rollups, and
//!   the carried paid-leave balance.
//! - [`payslip`] / [`element`] — the interchange records.
//!
//! ## Concurrency
//!
//! Every function here takes immutable inputs (or exclusive `&mut` on one
//! record) and returns new values. There is no shared mutable state and no
//! locking; calls are thread-safe by construction and complete in
//! microseconds. Serializing concurrent edits to one payslip is the
//! lifecycle layer's concern.
//!
//! ## Crate Policy
//!
//! - No I/O. Persistence and transport are external collaborators.
//! - No floats in any monetary path.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod annual;
pub mod compute;
pub mod contribution;
pub mod element;
pub mod payslip;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export primary types for ergonomic imports.
pub use annual::{aggregate_year, AnnualError, AnnualSummary, AnnualTotals, CategoryTotals, MonthlyBucket};
pub use compute::{
    compute_payslip, derive_totals, recompute, ComputationInput, ComputeError, DerivedTotals,
    RuleSets,
};
pub use contribution::{
    compute_breakdown, ContributionAmount, ContributionCategory, ContributionRule,
    LedgerBreakdown, LedgerError,
};
pub use element::{ElementKind, PayElement};
pub use payslip::{BulletinStatus, EmployeeSnapshot, EmployerSnapshot, PaidLeave, Payslip};

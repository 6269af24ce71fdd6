//! # paie-core — Foundational Types for the Paie Stack
//!
//! This crate is the bedrock of the Paie Stack. It defines the type-system
//! primitives shared by every other crate in the workspace; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `EmployeeId`, `PayslipId`,
//!    `Siret`, `Nir` — all newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Exact decimal money.** All monetary values flow through [`Money`],
//!    a `rust_decimal::Decimal` newtype. Floats never touch payslip figures;
//!    a float-derived cent discrepancy on a legal document is a defect class
//!    this crate eliminates by construction.
//!
//! 3. **Per-line rounding.** Rounding to 2 decimal places (half-up) happens
//!    exactly once per computed line via [`Money::round2`], never on
//!    aggregated totals. Cumulative rounding drift across contribution lines
//!    is a dispute generator on French payslips.
//!
//! 4. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with `Z`
//!    suffix and seconds precision, so audit-journal entries serialize to a
//!    stable ISO-8601 form.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paie-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod audit;
pub mod error;
pub mod identity;
pub mod money;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use audit::{FieldChange, ModificationEntry};
pub use error::CoreError;
pub use identity::{EmployeeId, Nir, PayslipId, Siret};
pub use money::{Money, Rate};
pub use temporal::{PayPeriod, Timestamp};

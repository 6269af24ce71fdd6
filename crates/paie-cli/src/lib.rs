//! # paie-cli — Paie Stack Command-Line Interface
//!
//! A structured clap-based CLI over the domain crates. Inputs are YAML
//! (rule sets, computation requests) or JSON (payslip records); outputs
//! are JSON records or rendered documents.
//!
//! ## Subcommands
//!
//! - `compute` — Compute a draft payslip from a request and rule sets
//! - `validate` — Validate a draft payslip, locking it permanently
//! - `summary` — Aggregate payslip records into an annual summary
//! - `render` — Render a payslip record as a printable document
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.
//! - Output records use the camelCase interchange shape throughout.

pub mod compute;
pub mod io;
pub mod render;
pub mod summary;
pub mod validate;

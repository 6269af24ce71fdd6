//! # Error Types — Core Validation Failures
//!
//! Defines the error type for constructor-level validation in `paie-core`.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Identifier errors name the offending value and the expected format.
//! - Temporal errors include both bounds of the rejected range.
//! - Monetary errors carry the rejected value so callers can log it.

use thiserror::Error;

/// Validation errors raised by `paie-core` constructors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A SIRET did not match the 14-digit format.
    #[error("invalid SIRET {value:?}: expected 14 digits")]
    InvalidSiret {
        /// The rejected input.
        value: String,
    },

    /// A NIR (social-security number) did not match the 13- or 15-digit format.
    #[error("invalid NIR {value:?}: expected 13 or 15 digits")]
    InvalidNir {
        /// The rejected input.
        value: String,
    },

    /// A pay period whose end precedes its start.
    #[error("invalid pay period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Period start date.
        start: chrono::NaiveDate,
        /// Period end date.
        end: chrono::NaiveDate,
    },

    /// A timestamp string that is not UTC ISO-8601 with `Z` suffix.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A monetary amount that must be non-negative but was not.
    #[error("negative amount not permitted here: {value}")]
    NegativeAmount {
        /// The rejected value.
        value: rust_decimal::Decimal,
    },
}

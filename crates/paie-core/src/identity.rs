//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers the payslip engine handles.
//! These prevent accidental identifier confusion — you cannot pass an
//! `EmployeeId` where a `PayslipId` is expected.
//!
//! ## Validation
//!
//! `Siret` and `Nir` are validated string newtypes: the engine snapshots
//! them into generated documents, and a malformed registration number on a
//! legal document is not recoverable after the fact. Validation is purely
//! structural (digit count); registry-level existence checks belong to the
//! calling layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Unique identifier for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

/// Unique identifier for a payslip (bulletin de paie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayslipId(pub Uuid);

/// French company registration number (SIRET).
///
/// Format: 14 numeric digits (9-digit SIREN + 5-digit establishment code).
/// Stored without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Siret(String);

/// French social-security number (NIR, "numéro de sécurité sociale").
///
/// Format: 13 digits, or 15 with the control key. Stored without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nir(String);

impl EmployeeId {
    /// Generate a new random employee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl PayslipId {
    /// Generate a new random payslip identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PayslipId {
    fn default() -> Self {
        Self::new()
    }
}

impl Siret {
    /// Validate and wrap a SIRET.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSiret`] unless the input is exactly
    /// 14 ASCII digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.len() == 14 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidSiret { value })
        }
    }

    /// The digits, without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Nir {
    /// Validate and wrap a NIR.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNir`] unless the input is exactly 13 or
    /// 15 ASCII digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if (value.len() == 13 || value.len() == 15) && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidNir { value })
        }
    }

    /// The digits, without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "employee:{}", self.0)
    }
}

impl std::fmt::Display for PayslipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payslip:{}", self.0)
    }
}

impl std::fmt::Display for Siret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Nir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

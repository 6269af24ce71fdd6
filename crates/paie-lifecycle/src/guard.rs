//! # Edit Guards — Single Writer Per Payslip
//!
//! The pure edit logic needs no locking, but two concurrent edits to the
//! same draft payslip race on the derived totals: the journal stays
//! append-only either way, while the second recomputation silently
//! overwrites the first. The calling layer must hold the payslip's guard
//! across the read-edit-write cycle.
//!
//! Guards are keyed by [`PayslipId`] and created on first use; the map
//! itself is cheap to share behind an `Arc`.

use paie_core::PayslipId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-payslip mutual-exclusion handles.
pub struct EditGuards {
    inner: Mutex<HashMap<PayslipId, Arc<tokio::sync::Mutex<()>>>>,
}

impl EditGuards {
    /// Create an empty guard map.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// The guard for one payslip, created on first use.
    ///
    /// Hold the lock across load → [`crate::apply_edit`] → store:
    ///
    /// ```ignore
    /// let guard = guards.guard(payslip_id);
    /// let _held = guard.lock().await;
    /// // load, edit, store
    /// ```
    pub fn guard(&self, id: PayslipId) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.entry(id).or_default().clone()
    }

    /// Drop the guard entry for a payslip that will never be edited again
    /// (validated or deleted). Outstanding handles stay valid.
    pub fn release(&self, id: &PayslipId) {
        let mut map = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.remove(id);
    }
}

impl Default for EditGuards {
    fn default() -> Self {
        Self::new()
    }
}

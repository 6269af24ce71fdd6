//! # Bulletin Edits — Guarded Mutation of Draft Payslips
//!
//! [`apply_edit`] is the single mutation path for payslips. It enforces
//! the lifecycle guard (`Draft` only), produces one journal entry per edit
//! operation covering exactly the fields that changed, and recomputes all
//! derived totals from the updated elements.
//!
//! ## Atomicity
//!
//! The edit is applied to a working copy and swapped in only after the
//! recomputation succeeds. A failure anywhere leaves the payslip (and its
//! journal) byte-for-byte unchanged — in particular, contributions are
//! replaced as one unit, never deleted-then-reinserted.

use chrono::NaiveDate;
use paie_core::{FieldChange, ModificationEntry, Money, Timestamp};
use paie_engine::{recompute, BulletinStatus, ComputeError, PayElement, Payslip, RuleSets};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Actor ───────────────────────────────────────────────────────────

/// Who performed an edit, as supplied by the calling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Opaque identifier from the authentication collaborator.
    pub id: String,
    /// Display name at edit time.
    pub name: String,
}

// ─── Patch ───────────────────────────────────────────────────────────

/// The editable fields of a draft bulletin.
///
/// `None` means "leave unchanged". Every field here is diffed
/// exhaustively; see the crate docs for why this is a struct and not a
/// field-name list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinPatch {
    /// Replace the payment date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Replace the pass-through withholding tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_withheld: Option<Money>,
    /// Replace the remuneration lines wholesale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_elements: Option<Vec<PayElement>>,
    /// Replace the paid-leave days acquired this period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_leave_acquired: Option<Decimal>,
    /// Replace the paid-leave days taken this period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_leave_taken: Option<Decimal>,
    /// Replace the running paid-leave balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_leave_balance: Option<Decimal>,
}

impl BulletinPatch {
    /// Whether the patch proposes no changes at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ─── Outcome and Errors ──────────────────────────────────────────────

/// What an accepted edit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether a downstream document re-render is required. True exactly
    /// when at least one field actually changed.
    pub rerender_required: bool,
    /// Wire names of the fields that changed, in journal order.
    pub changed_fields: Vec<String>,
}

/// Why an edit or validation was rejected.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Mutation attempted on a non-draft bulletin.
    #[error("bulletin is {status} and can no longer be edited")]
    LockedDocument {
        /// The status that blocked the edit.
        status: BulletinStatus,
    },

    /// The recomputation of derived totals rejected the edited elements.
    #[error(transparent)]
    Compute(#[from] ComputeError),

    /// A journal value could not be encoded.
    #[error("could not encode journal value: {0}")]
    Encode(#[from] serde_json::Error),
}

// ─── Edit Application ────────────────────────────────────────────────

/// Apply a patch to a draft payslip.
///
/// Fields whose proposed value equals the stored value are skipped — no
/// no-op journal entries. If anything changed, one [`ModificationEntry`]
/// is appended (existing entries are never touched) and all derived totals
/// are recomputed from the updated elements.
///
/// Callers must serialize concurrent edits to the same payslip (see
/// [`crate::guard::EditGuards`]); the journal itself is append-only and
/// race-safe, but last-write-wins on derived totals is not.
///
/// # Errors
///
/// - [`LifecycleError::LockedDocument`] if the payslip is not `Draft`.
/// - [`LifecycleError::Compute`] if the edited elements no longer form a
///   valid payslip. The payslip is unchanged.
pub fn apply_edit(
    payslip: &mut Payslip,
    patch: BulletinPatch,
    actor: &Actor,
    rules: &RuleSets,
) -> Result<EditOutcome, LifecycleError> {
    if payslip.status != BulletinStatus::Draft {
        return Err(LifecycleError::LockedDocument {
            status: payslip.status,
        });
    }

    // Work on a copy; commit only after recomputation succeeds.
    let mut draft = payslip.clone();
    let mut changes: Vec<FieldChange> = Vec::new();

    // Exhaustive destructuring: a new patch field fails compilation here
    // until it is diffed below.
    let BulletinPatch {
        payment_date,
        tax_withheld,
        pay_elements,
        paid_leave_acquired,
        paid_leave_taken,
        paid_leave_balance,
    } = patch;

    diff_field(&mut changes, "paymentDate", &mut draft.payment_date, payment_date)?;
    diff_field(&mut changes, "taxWithheld", &mut draft.tax_withheld, tax_withheld)?;
    diff_field(&mut changes, "payElements", &mut draft.pay_elements, pay_elements)?;
    diff_field(
        &mut changes,
        "paidLeaveAcquired",
        &mut draft.paid_leave_acquired,
        paid_leave_acquired,
    )?;
    diff_field(
        &mut changes,
        "paidLeaveTaken",
        &mut draft.paid_leave_taken,
        paid_leave_taken,
    )?;
    diff_field(
        &mut changes,
        "paidLeaveBalance",
        &mut draft.paid_leave_balance,
        paid_leave_balance,
    )?;

    if changes.is_empty() {
        return Ok(EditOutcome {
            rerender_required: false,
            changed_fields: Vec::new(),
        });
    }

    recompute(&mut draft, rules)?;

    let changed_fields = changes.iter().map(|c| c.field.clone()).collect();
    draft.modification_log.push(ModificationEntry {
        timestamp: Timestamp::now(),
        actor_id: actor.id.clone(),
        actor_name: actor.name.clone(),
        changes,
    });

    *payslip = draft;
    Ok(EditOutcome {
        rerender_required: true,
        changed_fields,
    })
}

/// Validate (issue and lock) a draft bulletin.
///
/// Re-checks the computation preconditions, then transitions to
/// `Validated`. Irreversible: the engine exposes no way back to `Draft`.
///
/// # Errors
///
/// - [`LifecycleError::LockedDocument`] if already validated.
/// - [`LifecycleError::Compute`] if the preconditions no longer hold
///   (e.g. every addition element was edited away).
pub fn validate_bulletin(payslip: &mut Payslip) -> Result<(), LifecycleError> {
    if payslip.status != BulletinStatus::Draft {
        return Err(LifecycleError::LockedDocument {
            status: payslip.status,
        });
    }
    if !payslip.pay_elements.iter().any(|e| e.kind.is_addition()) {
        return Err(LifecycleError::Compute(ComputeError::EmptyPayElements));
    }
    payslip.status = BulletinStatus::Validated;
    Ok(())
}

/// Diff one field: record a change and assign the new value only if it
/// differs from the stored one.
fn diff_field<T>(
    changes: &mut Vec<FieldChange>,
    field: &str,
    current: &mut T,
    proposed: Option<T>,
) -> Result<(), LifecycleError>
where
    T: PartialEq + Serialize,
{
    if let Some(new_value) = proposed {
        if new_value != *current {
            changes.push(FieldChange {
                field: field.to_owned(),
                old_value: serde_json::to_value(&*current)?,
                new_value: serde_json::to_value(&new_value)?,
            });
            *current = new_value;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paie_core::{EmployeeId, Nir, PayPeriod, Siret};
    use paie_engine::{
        compute_payslip, ComputationInput, EmployeeSnapshot, EmployerSnapshot, PaidLeave,
    };
    use rust_decimal_macros::dec;

    fn actor() -> Actor {
        Actor {
            id: "usr_42".to_owned(),
            name: "Claire Fontaine".to_owned(),
        }
    }

    fn rules() -> RuleSets {
        RuleSets::fiscal_only(vec![])
    }

    fn draft_payslip() -> Payslip {
        compute_payslip(
            ComputationInput {
                employee: EmployeeSnapshot {
                    employee_id: EmployeeId::new(),
                    full_name: "Claire Fontaine".to_owned(),
                    address: "12 rue de la Paix, 75002 Paris".to_owned(),
                    nir: Nir::parse("1850578006048").unwrap(),
                    job_title: None,
                },
                employer: EmployerSnapshot {
                    name: "Exemple SAS".to_owned(),
                    address: "4 avenue Gambetta, 69003 Lyon".to_owned(),
                    siret: Siret::parse("73282932000074").unwrap(),
                    ape_code: None,
                },
                period: PayPeriod::new(
                    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                )
                .unwrap(),
                payment_date: NaiveDate::from_ymd_opt(2025, 3, 28).unwrap(),
                elements: vec![
                    PayElement::addition("Salaire de base", Money(dec!(3000.00))).unwrap(),
                ],
                tax_withheld: Money(dec!(100.00)),
                paid_leave: PaidLeave::default(),
            },
            &rules(),
        )
        .unwrap()
    }

    // ── Lifecycle guard tests ────────────────────────────────────────

    #[test]
    fn test_edit_on_validated_is_locked_and_leaves_payslip_unchanged() {
        let mut payslip = draft_payslip();
        validate_bulletin(&mut payslip).unwrap();
        let before = payslip.clone();

        let patch = BulletinPatch {
            payment_date: NaiveDate::from_ymd_opt(2025, 3, 31),
            ..Default::default()
        };
        let err = apply_edit(&mut payslip, patch, &actor(), &rules()).unwrap_err();
        assert!(matches!(err, LifecycleError::LockedDocument { .. }));
        assert_eq!(payslip, before);
    }

    #[test]
    fn test_locked_even_for_noop_patches() {
        let mut payslip = draft_payslip();
        validate_bulletin(&mut payslip).unwrap();
        let err =
            apply_edit(&mut payslip, BulletinPatch::default(), &actor(), &rules()).unwrap_err();
        assert!(matches!(err, LifecycleError::LockedDocument { .. }));
    }

    #[test]
    fn test_validation_is_irreversible() {
        let mut payslip = draft_payslip();
        validate_bulletin(&mut payslip).unwrap();
        assert!(matches!(
            validate_bulletin(&mut payslip),
            Err(LifecycleError::LockedDocument { .. })
        ));
        assert_eq!(payslip.status, BulletinStatus::Validated);
    }

    #[test]
    fn test_validation_rechecks_preconditions() {
        let mut payslip = draft_payslip();
        payslip.pay_elements.clear();
        assert!(matches!(
            validate_bulletin(&mut payslip),
            Err(LifecycleError::Compute(ComputeError::EmptyPayElements))
        ));
        assert_eq!(payslip.status, BulletinStatus::Draft);
    }

    // ── Diff and journal tests ───────────────────────────────────────

    #[test]
    fn test_noop_changes_are_skipped_silently() {
        let mut payslip = draft_payslip();
        let patch = BulletinPatch {
            payment_date: Some(payslip.payment_date),
            tax_withheld: Some(payslip.tax_withheld),
            ..Default::default()
        };
        let outcome = apply_edit(&mut payslip, patch, &actor(), &rules()).unwrap();
        assert!(!outcome.rerender_required);
        assert!(outcome.changed_fields.is_empty());
        assert!(payslip.modification_log.is_empty());
    }

    #[test]
    fn test_one_entry_per_edit_covering_changed_fields_only() {
        let mut payslip = draft_payslip();
        let patch = BulletinPatch {
            payment_date: NaiveDate::from_ymd_opt(2025, 3, 31),
            tax_withheld: Some(payslip.tax_withheld), // unchanged, skipped
            paid_leave_taken: Some(dec!(1.0)),
            ..Default::default()
        };
        let outcome = apply_edit(&mut payslip, patch, &actor(), &rules()).unwrap();
        assert!(outcome.rerender_required);
        assert_eq!(outcome.changed_fields, ["paymentDate", "paidLeaveTaken"]);

        assert_eq!(payslip.modification_log.len(), 1);
        let entry = &payslip.modification_log[0];
        assert_eq!(entry.actor_id, "usr_42");
        assert_eq!(entry.changes.len(), 2);
        assert_eq!(entry.changes[0].field, "paymentDate");
        assert_eq!(entry.changes[0].old_value, serde_json::json!("2025-03-28"));
        assert_eq!(entry.changes[0].new_value, serde_json::json!("2025-03-31"));
    }

    #[test]
    fn test_journal_is_append_only_across_edits() {
        let mut payslip = draft_payslip();
        apply_edit(
            &mut payslip,
            BulletinPatch {
                paid_leave_taken: Some(dec!(1.0)),
                ..Default::default()
            },
            &actor(),
            &rules(),
        )
        .unwrap();
        let first_entry = payslip.modification_log[0].clone();

        apply_edit(
            &mut payslip,
            BulletinPatch {
                paid_leave_taken: Some(dec!(2.0)),
                ..Default::default()
            },
            &actor(),
            &rules(),
        )
        .unwrap();

        assert_eq!(payslip.modification_log.len(), 2);
        // The prior entry was not rewritten.
        assert_eq!(payslip.modification_log[0], first_entry);
    }

    // ── Recompute-on-edit tests ──────────────────────────────────────

    #[test]
    fn test_element_edit_recomputes_totals() {
        let mut payslip = draft_payslip();
        let patch = BulletinPatch {
            pay_elements: Some(vec![
                PayElement::addition("Salaire de base", Money(dec!(3000.00))).unwrap(),
                PayElement::addition("Prime", Money(dec!(400.00))).unwrap(),
            ]),
            ..Default::default()
        };
        apply_edit(&mut payslip, patch, &actor(), &rules()).unwrap();
        assert_eq!(payslip.gross_salary, Money(dec!(3400.00)));
        assert_eq!(payslip.net_to_pay, Money(dec!(3300.00)));
    }

    #[test]
    fn test_failed_recompute_rolls_back_everything() {
        let mut payslip = draft_payslip();
        let before = payslip.clone();
        let patch = BulletinPatch {
            // Only a deduction left: recomputation must reject this.
            pay_elements: Some(vec![
                PayElement::deduction("Absence", Money(dec!(10.00))).unwrap(),
            ]),
            ..Default::default()
        };
        let err = apply_edit(&mut payslip, patch, &actor(), &rules()).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Compute(ComputeError::EmptyPayElements)
        ));
        // No partial state, no journal entry.
        assert_eq!(payslip, before);
    }
}

//! # paie-lifecycle — Bulletin State Machine and Audit Journal
//!
//! Governs which mutations of a payslip are legal depending on its
//! lifecycle state, and records every accepted mutation in an append-only,
//! field-level modification journal.
//!
//! ## States
//!
//! ```text
//! Draft ──▶ Validated (terminal)
//! ```
//!
//! There is no transition back to `Draft`. Re-opening a validated bulletin
//! is a human process outside this code; the engine only ever supersedes a
//! validated bulletin with a new one.
//!
//! ## Design Decision
//!
//! Edits are expressed as a typed [`BulletinPatch`] over a fixed editable
//! schema rather than a dynamic field-name list. The diff destructures the
//! patch exhaustively, so adding a field to the patch forces the diff (and
//! therefore the audit journal) to handle it — a new field cannot silently
//! bypass change tracking.
//!
//! Derived totals are never patched directly: every accepted edit
//! recomputes them from the updated elements through `paie-engine`, so a
//! partial-field edit cannot leave a payslip internally inconsistent.

pub mod bulletin;
pub mod guard;
pub mod journal;

pub use bulletin::{
    apply_edit, validate_bulletin, Actor, BulletinPatch, EditOutcome, LifecycleError,
};
pub use guard::EditGuards;
pub use journal::{DecodedJournal, JournalCorruption, ModificationJournal, JOURNAL_VERSION};

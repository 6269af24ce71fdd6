//! # Modification Journal — Typed, Versioned, Append-Only
//!
//! The persistence collaborator stores the journal as an opaque JSON blob.
//! This module owns the blob's lifecycle: decode, append, re-encode —
//! losslessly.
//!
//! ## Versioning
//!
//! The encoded form is a versioned object (`{"version": 1, "entries":
//! […]}`). Blobs written before versioning was introduced are bare entry
//! arrays; the decoder accepts those and upgrades them to version 1 on the
//! next encode. An unknown version is corruption, not something to guess
//! at.
//!
//! ## Corruption Is Reported, Never Swallowed
//!
//! A blob that fails to parse must not crash the edit path — but silently
//! discarding audit history is a correctness risk. [`ModificationJournal::decode`]
//! therefore returns an empty journal (so appends can proceed) **together
//! with** a [`JournalCorruption`] report the calling layer must surface to
//! an operator, and logs a `tracing` warning. Prior history is lost at that
//! point; the report is what makes the loss an incident instead of a
//! mystery.

use paie_core::ModificationEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current journal encoding version.
pub const JOURNAL_VERSION: u32 = 1;

/// The decoded journal plus, when the blob was unreadable, the report the
/// calling layer must not drop.
#[derive(Debug)]
pub struct DecodedJournal {
    /// The usable journal (empty if the blob was corrupt).
    pub journal: ModificationJournal,
    /// Present exactly when stored history could not be read.
    pub corruption: Option<JournalCorruption>,
}

/// Why a stored journal blob could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalCorruption {
    /// The blob is not valid JSON, or not a recognized journal shape.
    #[error("journal blob unreadable: {detail}")]
    Unreadable {
        /// Parser diagnostic.
        detail: String,
    },

    /// The blob declares a version this build does not know.
    #[error("journal version {version} not supported (current: {current})", current = JOURNAL_VERSION)]
    UnknownVersion {
        /// The declared version.
        version: u32,
    },
}

/// The typed journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationJournal {
    /// Encoding version; see [`JOURNAL_VERSION`].
    pub version: u32,
    /// Entries, oldest first. Append-only: entries are never rewritten or
    /// removed once recorded.
    pub entries: Vec<ModificationEntry>,
}

impl Default for ModificationJournal {
    fn default() -> Self {
        Self::empty()
    }
}

impl ModificationJournal {
    /// A fresh, empty journal at the current version.
    pub fn empty() -> Self {
        Self {
            version: JOURNAL_VERSION,
            entries: Vec::new(),
        }
    }

    /// Wrap already-parsed entries (e.g. from a payslip record).
    pub fn from_entries(entries: Vec<ModificationEntry>) -> Self {
        Self {
            version: JOURNAL_VERSION,
            entries,
        }
    }

    /// Decode a stored blob.
    ///
    /// Accepts the current versioned object form and the legacy bare-array
    /// form. On corruption, returns an empty journal plus the report; the
    /// edit path can proceed, the caller must alert.
    pub fn decode(blob: &str) -> DecodedJournal {
        // Current form first.
        match serde_json::from_str::<VersionedBlob>(blob) {
            Ok(parsed) if parsed.version == JOURNAL_VERSION => {
                return DecodedJournal {
                    journal: Self {
                        version: parsed.version,
                        entries: parsed.entries,
                    },
                    corruption: None,
                };
            }
            Ok(parsed) => {
                let corruption = JournalCorruption::UnknownVersion {
                    version: parsed.version,
                };
                tracing::warn!(version = parsed.version, "modification journal version unknown; starting empty");
                return DecodedJournal {
                    journal: Self::empty(),
                    corruption: Some(corruption),
                };
            }
            Err(_) => {}
        }

        // Legacy bare array.
        match serde_json::from_str::<Vec<ModificationEntry>>(blob) {
            Ok(entries) => DecodedJournal {
                journal: Self::from_entries(entries),
                corruption: None,
            },
            Err(e) => {
                let corruption = JournalCorruption::Unreadable {
                    detail: e.to_string(),
                };
                tracing::warn!(error = %e, "modification journal unreadable; starting empty");
                DecodedJournal {
                    journal: Self::empty(),
                    corruption: Some(corruption),
                }
            }
        }
    }

    /// Encode to the blob form handed to the persistence collaborator.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; with well-formed entries
    /// this does not happen in practice.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Append one entry. Appending is the only mutation the journal
    /// supports.
    pub fn append(&mut self, entry: ModificationEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct VersionedBlob {
    version: u32,
    entries: Vec<ModificationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use paie_core::{FieldChange, Timestamp};

    fn entry(field: &str) -> ModificationEntry {
        ModificationEntry {
            timestamp: Timestamp::parse("2025-03-31T12:00:05Z").unwrap(),
            actor_id: "usr_42".to_owned(),
            actor_name: "Claire Fontaine".to_owned(),
            changes: vec![FieldChange {
                field: field.to_owned(),
                old_value: serde_json::json!("a"),
                new_value: serde_json::json!("b"),
            }],
        }
    }

    // ── Round-trip tests ─────────────────────────────────────────────

    #[test]
    fn test_decode_encode_is_lossless() {
        let mut journal = ModificationJournal::empty();
        journal.append(entry("paymentDate"));
        journal.append(entry("taxWithheld"));

        let blob = journal.encode().unwrap();
        let decoded = ModificationJournal::decode(&blob);
        assert!(decoded.corruption.is_none());
        assert_eq!(decoded.journal, journal);
    }

    #[test]
    fn test_append_after_decode_preserves_prior_entries() {
        let mut journal = ModificationJournal::from_entries(vec![entry("paymentDate")]);
        let blob = journal.encode().unwrap();

        let mut decoded = ModificationJournal::decode(&blob).journal;
        decoded.append(entry("payElements"));
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.entries[0], journal.entries[0]);

        journal.append(entry("payElements"));
        assert_eq!(decoded, journal);
    }

    // ── Migration tests ──────────────────────────────────────────────

    #[test]
    fn test_legacy_bare_array_is_accepted_and_upgraded() {
        let blob = serde_json::to_string(&vec![entry("paymentDate")]).unwrap();
        let decoded = ModificationJournal::decode(&blob);
        assert!(decoded.corruption.is_none());
        assert_eq!(decoded.journal.version, JOURNAL_VERSION);
        assert_eq!(decoded.journal.len(), 1);

        // Re-encoding writes the versioned form.
        let reencoded = decoded.journal.encode().unwrap();
        assert!(reencoded.starts_with("{\"version\":1,"));
    }

    #[test]
    fn test_unknown_version_is_reported() {
        let blob = r#"{"version": 7, "entries": []}"#;
        let decoded = ModificationJournal::decode(blob);
        assert_eq!(
            decoded.corruption,
            Some(JournalCorruption::UnknownVersion { version: 7 })
        );
        assert!(decoded.journal.is_empty());
    }

    // ── Corruption tests ─────────────────────────────────────────────

    #[test]
    fn test_corrupt_blob_yields_empty_journal_plus_report() {
        let decoded = ModificationJournal::decode("{not json at all");
        assert!(matches!(
            decoded.corruption,
            Some(JournalCorruption::Unreadable { .. })
        ));
        // The edit path can still append going forward.
        let mut journal = decoded.journal;
        journal.append(entry("paymentDate"));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_corruption_not_panic() {
        let decoded = ModificationJournal::decode(r#"{"some": "object"}"#);
        assert!(decoded.corruption.is_some());
        let decoded = ModificationJournal::decode("42");
        assert!(decoded.corruption.is_some());
    }
}

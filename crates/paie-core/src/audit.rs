//! # Audit Wire Types — Field-Level Modification Entries
//!
//! The record types of the append-only modification journal attached to
//! every payslip. The wire shape is an interchange contract with the
//! persistence collaborator, which stores the serialized journal as an
//! opaque blob:
//!
//! ```json
//! {
//!   "timestamp": "2025-03-31T12:00:05Z",
//!   "actorId": "…",
//!   "actorName": "…",
//!   "changes": [{"field": "…", "oldValue": …, "newValue": …}]
//! }
//! ```
//!
//! Field names are fixed; renaming any of them breaks decoding of journals
//! already at rest. Old/new values are carried as JSON values because the
//! journal spans fields of heterogeneous types (dates, amounts, element
//! lists).
//!
//! Entries are append-only: once written, an entry's `changes` array is
//! never mutated or removed. The journal logic that enforces this lives in
//! `paie-lifecycle`; this module only defines the records.

use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;

/// One field-level change inside a modification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    /// Stable name of the edited field (wire name, e.g. `paymentDate`).
    pub field: String,
    /// Value before the edit.
    pub old_value: serde_json::Value,
    /// Value after the edit.
    pub new_value: serde_json::Value,
}

/// One append-only journal entry: a single edit operation by one actor,
/// covering every field that actually changed in that operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationEntry {
    /// When the edit was applied (UTC, seconds precision).
    pub timestamp: Timestamp,
    /// Identifier of the actor, as supplied by the calling layer.
    pub actor_id: String,
    /// Display name of the actor at edit time.
    pub actor_name: String,
    /// The fields that changed. Never empty: no-op edits produce no entry.
    pub changes: Vec<FieldChange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let entry = ModificationEntry {
            timestamp: Timestamp::parse("2025-03-31T12:00:05Z").unwrap(),
            actor_id: "usr_42".to_owned(),
            actor_name: "Claire Fontaine".to_owned(),
            changes: vec![FieldChange {
                field: "paymentDate".to_owned(),
                old_value: serde_json::json!("2025-03-28"),
                new_value: serde_json::json!("2025-03-31"),
            }],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["actorId"], "usr_42");
        assert_eq!(json["actorName"], "Claire Fontaine");
        assert_eq!(json["changes"][0]["oldValue"], "2025-03-28");
        assert_eq!(json["changes"][0]["newValue"], "2025-03-31");
        assert_eq!(json["timestamp"], "2025-03-31T12:00:05Z");
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let entry = ModificationEntry {
            timestamp: Timestamp::now(),
            actor_id: "usr_7".to_owned(),
            actor_name: "A. Martin".to_owned(),
            changes: vec![FieldChange {
                field: "taxWithheld".to_owned(),
                old_value: serde_json::json!("168.05"),
                new_value: serde_json::json!("170.00"),
            }],
        };
        let blob = serde_json::to_string(&entry).unwrap();
        let back: ModificationEntry = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, entry);
    }
}

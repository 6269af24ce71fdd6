//! # Document Model — Fixed Named Sections
//!
//! The contract between the engine and any rendering backend. A document
//! is an ordered list of named sections holding **already-formatted**
//! strings; all locale and currency formatting happens on the engine side
//! (see [`crate::format`]), so a backend has zero business logic.
//!
//! ## Section Contract
//!
//! Section names and their order are fixed. Renaming or reordering a
//! section is a breaking change for every backend and must be coordinated,
//! never done casually.

use serde::{Deserialize, Serialize};

/// The fixed sections of a payslip document, in layout order.
///
/// Contract and certificate documents use the subset that applies to them,
/// still in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Employer identity block.
    #[serde(rename = "employer")]
    Employer,
    /// Employee identity block.
    #[serde(rename = "employee")]
    Employee,
    /// Remuneration table (pay elements).
    #[serde(rename = "remuneration")]
    Remuneration,
    /// Contribution table.
    #[serde(rename = "contributions")]
    Contributions,
    /// Paid-leave table.
    #[serde(rename = "leave")]
    Leave,
    /// Net/gross summary block.
    #[serde(rename = "summary")]
    Summary,
    /// Year-to-date cumulative totals.
    #[serde(rename = "cumulative")]
    CumulativeTotals,
    /// Statutory legal mentions.
    #[serde(rename = "legal")]
    LegalMentions,
}

impl SectionKind {
    /// All sections in layout order.
    pub const ALL: [SectionKind; 8] = [
        Self::Employer,
        Self::Employee,
        Self::Remuneration,
        Self::Contributions,
        Self::Leave,
        Self::Summary,
        Self::CumulativeTotals,
        Self::LegalMentions,
    ];

    /// Display heading for the section.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Employer => "Employeur",
            Self::Employee => "Salarié",
            Self::Remuneration => "Rémunération",
            Self::Contributions => "Cotisations et contributions sociales",
            Self::Leave => "Congés payés",
            Self::Summary => "Récapitulatif",
            Self::CumulativeTotals => "Cumuls",
            Self::LegalMentions => "Mentions légales",
        }
    }

    /// Position of the section in the fixed layout order.
    pub fn position(&self) -> usize {
        match self {
            Self::Employer => 0,
            Self::Employee => 1,
            Self::Remuneration => 2,
            Self::Contributions => 3,
            Self::Leave => 4,
            Self::Summary => 5,
            Self::CumulativeTotals => 6,
            Self::LegalMentions => 7,
        }
    }
}

/// One row of a section: a cell list whose first cell is the row label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Formatted cells, label first.
    pub cells: Vec<String>,
}

impl Row {
    /// A row from any cell list.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }
}

/// One named section with its formatted rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which fixed section this is.
    pub kind: SectionKind,
    /// Formatted rows.
    pub rows: Vec<Row>,
}

/// The full document handed to a rendering backend. Immutable once built;
/// a render never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Document title line (e.g. "Bulletin de paie — mars 2025").
    pub title: String,
    /// Sections in layout order.
    pub sections: Vec<Section>,
}

impl DocumentModel {
    /// Whether the sections respect the fixed layout order (each section at
    /// most once, positions strictly increasing). Builders in this crate
    /// uphold this by construction; backends may assert it on intake.
    pub fn sections_in_order(&self) -> bool {
        self.sections
            .windows(2)
            .all(|w| w[0].kind.position() < w[1].kind.position())
    }
}

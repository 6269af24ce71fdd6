//! # paie-render — Payroll Document Modelling and Rendering
//!
//! Turns validated payroll records into printable documents. The crate is
//! split along a deliberate seam:
//!
//! - [`model`] / [`document`]: a fixed, ordered section model for each
//!   document family (bulletin, contract, certificate) and the pure
//!   builders that populate it from a [`paie_engine::Payslip`]. All
//!   monetary and date values are formatted here, once, in French
//!   conventions ([`format`]); nothing downstream reformats.
//! - [`backend`] / [`pool`]: the [`RenderBackend`] trait for turning a
//!   [`DocumentModel`] into bytes, and a bounded, health-checked
//!   [`RendererPool`] that owns backend lifecycles.
//!
//! ## Design
//!
//! Builders never fail: every fallible step (computation, validation)
//! happens upstream, so a `DocumentModel` is always renderable. The pool
//! is the only async surface; backends themselves are synchronous and run
//! on the blocking thread pool.
//!
//! ## Crate Policy
//!
//! - No panics in non-test code paths.
//! - Rendering backends are replaceable behind [`RenderBackend`]; the
//!   bundled [`TextBackend`] exists for tests, previews, and plain-text
//!   delivery.

pub mod backend;
pub mod document;
pub mod format;
pub mod model;
pub mod pool;

pub use backend::{BackendError, RenderBackend, TextBackend};
pub use document::{
    certificate_document, contract_document, payslip_document, CertificateRecord, ContractRecord,
};
pub use model::{DocumentModel, Row, Section, SectionKind};
pub use pool::{PoolConfig, RenderError, RendererPool};

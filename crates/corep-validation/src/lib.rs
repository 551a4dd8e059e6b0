//! CR1 validation - arithmetic consistency checks and audit trail assembly
//!
//! This crate provides:
//! - Per-row and whole-template validation against the CR1 invariants
//! - Audit trail assembly with regulatory justifications
//! - An explicit report session replacing ambient accumulated state

pub mod audit;
pub mod report;
pub mod rules;
pub mod session;
pub mod validator;

pub use audit::{assemble, assemble_template, parse_trail_totals};
pub use report::{RowCheck, ValidationReport};
pub use session::ReportSession;
pub use validator::Cr1Validator;

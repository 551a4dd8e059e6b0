//! COREP CR1 domain schema
//!
//! This crate provides:
//! - The CR1 row and template types with their regulatory references
//! - The standardised exposure classes
//! - Strict deserialization of externally generated rows

pub mod parse;
pub mod schema;

pub use parse::{GeneratedRow, ParseError};
pub use schema::{
    calculate_rwa, Cr1Row, Cr1Template, ExposureClass, RegulatoryReference, EXCERPT_MAX_CHARS,
    MAX_RISK_WEIGHT_PERCENT, RWA_TOLERANCE,
};

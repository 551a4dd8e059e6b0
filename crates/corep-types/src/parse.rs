//! Strict ingestion of externally generated CR1 rows.
//!
//! The structured-extraction step (an external collaborator) produces a JSON
//! object describing one CR1 row. Deserialization here is schema-validated:
//! a missing or mistyped field is a [`ParseError`], distinct from the
//! arithmetic findings the validator produces.

use serde::Deserialize;
use thiserror::Error;

use crate::schema::{calculate_rwa, Cr1Row, ExposureClass, RegulatoryReference};

/// Errors raised while ingesting a generated row.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not valid JSON or a required field is missing/mistyped
    #[error("malformed generated row: {0}")]
    Json(#[from] serde_json::Error),

    /// The exposure class label is not one of the CR1 classes
    #[error("unknown exposure class: {0:?}")]
    UnknownExposureClass(String),
}

#[derive(Debug, Deserialize)]
struct GeneratedRowPayload {
    exposure_class: String,
    original_exposure_value: f64,
    risk_weight_percent: u32,
    article_used: u32,
    #[serde(default)]
    reasoning: String,
}

/// A structurally valid generated row, prior to arithmetic validation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRow {
    pub exposure_class: ExposureClass,
    pub original_exposure_value: f64,
    pub risk_weight_percent: u32,
    pub article_used: u32,
    pub reasoning: String,
}

impl GeneratedRow {
    /// Parse a generated row from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let payload: GeneratedRowPayload = serde_json::from_str(json)?;
        let exposure_class = ExposureClass::from_label(&payload.exposure_class)
            .ok_or_else(|| ParseError::UnknownExposureClass(payload.exposure_class.clone()))?;

        Ok(Self {
            exposure_class,
            original_exposure_value: payload.original_exposure_value,
            risk_weight_percent: payload.risk_weight_percent,
            article_used: payload.article_used,
            reasoning: payload.reasoning,
        })
    }
}

impl Cr1Row {
    /// Build a CR1 row from a generated row, computing the RWA from the
    /// declared exposure and weight and attaching the supplied citations.
    pub fn from_generated(generated: GeneratedRow, references: Vec<RegulatoryReference>) -> Self {
        let risk_weighted_assets = calculate_rwa(
            generated.original_exposure_value,
            generated.risk_weight_percent,
        );
        Self {
            exposure_class: generated.exposure_class,
            original_exposure_value: generated.original_exposure_value,
            risk_weight_percent: generated.risk_weight_percent,
            risk_weighted_assets,
            regulatory_references: references,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance, in reporting-currency units, for RWA and totals checks.
pub const RWA_TOLERANCE: f64 = 0.01;

/// Upper bound on risk weights under the Standardised Approach.
pub const MAX_RISK_WEIGHT_PERCENT: u32 = 1250;

/// Maximum excerpt length carried in a regulatory reference.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Standardised exposure classes reported in COREP CR1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExposureClass {
    #[serde(rename = "Central governments or central banks")]
    CentralGovernments,
    #[serde(rename = "Institutions")]
    Institutions,
    #[serde(rename = "Corporates")]
    Corporates,
    #[serde(rename = "Retail")]
    Retail,
    #[serde(rename = "Exposures secured by mortgages on residential property")]
    ResidentialMortgages,
    #[serde(rename = "Exposures secured by mortgages on commercial immovable property")]
    CommercialRealEstate,
}

impl ExposureClass {
    /// The full regulatory label used in the CR1 template.
    pub fn label(&self) -> &'static str {
        match self {
            ExposureClass::CentralGovernments => "Central governments or central banks",
            ExposureClass::Institutions => "Institutions",
            ExposureClass::Corporates => "Corporates",
            ExposureClass::Retail => "Retail",
            ExposureClass::ResidentialMortgages => {
                "Exposures secured by mortgages on residential property"
            }
            ExposureClass::CommercialRealEstate => {
                "Exposures secured by mortgages on commercial immovable property"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Central governments or central banks" => Some(ExposureClass::CentralGovernments),
            "Institutions" => Some(ExposureClass::Institutions),
            "Corporates" => Some(ExposureClass::Corporates),
            "Retail" => Some(ExposureClass::Retail),
            "Exposures secured by mortgages on residential property" => {
                Some(ExposureClass::ResidentialMortgages)
            }
            "Exposures secured by mortgages on commercial immovable property" => {
                Some(ExposureClass::CommercialRealEstate)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ExposureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Citation to a rulebook article backing a CR1 classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryReference {
    pub article_number: u32,
    pub source: String,
    pub excerpt: String,
}

impl RegulatoryReference {
    /// Build a reference from a retrieved passage, truncating the excerpt
    /// to [`EXCERPT_MAX_CHARS`] characters plus an ellipsis.
    pub fn new(article_number: u32, source: &str, text: &str) -> Self {
        Self {
            article_number,
            source: source.to_string(),
            excerpt: truncate_excerpt(text),
        }
    }
}

fn truncate_excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        text.to_string()
    } else {
        let mut excerpt: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
        excerpt.push_str("...");
        excerpt
    }
}

/// Risk-weighted assets for an exposure value and risk weight percentage.
pub fn calculate_rwa(exposure: f64, risk_weight_percent: u32) -> f64 {
    exposure * (risk_weight_percent as f64 / 100.0)
}

/// Single row of the COREP CR1 template.
///
/// The RWA consistency invariant (`risk_weighted_assets` against
/// [`calculate_rwa`], within [`RWA_TOLERANCE`]) is checked by the validator,
/// not here: a row may exist in an invalid state pending validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cr1Row {
    pub exposure_class: ExposureClass,
    pub original_exposure_value: f64,
    pub risk_weight_percent: u32,
    pub risk_weighted_assets: f64,
    #[serde(default)]
    pub regulatory_references: Vec<RegulatoryReference>,
}

impl Cr1Row {
    /// RWA implied by this row's exposure and risk weight.
    pub fn calculate_rwa(&self) -> f64 {
        calculate_rwa(self.original_exposure_value, self.risk_weight_percent)
    }
}

/// COREP CR1 - Credit Risk Standardised Approach template.
///
/// Declared totals are checked against the row sums by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cr1Template {
    pub rows: Vec<Cr1Row>,
    pub total_exposure: f64,
    pub total_rwa: f64,
}

impl Cr1Template {
    /// Sum of row exposures and row RWAs, in that order.
    pub fn calculated_totals(&self) -> (f64, f64) {
        let exposure = self.rows.iter().map(|r| r.original_exposure_value).sum();
        let rwa = self.rows.iter().map(|r| r.risk_weighted_assets).sum();
        (exposure, rwa)
    }
}

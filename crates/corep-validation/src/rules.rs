//! Per-invariant checks for CR1 rows.
//!
//! Each check inspects one invariant and returns at most one finding.
//! The risk weight lower bound needs no check: the field type cannot hold a
//! negative percentage.

use corep_types::{Cr1Row, MAX_RISK_WEIGHT_PERCENT, RWA_TOLERANCE};

/// Exposure values must be strictly positive.
pub fn check_exposure_value(row: &Cr1Row) -> Option<String> {
    if row.original_exposure_value <= 0.0 {
        Some(format!(
            "Invalid exposure value: {}",
            row.original_exposure_value
        ))
    } else {
        None
    }
}

/// Risk weights are capped at 1250% under the Standardised Approach.
pub fn check_risk_weight(row: &Cr1Row) -> Option<String> {
    if row.risk_weight_percent > MAX_RISK_WEIGHT_PERCENT {
        Some(format!(
            "Invalid risk weight: {}%",
            row.risk_weight_percent
        ))
    } else {
        None
    }
}

/// Declared RWA must match exposure x weight/100 within [`RWA_TOLERANCE`].
pub fn check_rwa_consistency(row: &Cr1Row) -> Option<String> {
    let expected = row.calculate_rwa();
    if (row.risk_weighted_assets - expected).abs() > RWA_TOLERANCE {
        Some(format!(
            "RWA mismatch: declared {}, calculated {}",
            row.risk_weighted_assets, expected
        ))
    } else {
        None
    }
}

/// A row without citations is accepted but flagged as under-justified.
pub fn check_references(row: &Cr1Row) -> Option<String> {
    if row.regulatory_references.is_empty() {
        Some(format!(
            "No regulatory references for {}",
            row.exposure_class
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corep_types::ExposureClass;

    fn row(exposure: f64, weight: u32, rwa: f64) -> Cr1Row {
        Cr1Row {
            exposure_class: ExposureClass::Corporates,
            original_exposure_value: exposure,
            risk_weight_percent: weight,
            risk_weighted_assets: rwa,
            regulatory_references: vec![],
        }
    }

    #[test]
    fn positive_exposure_passes() {
        assert!(check_exposure_value(&row(1.0, 100, 1.0)).is_none());
    }

    #[test]
    fn zero_and_negative_exposure_fail() {
        assert!(check_exposure_value(&row(0.0, 100, 0.0)).is_some());
        assert!(check_exposure_value(&row(-5.0, 100, -5.0)).is_some());
    }

    #[test]
    fn risk_weight_cap_is_inclusive() {
        assert!(check_risk_weight(&row(1.0, 1250, 12.5)).is_none());
        assert!(check_risk_weight(&row(1.0, 1251, 12.51)).is_some());
    }

    #[test]
    fn rwa_within_tolerance_passes() {
        assert!(check_rwa_consistency(&row(100.0, 100, 100.009)).is_none());
        assert!(check_rwa_consistency(&row(100.0, 100, 100.011)).is_some());
    }

    #[test]
    fn missing_references_warn() {
        let finding = check_references(&row(1.0, 100, 1.0)).unwrap();
        assert!(finding.contains("Corporates"));
    }
}

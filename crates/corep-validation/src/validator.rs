//! CR1 validator entry point.

use tracing::warn;

use corep_types::{Cr1Row, Cr1Template, RWA_TOLERANCE};

use crate::report::{RowCheck, ValidationReport};
use crate::rules;

/// Validates CR1 rows and templates for arithmetic consistency.
///
/// Every call returns its own findings; the validator itself is stateless.
#[derive(Debug, Default)]
pub struct Cr1Validator;

impl Cr1Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check a single row against the CR1 invariants.
    pub fn validate_row(&self, row: &Cr1Row) -> RowCheck {
        let errors = [
            rules::check_exposure_value(row),
            rules::check_risk_weight(row),
            rules::check_rwa_consistency(row),
        ]
        .into_iter()
        .flatten()
        .collect();

        let warnings = rules::check_references(row).into_iter().collect();

        RowCheck { errors, warnings }
    }

    /// Check every row and the declared totals of a template.
    ///
    /// Row errors are prefixed with their 1-based row index. Total
    /// mismatches beyond [`RWA_TOLERANCE`] are errors, never warnings.
    pub fn validate_template(&self, template: &Cr1Template) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (i, row) in template.rows.iter().enumerate() {
            let check = self.validate_row(row);
            errors.extend(check.errors.into_iter().map(|e| format!("Row {}: {}", i + 1, e)));
            warnings.extend(check.warnings);
        }

        let (calculated_exposure, calculated_rwa) = template.calculated_totals();

        if (calculated_exposure - template.total_exposure).abs() > RWA_TOLERANCE {
            errors.push(format!(
                "Total exposure mismatch: declared {}, calculated {}",
                template.total_exposure, calculated_exposure
            ));
        }
        if (calculated_rwa - template.total_rwa).abs() > RWA_TOLERANCE {
            errors.push(format!(
                "Total RWA mismatch: declared {}, calculated {}",
                template.total_rwa, calculated_rwa
            ));
        }

        if !errors.is_empty() {
            warn!(error_count = errors.len(), "CR1 template failed validation");
        }

        ValidationReport::new(errors, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corep_types::{calculate_rwa, ExposureClass, RegulatoryReference};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn row(class: ExposureClass, exposure: f64, weight: u32, rwa: f64) -> Cr1Row {
        Cr1Row {
            exposure_class: class,
            original_exposure_value: exposure,
            risk_weight_percent: weight,
            risk_weighted_assets: rwa,
            regulatory_references: vec![RegulatoryReference::new(
                122,
                "PRA Rulebook Art. 122",
                "excerpt",
            )],
        }
    }

    #[test]
    fn consistent_row_has_no_errors() {
        let validator = Cr1Validator::new();
        let check = validator.validate_row(&row(
            ExposureClass::Corporates,
            50_000_000.0,
            100,
            50_000_000.0,
        ));
        assert_eq!(check.errors, Vec::<String>::new());
        assert!(check.warnings.is_empty());
    }

    #[test]
    fn rwa_mismatch_is_exactly_one_error() {
        let validator = Cr1Validator::new();
        let check = validator.validate_row(&row(
            ExposureClass::Corporates,
            50_000_000.0,
            100,
            40_000_000.0,
        ));
        assert_eq!(check.errors.len(), 1);
        assert!(check.errors[0].starts_with("RWA mismatch"));
    }

    #[test]
    fn missing_references_is_warning_not_error() {
        let validator = Cr1Validator::new();
        let mut bare = row(ExposureClass::Retail, 1_000.0, 75, 750.0);
        bare.regulatory_references.clear();
        let check = validator.validate_row(&bare);
        assert!(check.errors.is_empty());
        assert_eq!(check.warnings.len(), 1);
        assert!(check.is_clean());
    }

    fn sample_template(total_exposure: f64, total_rwa: f64) -> Cr1Template {
        Cr1Template {
            rows: vec![
                row(ExposureClass::Corporates, 50_000_000.0, 100, 50_000_000.0),
                row(
                    ExposureClass::CentralGovernments,
                    100_000_000.0,
                    0,
                    0.0,
                ),
            ],
            total_exposure,
            total_rwa,
        }
    }

    #[test]
    fn template_with_matching_totals_is_valid() {
        let validator = Cr1Validator::new();
        let report = validator.validate_template(&sample_template(150_000_000.0, 50_000_000.0));
        assert!(report.is_valid);
        assert_eq!(report.errors, Vec::<String>::new());
    }

    #[test]
    fn total_rwa_mismatch_is_exactly_one_error() {
        let validator = Cr1Validator::new();
        let report = validator.validate_template(&sample_template(150_000_000.0, 49_999_999.0));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Total RWA mismatch"));
    }

    #[test]
    fn row_errors_carry_one_based_indices() {
        let validator = Cr1Validator::new();
        let mut template = sample_template(150_000_000.0, 50_000_000.0);
        template.rows[1].risk_weighted_assets = 123.0;
        template.total_rwa = 50_000_123.0;
        let report = validator.validate_template(&template);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2: RWA mismatch"));
    }

    #[test]
    fn warnings_never_affect_validity() {
        let validator = Cr1Validator::new();
        let mut template = sample_template(150_000_000.0, 50_000_000.0);
        for r in &mut template.rows {
            r.regulatory_references.clear();
        }
        let report = validator.validate_template(&template);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn repeated_validation_is_idempotent() {
        let validator = Cr1Validator::new();
        let template = sample_template(150_000_000.0, 50_000_000.0);
        let first = validator.validate_template(&template);
        for _ in 0..10 {
            assert_eq!(validator.validate_template(&template), first);
        }
    }

    proptest! {
        #[test]
        fn rows_built_from_calculate_rwa_always_validate(
            exposure in 0.01f64..1e12,
            weight in 0u32..=1250,
        ) {
            let validator = Cr1Validator::new();
            let consistent = row(
                ExposureClass::Institutions,
                exposure,
                weight,
                calculate_rwa(exposure, weight),
            );
            prop_assert!(validator.validate_row(&consistent).errors.is_empty());
        }
    }
}

//! Audit trail assembly.
//!
//! Recombines validated rows with their regulatory references into a
//! human-readable justification record. Formatting only: no validation
//! happens here, so assembling a trail from a known-invalid row is safe and
//! useful for debugging.

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use corep_types::{Cr1Row, Cr1Template};

lazy_static! {
    static ref TOTAL_EXPOSURE_PATTERN: Regex =
        Regex::new(r"Total Exposure: £(-?\d+(?:\.\d+)?)").unwrap();
    static ref TOTAL_RWA_PATTERN: Regex =
        Regex::new(r"Total RWA: £(-?\d+(?:\.\d+)?)").unwrap();
}

/// Assemble the per-row audit trail, in input order.
///
/// Each row lists its exposure class, exposure, risk weight and RWA,
/// followed by every regulatory reference's source and excerpt in citation
/// order.
pub fn assemble(rows: &[Cr1Row]) -> String {
    let mut trail = String::from("AUDIT TRAIL - REGULATORY JUSTIFICATION\n");
    trail.push_str(&"=".repeat(70));
    trail.push_str("\n\n");

    for (i, row) in rows.iter().enumerate() {
        trail.push_str(&format!("Row {}: {}\n", i + 1, row.exposure_class));
        trail.push_str(&format!(
            "  Exposure: £{:.2}\n",
            row.original_exposure_value
        ));
        trail.push_str(&format!("  Risk Weight: {}%\n", row.risk_weight_percent));
        trail.push_str(&format!("  RWA: £{:.2}\n", row.risk_weighted_assets));
        trail.push_str("\n  Regulatory Basis:\n");

        for reference in &row.regulatory_references {
            trail.push_str(&format!("    - {}\n", reference.source));
            trail.push_str(&format!("      {}\n", reference.excerpt));
        }

        trail.push('\n');
        trail.push_str(&"-".repeat(70));
        trail.push_str("\n\n");
    }

    trail
}

/// Assemble a full template trail: header, per-row justifications and a
/// TOTALS footer carrying the declared totals.
pub fn assemble_template(template: &Cr1Template) -> String {
    let mut trail = String::from("COREP CR1 - AUDIT TRAIL\n");
    trail.push_str(&"=".repeat(80));
    trail.push('\n');
    trail.push_str(&format!(
        "Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    trail.push_str(&"=".repeat(80));
    trail.push_str("\n\n");

    trail.push_str(&assemble(&template.rows));

    trail.push_str(&"=".repeat(80));
    trail.push_str("\nTOTALS\n");
    trail.push_str(&"-".repeat(80));
    trail.push('\n');
    trail.push_str(&format!("Total Exposure: £{:.2}\n", template.total_exposure));
    trail.push_str(&format!("Total RWA: £{:.2}\n", template.total_rwa));

    trail
}

/// Re-parse the declared totals from a trail produced by
/// [`assemble_template`]. Returns `(total_exposure, total_rwa)`.
///
/// Amounts are printed with two decimals, so any total quantized to the
/// reporting currency's cent round-trips exactly.
pub fn parse_trail_totals(trail: &str) -> Option<(f64, f64)> {
    let exposure = TOTAL_EXPOSURE_PATTERN
        .captures(trail)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()?;
    let rwa = TOTAL_RWA_PATTERN
        .captures(trail)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()?;
    Some((exposure, rwa))
}

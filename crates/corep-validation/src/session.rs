//! Explicit report session.
//!
//! Rows accumulated during one reporting session live here, passed by
//! handle between calls instead of ambient shared state. Sessions are
//! in-memory only; export is a host concern.

use chrono::{DateTime, Utc};

use corep_types::{Cr1Row, Cr1Template};

/// Accumulates CR1 rows for one reporting session.
#[derive(Debug, Clone)]
pub struct ReportSession {
    rows: Vec<Cr1Row>,
    created_at: DateTime<Utc>,
}

impl ReportSession {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn push_row(&mut self, row: Cr1Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Cr1Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop all accumulated rows, keeping the session handle alive.
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Build a template whose declared totals are computed from the rows,
    /// so a freshly built template always passes the totals checks.
    pub fn build_template(&self) -> Cr1Template {
        let total_exposure = self.rows.iter().map(|r| r.original_exposure_value).sum();
        let total_rwa = self.rows.iter().map(|r| r.risk_weighted_assets).sum();
        Cr1Template {
            rows: self.rows.clone(),
            total_exposure,
            total_rwa,
        }
    }
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}

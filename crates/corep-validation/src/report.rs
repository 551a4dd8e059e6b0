use serde::{Deserialize, Serialize};

/// Findings for a single CR1 row.
///
/// Errors mark invariant violations; warnings flag rows that are accepted
/// but under-justified. Both are data, never exceptions, so a caller can
/// display every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowCheck {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RowCheck {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of validating a complete CR1 template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no errors were found; warnings never affect this.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

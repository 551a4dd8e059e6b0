//! Context formatting for the downstream generation step.

use crate::search::SearchResult;

/// Concatenate retrieved passages into one context block, in input order.
///
/// Each passage is rendered as its `[source]` label followed by the full
/// chunk text; entries are separated by a blank line. No truncation happens
/// here; excerpting is the concern of reference construction.
pub fn format_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| format!("[{}]\n{}\n", result.source, result.text))
        .collect::<Vec<_>>()
        .join("\n")
}

//! JSON rendering for extracted records.

use std::path::Path;

use serde::Serialize;

use crate::batch::DocumentOutcome;
use crate::error::{Error, Result};
use crate::record::ExtractedRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct OutcomeEntry<'a> {
    index: usize,
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a ExtractedRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a DocumentOutcome> for OutcomeEntry<'a> {
    fn from(outcome: &'a DocumentOutcome) -> Self {
        Self {
            index: outcome.index,
            path: &outcome.path,
            record: outcome.record(),
            error: outcome.error().map(ToString::to_string),
        }
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert batch outcomes to a JSON array.
///
/// Successful entries carry a `record` object with all nine keys (absent
/// fields are `null`); failed entries carry an `error` string instead.
pub fn to_json(outcomes: &[DocumentOutcome], format: JsonFormat) -> Result<String> {
    let entries: Vec<OutcomeEntry<'_>> = outcomes.iter().map(OutcomeEntry::from).collect();
    serialize(&entries, format)
}

/// Convert a single record to a JSON object.
pub fn record_to_json(record: &ExtractedRecord, format: JsonFormat) -> Result<String> {
    serialize(record, format)
}

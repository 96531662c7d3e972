//! Human-readable dump of batch results.

use std::fmt::Write;

use crate::batch::DocumentOutcome;
use crate::record::ExtractedRecord;

/// Render one record as nine `key: value` lines, absent fields as `unknown`.
pub fn record_to_pretty(record: &ExtractedRecord) -> String {
    let mut output = String::new();
    write_record(&mut output, record);
    output
}

/// Render every outcome as a block headed by its path.
///
/// Blocks are separated by a blank line. A failed document shows a single
/// `error:` line in place of its fields.
pub fn to_pretty(outcomes: &[DocumentOutcome]) -> String {
    let mut output = String::new();

    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "== {} ==", outcome.path.display());
        match &outcome.result {
            Ok(record) => write_record(&mut output, record),
            Err(e) => {
                let _ = writeln!(output, "error: {}", e);
            }
        }
    }

    output
}

fn write_record(output: &mut String, record: &ExtractedRecord) {
    for (field, value) in record.fields() {
        let _ = writeln!(output, "{}: {}", field.key(), value);
    }
}

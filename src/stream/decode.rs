use serde_json::Value;

use crate::error::ExportError;
use crate::models::Record;

/// Rebuild one CSV row into a [`Record`] using the page's repetition counts.
///
/// Counts are walked in first-seen header order, consuming raw values left to
/// right. A repeated name collapses its group into an array of the non-empty
/// values; a singleton keeps its value, with the empty string becoming null.
/// Running out of values mid-walk means the row and header are out of sync
/// and fails with [`ExportError::DecodeAnomaly`]; values beyond the header's
/// width cannot be attributed to any name and are ignored.
pub fn decode_row(raw: &[String], counts: &[(String, usize)]) -> Result<Record, ExportError> {
    let mut record = Record::new();
    let mut cursor = 0usize;

    for (name, count) in counts {
        let available = raw.len().saturating_sub(cursor);
        if available < *count {
            return Err(ExportError::DecodeAnomaly {
                column: name.clone(),
                expected: *count,
                got: available,
            });
        }

        let group = &raw[cursor..cursor + count];
        cursor += count;

        let value = if *count > 1 {
            Value::Array(
                group
                    .iter()
                    .filter(|value| !value.is_empty())
                    .map(|value| Value::String(value.clone()))
                    .collect(),
            )
        } else if group[0].is_empty() {
            Value::Null
        } else {
            Value::String(group[0].clone())
        };
        record.insert(name.clone(), value);
    }

    Ok(record)
}

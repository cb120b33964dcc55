//! Result-file loader with schema validation.
//!
//! Rows must hold exactly [`COLUMN_COUNT`] numeric fields.  Anything else is
//! reported with its line number instead of silently producing wrong
//! numbers downstream.  A `#` starts a comment that runs to the end of the
//! line, wherever it appears.  Surrounding whitespace is trimmed and blank
//! lines are skipped.

use std::io::Read;
use std::path::Path;

use sd_core::record::COLUMN_COUNT;
use sd_core::{ResultMatrix, TrialRecord};

use crate::{OutputError, OutputResult};

/// Load a result file from disk.
pub fn load_result_matrix(path: &Path) -> OutputResult<ResultMatrix> {
    let file = std::fs::File::open(path)?;
    read_result_matrix(file, &path.display().to_string())
}

/// Like [`load_result_matrix`] but accepts any `Read` source.  `source_name`
/// is only used in error messages.
pub fn read_result_matrix<R: Read>(mut reader: R, source_name: &str) -> OutputResult<ResultMatrix> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let stripped = strip_comments(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(stripped.as_bytes());

    let schema_err = |line: u64, message: String| OutputError::Schema {
        source_name: source_name.to_owned(),
        line,
        message,
    };

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());

        // A lone empty field is a blank line with stray whitespace.
        if row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() != COLUMN_COUNT {
            return Err(schema_err(
                line,
                format!("expected {COLUMN_COUNT} columns, found {}", row.len()),
            ));
        }

        let values = row
            .iter()
            .enumerate()
            .map(|(i, field)| {
                field
                    .parse::<f64>()
                    .map_err(|_| schema_err(line, format!("column {i}: {field:?} is not a number")))
            })
            .collect::<OutputResult<Vec<f64>>>()?;

        let record = TrialRecord::from_row(&values).map_err(|e| schema_err(line, e.to_string()))?;
        records.push(record);
    }

    tracing::debug!(source = source_name, rows = records.len(), "result file loaded");
    Ok(ResultMatrix::new(records))
}

/// Cut every line at its first `#`.  Line count is preserved so error
/// positions still point into the original file.
fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
        .collect::<Vec<_>>()
        .join("\n")
}

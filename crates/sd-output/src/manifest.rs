//! Dataset manifest loader.
//!
//! # Format
//!
//! One dataset per line, no header, `#` starts a comment line:
//!
//! ```csv
//! # file,               label,          casus
//! bees-sync.csv,        synchronous,    0
//! bees-sync-casu.csv,   synchronous,    5
//! ```
//!
//! Order matters: it fixes the order datasets are compared and coloured in.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{OutputError, OutputResult};

/// One manifest line: which result file to load and how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Result file name, relative to the data directory.
    pub file:             String,
    pub label:            String,
    /// Secondary (stationary) agents present while the file was measured.
    pub secondary_agents: u32,
}

/// Load a manifest file from disk.
pub fn load_manifest(path: &Path) -> OutputResult<Vec<ManifestEntry>> {
    let file = std::fs::File::open(path)?;
    load_manifest_reader(file, &path.display().to_string())
}

/// Like [`load_manifest`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(reader: R, source_name: &str) -> OutputResult<Vec<ManifestEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        if row.iter().all(str::is_empty) {
            continue;
        }

        let manifest_err = |message: String| OutputError::Manifest {
            source_name: source_name.to_owned(),
            line,
            message,
        };

        if row.len() != 3 {
            return Err(manifest_err(format!(
                "expected `file,label,secondary_count`, found {} fields",
                row.len()
            )));
        }
        let entry: ManifestEntry = row.deserialize(None).map_err(|e| manifest_err(e.to_string()))?;
        if entry.file.is_empty() {
            return Err(manifest_err("empty file name".into()));
        }
        entries.push(entry);
    }

    tracing::debug!(source = source_name, datasets = entries.len(), "manifest loaded");
    Ok(entries)
}

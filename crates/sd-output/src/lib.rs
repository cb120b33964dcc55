//! `sd-output` — flat-file I/O for the slowdown toolkit.
//!
//! | File                 | Format                                                        | API                                           |
//! |----------------------|---------------------------------------------------------------|-----------------------------------------------|
//! | result file          | headerless CSV, 10 numeric columns (see [`sd_core::record`])  | [`CsvRecordWriter`], [`load_result_matrix`]   |
//! | raw repeat file      | headerless CSV `actual,expected,relative_error`               | [`write_raw_rows`]                            |
//! | dataset manifest     | headerless CSV `filename,label,secondary_count`, `#` comments | [`load_manifest`]                             |
//! | comparison series    | CSV with header                                               | [`write_band_series`], [`write_cost_series`]  |
//!
//! Files are written whole: writers stage into a sibling `.tmp` file and
//! rename it into place on [`RecordWriter::finish`], so a reader never sees
//! a half-written result file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sd_output::{CsvRecordWriter, RecordWriter, load_result_matrix};
//!
//! let mut w = CsvRecordWriter::create(Path::new("results/bees.csv"))?;
//! w.write_record(&record)?;
//! w.finish()?;
//! let matrix = load_result_matrix(Path::new("results/bees.csv"))?;
//! ```

pub mod csv;
pub mod error;
pub mod manifest;
pub mod reader;
pub mod row;
pub mod series;
pub mod writer;


pub use crate::csv::{CsvRecordWriter, write_raw_rows};
pub use error::{OutputError, OutputResult};
pub use manifest::{ManifestEntry, load_manifest, load_manifest_reader};
pub use reader::{load_result_matrix, read_result_matrix};
pub use row::{BandRow, CostRow, RawRow};
pub use series::{write_band_series, write_cost_series};
pub use writer::RecordWriter;

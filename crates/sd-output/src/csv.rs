//! CSV result-file backend.
//!
//! Result files carry no header: the column schema is positional (see
//! [`sd_core::record`]).  Count columns are written as integers, everything
//! else with Rust's shortest round-trip float formatting.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use sd_core::TrialRecord;

use crate::writer::RecordWriter;
use crate::{OutputResult, RawRow};

/// `<path>.tmp`, the staging file renamed over `path` on completion.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}

/// Stage `write` into a sibling file, then rename it over `path`.
pub(crate) fn write_whole<F>(path: &Path, headers: bool, write: F) -> OutputResult<()>
where
    F: FnOnce(&mut Writer<File>) -> OutputResult<()>,
{
    let staging = staging_path(path);
    let mut w = WriterBuilder::new().has_headers(headers).from_path(&staging)?;
    write(&mut w)?;
    w.flush()?;
    drop(w);
    fs::rename(&staging, path)?;
    Ok(())
}

fn format_record(r: &TrialRecord) -> [String; 10] {
    [
        r.agents.to_string(),
        (r.face_south as u8).to_string(),
        r.duration_secs.to_string(),
        r.lag_secs.to_string(),
        r.velocity.to_string(),
        r.repeats.to_string(),
        r.abs_mean.to_string(),
        r.abs_std.to_string(),
        r.rel_mean.to_string(),
        r.rel_std.to_string(),
    ]
}

// ── CsvRecordWriter ───────────────────────────────────────────────────────────

/// Writes a result file.  Rows go to `<path>.tmp`; [`finish`][RecordWriter::finish]
/// renames it to `path`.  Dropping the writer without finishing leaves the
/// staging file behind and `path` untouched.
pub struct CsvRecordWriter {
    writer:  Option<Writer<File>>,
    staging: PathBuf,
    target:  PathBuf,
    rows:    usize,
}

impl CsvRecordWriter {
    pub fn create(path: &Path) -> OutputResult<Self> {
        let staging = staging_path(path);
        let writer = WriterBuilder::new().has_headers(false).from_path(&staging)?;
        Ok(Self {
            writer: Some(writer),
            staging,
            target: path.to_path_buf(),
            rows: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.target
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }
}

impl RecordWriter for CsvRecordWriter {
    fn write_record(&mut self, record: &TrialRecord) -> OutputResult<()> {
        let w = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::other("result file already finished"))?;
        w.write_record(format_record(record))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let Some(mut w) = self.writer.take() else {
            return Ok(());
        };
        w.flush()?;
        drop(w);
        fs::rename(&self.staging, &self.target)?;
        tracing::debug!(path = %self.target.display(), rows = self.rows, "result file written");
        Ok(())
    }
}

// ── Raw per-repeat rows ───────────────────────────────────────────────────────

/// Write per-repeat `actual,expected,relative_error` rows, headerless.
pub fn write_raw_rows(path: &Path, rows: &[RawRow]) -> OutputResult<()> {
    write_whole(path, false, |w| {
        for row in rows {
            w.write_record(&[
                row.actual.to_string(),
                row.expected.to_string(),
                row.relative_error.to_string(),
            ])?;
        }
        Ok(())
    })
}

//! The `RecordWriter` trait implemented by result sinks.

use sd_core::TrialRecord;

use crate::OutputResult;

/// Sink for result-file rows.
pub trait RecordWriter {
    /// Append one row.
    fn write_record(&mut self, record: &TrialRecord) -> OutputResult<()>;

    /// Make the written rows visible and release file handles.
    ///
    /// Idempotent: later calls do nothing.
    fn finish(&mut self) -> OutputResult<()>;
}

/// In-memory sink, handy for tests and for collecting a sweep before
/// deciding where it goes.
impl RecordWriter for Vec<TrialRecord> {
    fn write_record(&mut self, record: &TrialRecord) -> OutputResult<()> {
        self.push(*record);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

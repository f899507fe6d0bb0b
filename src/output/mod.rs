//! Record sinks.
//!
//! Records are handed to a sink one at a time, in source order, as soon as
//! they are assembled.

pub mod writer;

use crate::error::Result;
use crate::models::CityRecord;

pub use writer::WriterSink;

/// Destination for assembled city records.
pub trait RecordSink {
    /// Append one record.
    fn append(&mut self, record: &CityRecord) -> Result<()>;
}

/// Collects records in memory.
impl RecordSink for Vec<CityRecord> {
    fn append(&mut self, record: &CityRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

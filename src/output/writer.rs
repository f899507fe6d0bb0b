//! Line-oriented sink over any `io::Write`.

use std::io::Write;

use crate::error::Result;
use crate::models::{CityRecord, CityRecordOutput, OutputFormat};
use crate::output::RecordSink;

/// Writes one line per record and flushes after each.
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for WriterSink<W> {
    fn append(&mut self, record: &CityRecord) -> Result<()> {
        match self.format {
            OutputFormat::Csv => writeln!(self.writer, "{}", record.to_csv_line())?,
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.writer, &CityRecordOutput::from(record))?;
                self.writer.write_all(b"\n")?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

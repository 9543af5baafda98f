use std::io::Write;

use super::{EstimateRecord, COLUMNS};
use crate::Result;

/// Writes estimate records as comma-separated lines, header first
pub struct CsvWriter<W: Write> {
    writer: W,
    rows: usize,
}
impl<W: Write> CsvWriter<W> {
    /// Wraps `writer` and emits the header line
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", COLUMNS.join(","))?;
        Ok(Self { writer, rows: 0 })
    }
    pub fn write_record(&mut self, record: &EstimateRecord) -> Result<()> {
        let line = record
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{}", line)?;
        self.rows += 1;
        Ok(())
    }
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a EstimateRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }
    /// Number of data rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Flushes and returns the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

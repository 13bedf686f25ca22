//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::StatusWriter;
use crate::{OutputResult, StatusRow};

/// Writes one CSV row per vehicle per report tick.
///
/// Columns:
/// `tick,elapsed_secs,vehicle_id,state,from,to,remaining,arrived_at,reason`.
pub struct CsvStatusWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvStatusWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvStatusWriter<W> {
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(inner);
        rows.write_record([
            "tick",
            "elapsed_secs",
            "vehicle_id",
            "state",
            "from",
            "to",
            "remaining",
            "arrived_at",
            "reason",
        ])?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}

impl<W: Write> StatusWriter for CsvStatusWriter<W> {
    fn write_report(&mut self, tick: u64, elapsed_secs: u64, rows: &[StatusRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                tick.to_string(),
                elapsed_secs.to_string(),
                row.vehicle_id.clone(),
                row.state.as_str().to_string(),
                row.from.clone(),
                row.to.clone(),
                row.remaining.to_string(),
                row.arrived_at.map(|t| t.to_string()).unwrap_or_default(),
                row.reason.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

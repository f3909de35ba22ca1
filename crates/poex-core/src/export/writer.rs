//! CSV serialization of the output table.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::table::{PoTable, COLUMNS};
use crate::error::ExportError;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

impl PoTable {
    /// Serialize the table as CSV to any writer.
    ///
    /// The canonical header row is always written, even for empty tables.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        if self.is_empty() {
            wtr.write_record(COLUMNS)?;
        }
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Serialize the table as CSV to a file.
    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        if self.is_empty() {
            wtr.write_record(COLUMNS)?;
        }
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        debug!("Wrote {} row(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Serialize the table as an in-memory CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            ))
        })
    }
}

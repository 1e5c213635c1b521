use std::io::Write;

use crate::error::Result;
use crate::model::GameRecord;

/// Marker written for a column a row does not have (empty cell in CSV).
const MISSING: &str = "";

/// The growing dataset: one row per collected game.
///
/// Append-only; rows keep discovery order. The column set is the union of
/// every column seen so far: appending a record with novel columns pads all
/// earlier rows with the missing marker, and the new row is padded against
/// columns it lacks. Nothing is deduplicated; replaying a game appends it
/// again, and uniqueness is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct GameStatsTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl GameStatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in schema order: first-seen order across all appended
    /// records.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order, each padded to the full column set.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Append one record, extending the schema with any columns it
    /// introduces.
    pub fn append(&mut self, record: &GameRecord) {
        let fields = record.fields();

        for (column, _) in &fields {
            if !self.columns.contains(column) {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(MISSING.to_string());
                }
            }
        }

        let mut row = vec![MISSING.to_string(); self.columns.len()];
        for (column, value) in fields {
            if let Some(index) = self.columns.iter().position(|c| *c == column) {
                row[index] = value;
            }
        }
        self.rows.push(row);
    }

    /// Write the table as CSV: a leading row-index column, then every
    /// schema column. Missing values stay as empty cells rather than being
    /// omitted.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        let header = std::iter::once("").chain(self.columns.iter().map(String::as_str));
        csv.write_record(header)?;
        for (index, row) in self.rows.iter().enumerate() {
            let record = std::iter::once(index.to_string()).chain(row.iter().cloned());
            csv.write_record(record)?;
        }

        csv.flush()?;
        Ok(())
    }
}

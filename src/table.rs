// src/table.rs

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Writer};
use std::path::Path;
use tracing::debug;

/// Cell values treated as absent once trimmed, in addition to the empty
/// string. These are the tokens that show up in hand-maintained spreadsheets.
static MISSING_TOKENS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// One delimited file held fully in memory: the header row plus every data
/// row, in file order. Every row has exactly `headers.len()` fields; the
/// loader rejects anything ragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of `name` in the header row, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// True when a cell carries no usable value.
pub fn is_missing(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed)
}

/// Read the whole CSV at `path` into memory. The first record is the header;
/// a record whose field count disagrees with it aborts the load.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {} at record {}", path.display(), idx))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    debug!(rows = rows.len(), columns = headers.len(), "loaded {}", path.display());
    Ok(Table { headers, rows })
}

/// Serialize `table` to `path`, overwriting whatever is already there.
/// No synthetic row-index column is added.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr =
        Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(&table.headers)
        .with_context(|| format!("writing header row to {}", path.display()))?;
    for row in &table.rows {
        wtr.write_record(row)
            .with_context(|| format!("writing data row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    Ok(())
}

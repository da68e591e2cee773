//! CSV export for analysis tables.
//!
//! Each table in a bundle becomes one CSV file named after the table.
//! Cells are rendered through their `Display` form, so the null
//! sentinel is written as `n/a` and dates as ISO-8601.

use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::bundle::{AnalysisBundle, Table};
use crate::error::Result;

/// Write one table as CSV to any sink implementing `Write`.
pub fn write_table<W: std::io::Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(&table.columns)?;
    for row in &table.rows {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export every table of a bundle into `dir`, one `<table>.csv` file
/// each. Returns the written paths in table order.
pub fn export_bundle(bundle: &AnalysisBundle, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut paths = Vec::new();
    for table in bundle.tables() {
        let path = dir.join(format!("{}.csv", table.name));
        write_table(table, File::create(&path)?)?;
        paths.push(path);
    }
    Ok(paths)
}

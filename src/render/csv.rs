use crate::render::error::RenderError;
use crate::types::tables::monthly_table::MonthlyTable;
use log::info;
use polars::prelude::{CsvWriter, SerWriter};
use std::fs::File;
use std::path::Path;

/// Writes the wide table (`month` plus one column per series) as CSV with a header row.
pub fn write_csv(table: &MonthlyTable, path: &Path) -> Result<(), RenderError> {
    let mut df = table.to_dataframe()?;
    let mut file = File::create(path).map_err(|e| RenderError::Io(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

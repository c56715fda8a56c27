use std::path::Path;

use anyhow::Result;
use consolida_core::Report;

use crate::cli::OutputFormat;

mod csv;
mod xlsx;

/// Write the consolidated table, overwriting any previous output.
pub fn write(report: &Report, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => xlsx::write(report, path),
        OutputFormat::Csv => csv::write(report, path),
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use consolida_core::{CellValue, Report, Resolved};
use rust_xlsxwriter::Workbook;

pub fn write(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in report.headers().iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, row) in report.rows.iter().enumerate() {
        let out_row = idx as u32 + 1;
        sheet.write_string(out_row, 0, row.file_key.as_str())?;
        sheet.write_string(out_row, 1, row.sheet.as_str())?;
        sheet.write_string(out_row, 2, row.reference.as_str())?;
        // Scalars keep their native type; columns and blocks share the value
        // column as delimited text.
        match &row.value {
            Resolved::Cell(CellValue::Number(n)) => {
                sheet.write_number(out_row, 3, *n)?;
            }
            Resolved::Cell(CellValue::Bool(b)) => {
                sheet.write_boolean(out_row, 3, *b)?;
            }
            Resolved::Cell(CellValue::Empty) => {}
            value => {
                sheet.write_string(out_row, 3, value.render().as_str())?;
            }
        }
    }
    workbook
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

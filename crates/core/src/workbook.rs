use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{ConsolidaError, Result};

/// Open a workbook (`.xlsx` or `.xls`, auto-detected) and return the named
/// sheet's cell range, with no header-row interpretation.
pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    if !sheet_names.iter().any(|name| name == sheet_name) {
        return Err(ConsolidaError::SheetNotFound {
            file: path.to_path_buf(),
            sheet: sheet_name.to_string(),
        });
    }
    Ok(workbook.worksheet_range(sheet_name)?)
}

use calamine::{Data, Range};

use crate::error::{ConsolidaError, Result};
use crate::reference::{CellRef, CellReference};
use crate::value::{CellValue, Resolved};

/// Resolve a textual reference against a sheet's cell range.
///
/// The range is addressed absolutely: position (0, 0) is the sheet's physical
/// A1, regardless of where its used region starts. Cells inside the sheet's
/// extent but outside the used region read as empty; a reference whose anchor
/// lies past the used extent (or any reference against a sheet with no cells)
/// is out of bounds.
pub fn resolve(sheet: &Range<Data>, sheet_name: &str, reference: &str) -> Result<Resolved> {
    let parsed = CellReference::parse(reference)?;
    let (end_row, end_col) = sheet
        .end()
        .ok_or_else(|| out_of_bounds(reference, sheet_name))?;
    match parsed {
        CellReference::Cell(cell) => {
            if cell.row > end_row || cell.col > end_col {
                return Err(out_of_bounds(reference, sheet_name));
            }
            Ok(Resolved::Cell(value_at(sheet, cell)))
        }
        CellReference::Column(col) => {
            if col > end_col {
                return Err(out_of_bounds(reference, sheet_name));
            }
            let values = (0..=end_row)
                .map(|row| value_at(sheet, CellRef::new(row, col)))
                .collect();
            Ok(Resolved::Column(values))
        }
        CellReference::Range(block) => {
            if block.start.row > end_row || block.start.col > end_col {
                return Err(out_of_bounds(reference, sheet_name));
            }
            let rows = (block.start.row..=block.end.row)
                .map(|row| {
                    (block.start.col..=block.end.col)
                        .map(|col| value_at(sheet, CellRef::new(row, col)))
                        .collect()
                })
                .collect();
            Ok(Resolved::Block(rows))
        }
    }
}

fn value_at(sheet: &Range<Data>, cell: CellRef) -> CellValue {
    sheet
        .get_value((cell.row, cell.col))
        .map(CellValue::from)
        .unwrap_or(CellValue::Empty)
}

fn out_of_bounds(reference: &str, sheet_name: &str) -> ConsolidaError {
    ConsolidaError::OutOfBounds {
        reference: reference.trim().to_string(),
        sheet: sheet_name.to_string(),
    }
}

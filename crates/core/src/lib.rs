mod consolidate;
mod error;
mod reference;
mod resolve;
mod value;
mod workbook;

pub use consolidate::{consolidate, consolidate_dated, ConfigEntry, Report, ReportRow};
pub use error::{ConsolidaError, Result};
pub use reference::{column_index, column_label, CellRef, CellReference, RangeRef};
pub use resolve::resolve;
pub use value::{CellValue, Resolved};
pub use workbook::load_sheet;

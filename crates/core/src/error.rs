use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsolidaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("sheet `{sheet}` not found in {file:?}")]
    SheetNotFound { file: PathBuf, sheet: String },
    #[error("invalid cell reference `{reference}`: {reason}")]
    InvalidReference {
        reference: String,
        reason: &'static str,
    },
    #[error("reference `{reference}` is outside the used range of sheet `{sheet}`")]
    OutOfBounds { reference: String, sheet: String },
    #[error("no spreadsheet files selected")]
    EmptyFileSelection,
    #[error("no configuration entries to consolidate with")]
    EmptyConfiguration,
}

pub type Result<T> = std::result::Result<T, ConsolidaError>;

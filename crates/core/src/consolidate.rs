use std::path::{Path, PathBuf};

use calamine::{Data, Range};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{ConsolidaError, Result};
use crate::resolve::resolve;
use crate::value::Resolved;
use crate::workbook;

const DATE_FORMAT: &str = "%d-%m-%Y";

/// A persisted extraction rule: which sheet and which cells to pull from any
/// selected file whose file-key contains `file_key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub file_key: String,
    pub sheet: String,
    pub cells: String,
}

impl ConfigEntry {
    pub fn new(
        file_key: impl Into<String>,
        sheet: impl Into<String>,
        cells: impl Into<String>,
    ) -> Self {
        Self {
            file_key: file_key.into(),
            sheet: sheet.into(),
            cells: cells.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub file_key: String,
    pub sheet: String,
    pub reference: String,
    pub value: Resolved,
}

/// The consolidated table: one row per resolved reference, all rows sharing
/// the run date that titles the value column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn headers(&self) -> [&str; 4] {
        ["Archivo", "Hoja", "Celda", self.date.as_str()]
    }
}

/// Consolidate with today's local date as the value-column header.
pub fn consolidate(files: &[PathBuf], entries: &[ConfigEntry]) -> Result<Report> {
    let date = Local::now().format(DATE_FORMAT).to_string();
    consolidate_dated(files, entries, &date)
}

/// Consolidate with an explicit date stamp. Deterministic for a fixed input
/// set: files in the order given, entries in the order given within a file,
/// references left-to-right within an entry.
pub fn consolidate_dated(files: &[PathBuf], entries: &[ConfigEntry], date: &str) -> Result<Report> {
    consolidate_with(files, entries, date, |path, sheet| {
        workbook::load_sheet(path, sheet)
    })
}

fn consolidate_with<F>(
    files: &[PathBuf],
    entries: &[ConfigEntry],
    date: &str,
    mut load: F,
) -> Result<Report>
where
    F: FnMut(&Path, &str) -> Result<Range<Data>>,
{
    if files.is_empty() {
        return Err(ConsolidaError::EmptyFileSelection);
    }
    if entries.is_empty() {
        return Err(ConsolidaError::EmptyConfiguration);
    }
    let mut rows = Vec::new();
    for path in files {
        let file_key = file_key(path);
        let mut matched = false;
        for entry in entries {
            // Loose by design: an entry named "Q1" applies to every selected
            // file whose file-key contains "Q1".
            if !file_key.contains(&entry.file_key) {
                continue;
            }
            matched = true;
            tracing::debug!(file = %file_key, sheet = %entry.sheet, "loading sheet");
            let sheet = load(path, &entry.sheet)?;
            for reference in entry.cells.split(',') {
                let reference = reference.trim();
                if reference.is_empty() {
                    continue;
                }
                let value = resolve(&sheet, &entry.sheet, reference)?;
                rows.push(ReportRow {
                    file_key: file_key.clone(),
                    sheet: entry.sheet.clone(),
                    reference: reference.to_string(),
                    value,
                });
            }
        }
        if !matched {
            tracing::warn!(file = %file_key, "no configuration entry matches file");
        }
    }
    Ok(Report {
        date: date.to_string(),
        rows,
    })
}

/// A file's join key against configuration entries: its base name with the
/// extension removed.
pub fn file_key(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

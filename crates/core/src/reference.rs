use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConsolidaError, Result};

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]+").expect("letter pattern"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]+").expect("digit pattern"));
static COLUMN_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Z]+$").expect("column pattern"));

/// A single cell position, 0-indexed on both axes: `row = 0` is spreadsheet
/// row `1`, `col = 0` is column `A`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// An inclusive rectangular block, normalized so `start <= end` on both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeRef {
    pub start: CellRef,
    pub end: CellRef,
}

impl RangeRef {
    pub const fn new(a: CellRef, b: CellRef) -> Self {
        let start_row = if a.row <= b.row { a.row } else { b.row };
        let end_row = if a.row <= b.row { b.row } else { a.row };
        let start_col = if a.col <= b.col { a.col } else { b.col };
        let end_col = if a.col <= b.col { b.col } else { a.col };
        Self {
            start: CellRef::new(start_row, start_col),
            end: CellRef::new(end_row, end_col),
        }
    }
}

/// One of the three textual reference forms a configuration entry may carry.
///
/// Classification is order-sensitive: a colon always means a range, a pure
/// letter sequence means an entire column, anything else is read as a single
/// cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellReference {
    Cell(CellRef),
    Column(u32),
    Range(RangeRef),
}

impl CellReference {
    /// Classify and parse a reference string. The input is trimmed first.
    pub fn parse(reference: &str) -> Result<Self> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(invalid(trimmed, "empty reference"));
        }
        if let Some((start, end)) = trimmed.split_once(':') {
            let start = parse_cell(start.trim())?;
            let end = parse_cell(end.trim())?;
            return Ok(CellReference::Range(RangeRef::new(start, end)));
        }
        if COLUMN_ONLY.is_match(trimmed) {
            return Ok(CellReference::Column(column_index(trimmed)?));
        }
        Ok(CellReference::Cell(parse_cell(trimmed)?))
    }
}

/// Parse a single-cell reference like `B3`.
///
/// Extraction is deliberately lenient: the first run of uppercase letters and
/// the first run of digits are taken independently, so `A1B2` reads as `A1`.
fn parse_cell(reference: &str) -> Result<CellRef> {
    let letters = LETTER_RUN
        .find(reference)
        .ok_or_else(|| invalid(reference, "no column letters"))?;
    let digits = DIGIT_RUN
        .find(reference)
        .ok_or_else(|| invalid(reference, "no row number"))?;
    let col = column_index(letters.as_str())?;
    let row_1_based: u32 = digits
        .as_str()
        .parse()
        .map_err(|_| invalid(reference, "row number out of range"))?;
    if row_1_based == 0 {
        return Err(invalid(reference, "row numbers start at 1"));
    }
    Ok(CellRef::new(row_1_based - 1, col))
}

/// Convert a column label to its 0-based index, reading the letters as a
/// base-26 number with digit values A=1..Z=26 (no zero digit).
pub fn column_index(letters: &str) -> Result<u32> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(invalid(letters, "column letters must be A-Z"));
        }
        let digit = (b - b'A') as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or_else(|| invalid(letters, "column label out of range"))?;
    }
    if col == 0 {
        return Err(invalid(letters, "column label out of range"));
    }
    Ok(col - 1)
}

/// Inverse of [`column_index`]: 0-based index back to its column label.
pub fn column_label(col: u32) -> String {
    let mut n = col + 1;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).expect("column letters are always valid UTF-8")
}

fn invalid(reference: &str, reason: &'static str) -> ConsolidaError {
    ConsolidaError::InvalidReference {
        reference: reference.to_string(),
        reason,
    }
}

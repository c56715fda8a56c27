use std::fmt;

use calamine::Data;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value, decoupled from the reader library's type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    Error(String),
}

impl From<&Data> for CellValue {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// What a reference resolved to. The three shapes share one column in the
/// consolidated output; non-scalar shapes are rendered to delimited text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolved {
    Cell(CellValue),
    Column(Vec<CellValue>),
    Block(Vec<Vec<CellValue>>),
}

impl Resolved {
    /// Render to a single text cell: column values joined by `", "`, block
    /// rows joined by `"; "`.
    pub fn render(&self) -> String {
        match self {
            Resolved::Cell(value) => value.to_string(),
            Resolved::Column(values) => values.iter().join(", "),
            Resolved::Block(rows) => rows.iter().map(|row| row.iter().join(", ")).join("; "),
        }
    }
}

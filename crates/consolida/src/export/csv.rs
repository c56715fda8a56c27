use std::path::Path;

use anyhow::{Context, Result};
use consolida_core::Report;
use csv::Writer;

pub fn write(report: &Report, path: &Path) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(report.headers())?;
    for row in &report.rows {
        writer.write_record([
            row.file_key.as_str(),
            row.sheet.as_str(),
            row.reference.as_str(),
            row.value.render().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use consolida_core::{CellValue, Report, ReportRow, Resolved};
    use tempfile::tempdir;

    use super::*;

    fn sample_report() -> Report {
        Report {
            date: "15-03-2024".to_string(),
            rows: vec![
                ReportRow {
                    file_key: "Sales_2024".to_string(),
                    sheet: "Summary".to_string(),
                    reference: "A1".to_string(),
                    value: Resolved::Cell(CellValue::Number(42.0)),
                },
                ReportRow {
                    file_key: "Sales_2024".to_string(),
                    sheet: "Summary".to_string(),
                    reference: "B2:B3".to_string(),
                    value: Resolved::Block(vec![
                        vec![CellValue::Number(1.0)],
                        vec![CellValue::Number(2.0)],
                    ]),
                },
            ],
        }
    }

    #[test]
    fn writes_headers_and_rendered_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reporte.csv");
        write(&sample_report(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "Archivo,Hoja,Celda,15-03-2024");
        assert_eq!(lines.next().unwrap(), "Sales_2024,Summary,A1,42");
        assert_eq!(lines.next().unwrap(), "Sales_2024,Summary,B2:B3,1; 2");
        assert!(lines.next().is_none());
    }

    #[test]
    fn output_is_overwritten_on_rewrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reporte.csv");
        write(&sample_report(), &path).unwrap();
        let mut shorter = sample_report();
        shorter.rows.truncate(1);
        write(&shorter, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}

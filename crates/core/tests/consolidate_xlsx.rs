use std::path::{Path, PathBuf};

use consolida_core::{
    consolidate_dated, CellValue, ConfigEntry, ConsolidaError, Resolved,
};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

// Sheet "Summary":
//   Producto | (empty) | Norte
//   (empty)  | 100     | Sur
//   (empty)  | 200     |
//   (empty)  | 300     |
fn write_sales_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary").unwrap();
    sheet.write_string(0, 0, "Producto").unwrap();
    sheet.write_string(0, 2, "Norte").unwrap();
    sheet.write_number(1, 1, 100.0).unwrap();
    sheet.write_string(1, 2, "Sur").unwrap();
    sheet.write_number(2, 1, 200.0).unwrap();
    sheet.write_number(3, 1, 300.0).unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn consolidates_cell_range_and_column_from_a_real_workbook() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Sales_2024.xlsx");
    write_sales_workbook(&path);

    let files = vec![path];
    let entries = vec![ConfigEntry::new("Sales", "Summary", "A1, B2:B4, C")];
    let report = consolidate_dated(&files, &entries, "15-03-2024").unwrap();

    assert_eq!(report.headers(), ["Archivo", "Hoja", "Celda", "15-03-2024"]);
    assert_eq!(report.rows.len(), 3);
    for row in &report.rows {
        assert_eq!(row.file_key, "Sales_2024");
        assert_eq!(row.sheet, "Summary");
    }

    assert_eq!(report.rows[0].reference, "A1");
    assert_eq!(
        report.rows[0].value,
        Resolved::Cell(CellValue::Text("Producto".into()))
    );

    assert_eq!(report.rows[1].reference, "B2:B4");
    assert_eq!(
        report.rows[1].value,
        Resolved::Block(vec![
            vec![CellValue::Number(100.0)],
            vec![CellValue::Number(200.0)],
            vec![CellValue::Number(300.0)],
        ])
    );

    assert_eq!(report.rows[2].reference, "C");
    assert_eq!(
        report.rows[2].value,
        Resolved::Column(vec![
            CellValue::Text("Norte".into()),
            CellValue::Text("Sur".into()),
            CellValue::Empty,
            CellValue::Empty,
        ])
    );
}

#[test]
fn consolidation_is_deterministic_for_fixed_inputs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Sales_2024.xlsx");
    write_sales_workbook(&path);

    let files = vec![path];
    let entries = vec![ConfigEntry::new("Sales", "Summary", "A1, B2:B4, C")];
    let first = consolidate_dated(&files, &entries, "15-03-2024").unwrap();
    let second = consolidate_dated(&files, &entries, "15-03-2024").unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_sheet_is_a_typed_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Sales_2024.xlsx");
    write_sales_workbook(&path);

    let files = vec![path];
    let entries = vec![ConfigEntry::new("Sales", "NoSuchSheet", "A1")];
    let result = consolidate_dated(&files, &entries, "15-03-2024");
    match result {
        Err(ConsolidaError::SheetNotFound { sheet, .. }) => assert_eq!(sheet, "NoSuchSheet"),
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn unreadable_file_surfaces_a_spreadsheet_error() {
    let files = vec![PathBuf::from("definitely/not/here.xlsx")];
    let entries = vec![ConfigEntry::new("here", "Summary", "A1")];
    assert!(consolidate_dated(&files, &entries, "15-03-2024").is_err());
}

use chrono::NaiveDate;

use datasmith_generate::{CellValue, Column, FieldKind, Table};
use datasmith_output::{CsvOptions, encode_csv};

fn sample_table() -> Table {
    Table {
        name: "people".to_string(),
        columns: vec![
            Column {
                name: "age".to_string(),
                kind: FieldKind::Int,
                cells: vec![CellValue::Int(19), CellValue::Int(21), CellValue::Int(18)],
            },
            Column {
                name: "tier".to_string(),
                kind: FieldKind::Cat,
                cells: vec![
                    CellValue::Text("gold".to_string()),
                    CellValue::Text("silver".to_string()),
                    CellValue::Text("gold".to_string()),
                ],
            },
            Column {
                name: "joined".to_string(),
                kind: FieldKind::Date,
                cells: vec![
                    CellValue::Date(NaiveDate::from_ymd_opt(2020, 3, 14).expect("date")),
                    CellValue::Null,
                    CellValue::Date(NaiveDate::from_ymd_opt(2021, 7, 1).expect("date")),
                ],
            },
        ],
    }
}

#[test]
fn csv_has_a_header_and_one_line_per_row() {
    let bytes = encode_csv(&sample_table(), &CsvOptions::default()).expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8 output");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three rows: {text}");
    assert_eq!(lines[0], "age|tier|joined");
    assert_eq!(lines[1], "19|gold|2020-03-14");
}

#[test]
fn nulls_render_as_empty_cells() {
    let bytes = encode_csv(&sample_table(), &CsvOptions::default()).expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[2], "21|silver|");
}

#[test]
fn header_and_delimiter_are_configurable() {
    let options = CsvOptions {
        delimiter: b',',
        header: false,
    };
    let bytes = encode_csv(&sample_table(), &options).expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8 output");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "19,gold,2020-03-14");
}

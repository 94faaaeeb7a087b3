use std::fs;
use std::fs::File;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use datasmith_core::OutputFormat;
use datasmith_generate::{CellValue, Column, FieldKind, Table};
use datasmith_output::{ParquetOptions, WriteOptions, encode_parquet, persist};

fn sample_table() -> Table {
    let joined = NaiveDate::from_ymd_opt(2020, 3, 14).expect("date");
    let seen: NaiveDateTime = joined.and_hms_opt(9, 30, 0).expect("datetime");
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
                    CellValue::Null,
                ],
            },
            Column {
                name: "joined".to_string(),
                kind: FieldKind::Date,
                cells: vec![
                    CellValue::Date(joined),
                    CellValue::Date(joined),
                    CellValue::Null,
                ],
            },
            Column {
                name: "last_seen".to_string(),
                kind: FieldKind::Timestamp,
                cells: vec![
                    CellValue::Timestamp(seen),
                    CellValue::Null,
                    CellValue::Timestamp(seen),
                ],
            },
            Column {
                name: "mystery".to_string(),
                kind: FieldKind::Unsupported,
                cells: vec![CellValue::Null, CellValue::Null, CellValue::Null],
            },
        ],
    }
}

fn temp_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "datasmith_output_{label}_{}.parquet",
        std::process::id()
    ));
    path
}

#[test]
fn parquet_round_trips_shape_and_nulls() {
    let bytes = encode_parquet(&sample_table(), &ParquetOptions::default()).expect("encode");

    let path = temp_path("roundtrip");
    fs::write(&path, &bytes).expect("write parquet");

    let file = File::open(&path).expect("open parquet");
    let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .expect("parquet metadata")
        .build()
        .expect("batch reader");

    let batch = reader.next().expect("one batch").expect("readable batch");
    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.num_columns(), 5);
    assert_eq!(batch.column(1).null_count(), 1);
    assert_eq!(batch.column(4).null_count(), 3);

    fs::remove_file(&path).ok();
}

#[tokio::test]
async fn persist_writes_a_local_parquet_artifact() {
    let path = temp_path("persist");
    let destination = path.display().to_string();

    let written = persist(
        &sample_table(),
        OutputFormat::Parquet,
        &destination,
        &WriteOptions::default(),
    )
    .await
    .expect("persist");

    let on_disk = fs::metadata(&path).expect("artifact exists").len();
    assert_eq!(written, on_disk);

    fs::remove_file(&path).ok();
}

#[tokio::test]
async fn persist_writes_a_local_csv_artifact() {
    let mut path = std::env::temp_dir();
    path.push(format!("datasmith_output_csv_{}.csv", std::process::id()));
    let destination = path.display().to_string();

    persist(
        &sample_table(),
        OutputFormat::Csv,
        &destination,
        &WriteOptions::default(),
    )
    .await
    .expect("persist");

    let text = fs::read_to_string(&path).expect("read artifact");
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("age|tier|joined|last_seen|mystery"));

    fs::remove_file(&path).ok();
}

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Date32Array, Float64Array, Int64Array, StringArray,
    TimestampMillisecondArray,
};
use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;

use datasmith_generate::{CellValue, Column, FieldKind, Table};

/// Columnar encoding options. Snappy-compressed, millisecond timestamps.
#[derive(Debug, Clone)]
pub struct ParquetOptions {
    pub compression: Compression,
}

impl Default for ParquetOptions {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
        }
    }
}

/// Encode the table as a single Parquet row group, entirely in memory.
pub fn encode_parquet(table: &Table, options: &ParquetOptions) -> Result<Vec<u8>, ParquetError> {
    let fields: Vec<ArrowField> = table
        .columns
        .iter()
        .map(|column| ArrowField::new(column.name.as_str(), arrow_type(column.kind), true))
        .collect();
    let schema = Arc::new(ArrowSchema::new(fields));
    let arrays: Vec<ArrayRef> = table.columns.iter().map(column_array).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let props = WriterProperties::builder()
        .set_compression(options.compression)
        .build();
    let mut buffer = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut buffer, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(buffer)
}

/// Arrow type per field kind. Timestamps are coerced to millisecond
/// precision; time-of-day and all free text persist as UTF-8.
fn arrow_type(kind: FieldKind) -> DataType {
    match kind {
        FieldKind::Boolean => DataType::Boolean,
        FieldKind::Int => DataType::Int64,
        FieldKind::Float | FieldKind::Decimal | FieldKind::Double => DataType::Float64,
        FieldKind::Date => DataType::Date32,
        FieldKind::Timestamp => DataType::Timestamp(TimeUnit::Millisecond, None),
        _ => DataType::Utf8,
    }
}

fn column_array(column: &Column) -> ArrayRef {
    match arrow_type(column.kind) {
        DataType::Boolean => {
            let cells: Vec<Option<bool>> = column
                .cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Bool(value) => Some(*value),
                    _ => None,
                })
                .collect();
            Arc::new(BooleanArray::from(cells))
        }
        DataType::Int64 => {
            let cells: Vec<Option<i64>> = column.cells.iter().map(CellValue::as_i64).collect();
            Arc::new(Int64Array::from(cells))
        }
        DataType::Float64 => {
            let cells: Vec<Option<f64>> = column.cells.iter().map(CellValue::as_f64).collect();
            Arc::new(Float64Array::from(cells))
        }
        DataType::Date32 => {
            let cells: Vec<Option<i32>> = column
                .cells
                .iter()
                .map(|cell| cell.as_date().map(days_since_epoch))
                .collect();
            Arc::new(Date32Array::from(cells))
        }
        DataType::Timestamp(_, _) => {
            let cells: Vec<Option<i64>> = column
                .cells
                .iter()
                .map(|cell| {
                    cell.as_timestamp()
                        .map(|ts| ts.and_utc().timestamp_millis())
                })
                .collect();
            Arc::new(TimestampMillisecondArray::from(cells))
        }
        _ => {
            let cells: Vec<Option<String>> = column
                .cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Null => None,
                    other => Some(other.render()),
                })
                .collect();
            Arc::new(StringArray::from(cells))
        }
    }
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    date.signed_duration_since(epoch).num_days() as i32
}

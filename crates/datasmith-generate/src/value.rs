use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One generated cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Numeric value rendered with a fixed two-place scale.
    Decimal(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Render the cell for delimited-text output. Nulls render empty.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => value.to_string(),
            CellValue::Decimal(value) => format!("{value:.2}"),
            CellValue::Text(value) => value.clone(),
            CellValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            CellValue::Time(value) => value.format("%H:%M:%S").to_string(),
            CellValue::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(value) => Some(*value as f64),
            CellValue::Float(value) | CellValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(*value),
            CellValue::Timestamp(value) => Some(value.date()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

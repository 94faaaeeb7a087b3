use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Result, SchemaError};

/// Keys recognized at the top level of a schema document.
pub const DOCUMENT_KEYS: &[&str] = &[
    "name",
    "output_format",
    "output_rec_cnt",
    "source",
    "seed",
    "output_file",
    "fields",
];

/// Keys recognized inside a field descriptor.
pub const FIELD_KEYS: &[&str] = &[
    "name",
    "type",
    "min_length",
    "max_length",
    "min_value",
    "max_value",
    "values",
    "format",
];

/// Data-type tags a field may declare.
pub const FIELD_TYPES: &[&str] = &[
    "address",
    "boolean",
    "cat",
    "city",
    "country",
    "currency_code",
    "currency_name",
    "date",
    "decimal",
    "double",
    "float",
    "first_name",
    "int",
    "job",
    "last_name",
    "lorem",
    "name",
    "state",
    "str",
    "street_address",
    "time",
    "timestamp",
    "zip_code",
];

/// Supported output formats.
pub const OUTPUT_FORMATS: &[&str] = &["parquet", "csv"];

/// Supported value sources.
pub const SOURCES: &[&str] = &["fake"];

/// Integer-or-string bound for `min_value`/`max_value`.
///
/// The string form carries date-like bounds; numeric types require the
/// integer form.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Int(i64),
    Text(String),
}

impl Bound {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Bound::Int(value) => Some(*value),
            Bound::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Bound::Int(_) => None,
            Bound::Text(value) => Some(value.as_str()),
        }
    }
}

/// Format of the persisted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

/// Origin of generated values. Synthetic data is the only supported source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Fake,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Fake => "fake",
        }
    }
}

/// One column descriptor from the `fields` array.
///
/// Constructed only by the parser, in document order; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: String,
    index: usize,
    min_length: Option<u32>,
    max_length: Option<u32>,
    min_value: Option<Bound>,
    max_value: Option<Bound>,
    format: Option<String>,
    values: Option<Vec<Value>>,
}

impl Field {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        kind: String,
        index: usize,
        min_length: Option<u32>,
        max_length: Option<u32>,
        min_value: Option<Bound>,
        max_value: Option<Bound>,
        format: Option<String>,
        values: Option<Vec<Value>>,
    ) -> Self {
        Self {
            name,
            kind,
            index,
            min_length,
            max_length,
            min_value,
            max_value,
            format,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared data-type tag, a member of [`FIELD_TYPES`].
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// 0-based declaration position, for diagnostics only.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn min_length(&self) -> Option<u32> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    pub fn min_value(&self) -> Option<&Bound> {
        self.min_value.as_ref()
    }

    pub fn max_value(&self) -> Option<&Bound> {
        self.max_value.as_ref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn values(&self) -> Option<&[Value]> {
        self.values.as_deref()
    }
}

/// Generation-run metadata from the document's named properties.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    name: String,
    format: OutputFormat,
    rows: u64,
    source: Source,
    seed: i64,
    output_file: String,
}

impl OutputSpec {
    pub(crate) fn new(
        name: String,
        format: OutputFormat,
        rows: u64,
        source: Source,
        seed: i64,
        output_file: String,
    ) -> Self {
        Self {
            name,
            format,
            rows,
            source,
            seed,
            output_file,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Number of rows to generate.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Deterministic generation seed.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Local path or `s3://` URI of the artifact to write.
    pub fn output_file(&self) -> &str {
        &self.output_file
    }
}

/// Root configuration object: run metadata plus the ordered field list.
///
/// Field order is declaration order; no two fields share a name.
#[derive(Debug, Clone)]
pub struct Schema {
    names: OutputSpec,
    fields: Vec<Field>,
    field_map: HashMap<String, usize>,
}

impl Schema {
    pub(crate) fn new(names: OutputSpec, fields: Vec<Field>) -> Result<Self> {
        let mut field_map = HashMap::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if field_map.insert(field.name().to_string(), position).is_some() {
                return Err(SchemaError::Parse(format!(
                    "duplicate record field name '{}'",
                    field.name()
                )));
            }
        }
        Ok(Self {
            names,
            fields,
            field_map,
        })
    }

    /// Run metadata parsed from the document's named properties.
    pub fn names(&self) -> &OutputSpec {
        &self.names
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look a field up by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_map
            .get(name)
            .and_then(|position| self.fields.get(*position))
    }
}

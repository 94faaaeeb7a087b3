use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::schema::{
    Bound, DOCUMENT_KEYS, FIELD_KEYS, FIELD_TYPES, Field, OUTPUT_FORMATS, OutputFormat,
    OutputSpec, SOURCES, Schema, Source,
};

/// Load and validate a schema document from `path`.
pub fn parse(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SchemaError::FileNotFound(path.to_path_buf()),
        _ => SchemaError::Parse(format!("cannot read '{}': {err}", path.display())),
    })?;
    let document: Value = serde_json::from_str(&contents).map_err(|err| {
        SchemaError::Parse(format!("error while parsing input schema: {err}"))
    })?;
    make_config_object(&document)
}

/// Build a [`Schema`] from a parsed JSON document.
pub fn make_config_object(document: &Value) -> Result<Schema> {
    let doc = document.as_object().ok_or_else(|| {
        SchemaError::Parse("schema document must be a JSON object".to_string())
    })?;
    check_permitted(doc.keys().map(String::as_str), DOCUMENT_KEYS, "keys")?;

    let names = make_output_spec(doc)?;

    let fields_data = match doc.get("fields") {
        Some(Value::Array(entries)) => entries.as_slice(),
        Some(_) => {
            return Err(SchemaError::Parse(
                "the fields property must be a list".to_string(),
            ));
        }
        None => {
            return Err(SchemaError::Parse(
                "schema must have a non-empty fields".to_string(),
            ));
        }
    };

    let mut fields = Vec::with_capacity(fields_data.len());
    for (index, entry) in fields_data.iter().enumerate() {
        fields.push(make_field(index, entry)?);
    }

    Schema::new(names, fields)
}

fn make_output_spec(doc: &Map<String, Value>) -> Result<OutputSpec> {
    let name = require_string("name", doc.get("name"))?;

    let format_tag = require_string("output_format", doc.get("output_format"))?;
    let format = parse_output_format(&format_tag)?;

    let rows = require_int("output_rec_cnt", doc.get("output_rec_cnt"))?;
    if rows < 0 {
        return Err(SchemaError::Parse(
            "the output_rec_cnt property must be a positive integer".to_string(),
        ));
    }

    let source_tag = require_string("source", doc.get("source"))?;
    let source = parse_source(&source_tag)?;

    let seed = require_int("seed", doc.get("seed"))?;
    let output_file = require_string("output_file", doc.get("output_file"))?;

    Ok(OutputSpec::new(
        name,
        format,
        rows as u64,
        source,
        seed,
        output_file,
    ))
}

fn make_field(index: usize, entry: &Value) -> Result<Field> {
    let data = entry.as_object().ok_or_else(|| {
        SchemaError::Parse(format!("field {index} must be a JSON object"))
    })?;
    check_permitted(data.keys().map(String::as_str), FIELD_KEYS, "keys")?;

    let name = require_string("name", data.get("name"))?;
    let kind = require_string("type", data.get("type"))?;
    check_permitted(std::iter::once(kind.as_str()), FIELD_TYPES, "types")?;

    let min_length = optional_length("min_length", data.get("min_length"))?;
    let max_length = optional_length("max_length", data.get("max_length"))?;
    let min_value = optional_bound("min_value", data.get("min_value"))?;
    let max_value = optional_bound("max_value", data.get("max_value"))?;
    let format = optional_string("format", data.get("format"))?;
    let values = optional_values("values", data.get("values"))?;

    Ok(Field::new(
        name, kind, index, min_length, max_length, min_value, max_value, format, values,
    ))
}

fn parse_output_format(tag: &str) -> Result<OutputFormat> {
    check_permitted(std::iter::once(tag), OUTPUT_FORMATS, "values")?;
    Ok(match tag {
        "parquet" => OutputFormat::Parquet,
        _ => OutputFormat::Csv,
    })
}

fn parse_source(tag: &str) -> Result<Source> {
    check_permitted(std::iter::once(tag), SOURCES, "values")?;
    Ok(Source::Fake)
}

/// Fail when any candidate is missing from the permitted set.
///
/// The one validation primitive behind unknown-key checks and
/// out-of-enumeration value checks alike.
fn check_permitted<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    permitted: &[&str],
    what: &str,
) -> Result<()> {
    let invalid: Vec<&str> = candidates
        .into_iter()
        .filter(|candidate| !permitted.contains(candidate))
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Parse(format!(
            "invalid {what} {invalid:?} found; valid {what} are {permitted:?}"
        )))
    }
}

fn require_string(key: &str, value: Option<&Value>) -> Result<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => Err(SchemaError::Parse(format!(
            "schema must have a non-empty {key}"
        ))),
        Some(_) => Err(SchemaError::Parse(format!(
            "the {key} property must be a string"
        ))),
    }
}

fn require_int(key: &str, value: Option<&Value>) -> Result<i64> {
    match value {
        Some(Value::Null) | None => Err(SchemaError::Parse(format!(
            "schema must have a non-empty {key}"
        ))),
        Some(value) => match value.as_i64() {
            Some(0) => Err(SchemaError::Parse(format!(
                "schema must have a non-empty {key}"
            ))),
            Some(number) => Ok(number),
            None => Err(SchemaError::Parse(format!(
                "the {key} property must be an integer"
            ))),
        },
    }
}

fn optional_length(key: &str, value: Option<&Value>) -> Result<Option<u32>> {
    match value {
        Some(Value::Null) | None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|number| u32::try_from(number).ok())
            .map(Some)
            .ok_or_else(|| {
                SchemaError::Parse(format!(
                    "the {key} property must be a non-negative integer"
                ))
            }),
    }
}

fn optional_bound(key: &str, value: Option<&Value>) -> Result<Option<Bound>> {
    match value {
        Some(Value::Null) | None => Ok(None),
        Some(Value::String(text)) => Ok(Some(Bound::Text(text.clone()))),
        Some(value) => match value.as_i64() {
            Some(number) => Ok(Some(Bound::Int(number))),
            None => Err(SchemaError::Parse(format!(
                "the {key} property must be an integer or a string"
            ))),
        },
    }
}

fn optional_string(key: &str, value: Option<&Value>) -> Result<Option<String>> {
    match value {
        Some(Value::Null) | None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(SchemaError::Parse(format!(
            "the {key} property must be a string"
        ))),
    }
}

fn optional_values(key: &str, value: Option<&Value>) -> Result<Option<Vec<Value>>> {
    match value {
        Some(Value::Null) | None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.clone())),
        Some(_) => Err(SchemaError::Parse(format!(
            "the {key} property must be a list"
        ))),
    }
}

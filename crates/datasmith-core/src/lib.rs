//! Core contracts for datasmith.
//!
//! This crate defines the validated, immutable schema model and the JSON
//! config parser shared by the generation and output crates.

pub mod error;
pub mod parse;
pub mod schema;

pub use error::{Result, SchemaError};
pub use parse::{make_config_object, parse};
pub use schema::{
    Bound, DOCUMENT_KEYS, FIELD_KEYS, FIELD_TYPES, Field, OUTPUT_FORMATS, OutputFormat,
    OutputSpec, SOURCES, Schema, Source,
};

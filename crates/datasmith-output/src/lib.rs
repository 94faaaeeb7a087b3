//! Output pipeline for datasmith.
//!
//! Encodes an in-memory table as delimited text or Parquet and delivers
//! the artifact to a local path or an S3 destination in a single shot.

pub mod destination;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod writers;

pub use destination::Destination;
pub use error::OutputError;
pub use pipeline::{WriteOptions, persist};
pub use store::{DEFAULT_PROFILE, deliver};
pub use writers::csv::{CsvOptions, encode_csv};
pub use writers::parquet::{ParquetOptions, encode_parquet};

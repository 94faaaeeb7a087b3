use tracing::info;

use datasmith_core::OutputFormat;
use datasmith_generate::Table;

use crate::destination::Destination;
use crate::error::OutputError;
use crate::store::{DEFAULT_PROFILE, deliver};
use crate::writers::csv::{CsvOptions, encode_csv};
use crate::writers::parquet::{ParquetOptions, encode_parquet};

/// Options for both writers plus the remote-credential profile name.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub csv: CsvOptions,
    pub parquet: ParquetOptions,
    pub profile: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            parquet: ParquetOptions::default(),
            profile: DEFAULT_PROFILE.to_string(),
        }
    }
}

/// Encode the table in `format` and deliver it to `destination`.
///
/// The table is encoded fully in memory before anything touches the
/// destination, so a failed run leaves no partial artifact behind.
pub async fn persist(
    table: &Table,
    format: OutputFormat,
    destination: &str,
    options: &WriteOptions,
) -> Result<u64, OutputError> {
    let target = Destination::parse(destination)?;

    let bytes = match format {
        OutputFormat::Csv => {
            encode_csv(table, &options.csv).map_err(|err| OutputError::new(destination, err))?
        }
        OutputFormat::Parquet => encode_parquet(table, &options.parquet)
            .map_err(|err| OutputError::new(destination, err))?,
    };

    let written = deliver(&target, bytes, &options.profile).await?;
    info!(
        destination = %target.display_name(),
        format = format.as_str(),
        bytes = written,
        "table persisted"
    );
    Ok(written)
}

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{Level, info};

use datasmith_core::{Schema, SchemaError};
use datasmith_generate::{GenerateError, GenerationEngine};
use datasmith_output::{OutputError, WriteOptions, persist};

#[derive(Debug, Error)]
enum CliError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Action {
    /// Parse the schema, generate the table, and persist it.
    Execute,
    /// Parse the schema and stop.
    Validate,
}

#[derive(Parser, Debug)]
#[command(name = "datasmith", version, about = "Schema-driven synthetic data generator")]
struct Cli {
    /// Action to run against the schema document.
    #[arg(value_enum)]
    action: Action,
    /// Path to the input JSON schema document.
    config: PathBuf,
    /// Verbose logging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.action {
        Action::Validate => run_validate(&cli.config),
        Action::Execute => run_execute(&cli.config).await,
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn load_schema(path: &Path) -> Result<Schema, CliError> {
    let timer = Instant::now();
    let schema = datasmith_core::parse(path)?;
    info!(
        config = %path.display(),
        fields = schema.fields().len(),
        duration_ms = timer.elapsed().as_millis() as u64,
        "schema parsed"
    );
    Ok(schema)
}

fn run_validate(path: &Path) -> Result<(), CliError> {
    let schema = load_schema(path)?;
    info!(name = %schema.names().name(), "schema is valid");
    Ok(())
}

async fn run_execute(path: &Path) -> Result<(), CliError> {
    let schema = load_schema(path)?;

    let timer = Instant::now();
    let engine = GenerationEngine::new();
    let table = engine.run(&schema)?;
    info!(
        rows = table.rows(),
        columns = table.columns.len(),
        duration_ms = timer.elapsed().as_millis() as u64,
        "table generated"
    );

    let timer = Instant::now();
    let names = schema.names();
    let written = persist(
        &table,
        names.format(),
        names.output_file(),
        &WriteOptions::default(),
    )
    .await?;
    info!(
        destination = %names.output_file(),
        bytes = written,
        duration_ms = timer.elapsed().as_millis() as u64,
        "table persisted"
    );

    Ok(())
}

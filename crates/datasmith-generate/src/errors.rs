use thiserror::Error;

/// Errors emitted while generating columns.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A constraint on a supported field type is malformed.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),
    /// Column generation failed for the named type tag.
    #[error("cannot generate values for type '{tag}'")]
    Column {
        tag: String,
        #[source]
        source: Box<GenerateError>,
    },
}

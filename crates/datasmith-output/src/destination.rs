use std::path::PathBuf;

use crate::error::OutputError;

/// Where an artifact is written. The URI scheme picks the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Local filesystem path.
    Local(PathBuf),
    /// S3 object.
    S3 { bucket: String, key: String },
}

impl Destination {
    /// Parse a destination string: `s3://bucket/key` selects S3, anything
    /// else is a local path.
    pub fn parse(uri: &str) -> Result<Self, OutputError> {
        if let Some(rest) = uri.strip_prefix("s3://") {
            let (bucket, key) = rest.split_once('/').ok_or_else(|| {
                OutputError::new(uri, "S3 destination must be in the form s3://bucket/key")
            })?;
            if bucket.is_empty() || key.is_empty() {
                return Err(OutputError::new(
                    uri,
                    "S3 destination must name both a bucket and a key",
                ));
            }
            Ok(Destination::S3 {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
        } else {
            Ok(Destination::Local(PathBuf::from(uri)))
        }
    }

    /// Display name for logging and error messages.
    pub fn display_name(&self) -> String {
        match self {
            Destination::Local(path) => path.display().to_string(),
            Destination::S3 { bucket, key } => format!("s3://{bucket}/{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_paths_parse_as_local() {
        let destination = Destination::parse("/data/out.csv").expect("local path");
        assert_eq!(destination, Destination::Local(PathBuf::from("/data/out.csv")));
    }

    #[test]
    fn relative_paths_parse_as_local() {
        let destination = Destination::parse("out.parquet").expect("relative path");
        assert!(matches!(destination, Destination::Local(_)));
    }

    #[test]
    fn s3_uris_split_into_bucket_and_key() {
        let destination = Destination::parse("s3://my-bucket/data/out.parquet").expect("s3 uri");
        assert_eq!(
            destination,
            Destination::S3 {
                bucket: "my-bucket".to_string(),
                key: "data/out.parquet".to_string(),
            }
        );
        assert_eq!(destination.display_name(), "s3://my-bucket/data/out.parquet");
    }

    #[test]
    fn s3_uri_without_a_key_is_rejected() {
        assert!(Destination::parse("s3://my-bucket").is_err());
        assert!(Destination::parse("s3://my-bucket/").is_err());
        assert!(Destination::parse("s3:///key").is_err());
    }
}

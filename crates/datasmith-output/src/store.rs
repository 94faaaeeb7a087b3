use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::destination::Destination;
use crate::error::OutputError;

/// Credential profile used for remote destinations when none is given.
pub const DEFAULT_PROFILE: &str = "default";

/// Write `bytes` to `destination` in a single shot and return the size.
///
/// Local writes go through one filesystem call; S3 writes go through one
/// `PutObject` with credentials resolved from the named profile. Either
/// way there is no partially delivered artifact to clean up on failure.
pub async fn deliver(
    destination: &Destination,
    bytes: Vec<u8>,
    profile: &str,
) -> Result<u64, OutputError> {
    let size = bytes.len() as u64;
    match destination {
        Destination::Local(path) => {
            std::fs::write(path, &bytes)
                .map_err(|err| OutputError::new(destination.display_name(), err))?;
        }
        Destination::S3 { bucket, key } => {
            let config = aws_config::defaults(BehaviorVersion::latest())
                .profile_name(profile)
                .load()
                .await;
            let client = aws_sdk_s3::Client::new(&config);
            debug!(bucket = %bucket, key = %key, profile = %profile, "uploading to s3");
            client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(ByteStream::from(bytes))
                .send()
                .await
                .map_err(|err| OutputError::new(destination.display_name(), err))?;
        }
    }
    Ok(size)
}

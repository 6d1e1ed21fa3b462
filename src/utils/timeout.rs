//! Deadline wrapper around slow upstream calls.

use std::future::Future;
use std::time::Duration;

use crate::BotError;

/// Deadline for the image generation call; generation is the costlier step.
pub const IMAGE_GENERATION_TIMEOUT_MS: u64 = 60_000;
/// Deadline for downloading the generated image bytes.
pub const IMAGE_DOWNLOAD_TIMEOUT_MS: u64 = 25_000;

/// Race `future` against a millisecond deadline.
///
/// Resolves with the operation's result if it finishes first, otherwise
/// with [`BotError::Timeout`]. The losing future is dropped; work already
/// submitted to the upstream provider continues server-side and its result
/// is discarded.
pub async fn with_timeout<F, T>(future: F, timeout_ms: u64) -> Result<T, BotError>
where
    F: Future<Output = Result<T, BotError>>,
{
    match tokio::time::timeout(Duration::from_millis(timeout_ms), future).await {
        Ok(result) => result,
        Err(_) => Err(BotError::Timeout(timeout_ms)),
    }
}

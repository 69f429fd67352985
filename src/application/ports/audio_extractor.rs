use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::TimeRange;

/// External transcoder that writes a mono 16-bit PCM WAV covering `range` of
/// the source's audio track to `output_path`.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract(
        &self,
        video_path: &Path,
        range: &TimeRange,
        output_path: &Path,
    ) -> Result<(), AudioExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractorError {
    #[error("transcoder not found: {0}")]
    ToolMissing(String),
    #[error("transcoder exited with {code:?}: {stderr}")]
    ProcessFailed { code: Option<i32>, stderr: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

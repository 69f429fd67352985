use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    AudioExtractor, AudioExtractorError, ReferenceStore, ReferenceStoreError,
};
use crate::domain::{
    AudioReferenceRecord, ExtractionRequest, RawTime, ReferenceFilename, ReferenceId,
    TimeParseError,
};

/// Upper bound on transcoder diagnostics surfaced to callers.
const MAX_DIAGNOSTIC_CHARS: usize = 200;

pub struct SegmentExtractionService<E, S>
where
    E: AudioExtractor + ?Sized,
    S: ReferenceStore + ?Sized,
{
    extractor: Arc<E>,
    store: Arc<S>,
}

impl<E, S> SegmentExtractionService<E, S>
where
    E: AudioExtractor + ?Sized,
    S: ReferenceStore + ?Sized,
{
    pub fn new(extractor: Arc<E>, store: Arc<S>) -> Self {
        Self { extractor, store }
    }

    /// Cuts `[start, end)` of the video's audio into a fresh reference file.
    /// Every call produces a new file, and a failed run leaves no file behind.
    #[tracing::instrument(skip(self, video_path), fields(video = %video_path.display()))]
    pub async fn extract_segment(
        &self,
        video_path: &Path,
        start: &RawTime,
        end: &RawTime,
    ) -> Result<AudioReferenceRecord, ExtractionError> {
        if !is_existing_file(video_path).await {
            tracing::error!("Video file not found for extraction");
            return Err(ExtractionError::FileNotFound(video_path.to_path_buf()));
        }

        let request = ExtractionRequest::parse(video_path, start, end).map_err(|e| {
            tracing::warn!(error = %e, "Rejected extraction time range");
            ExtractionError::Time(e)
        })?;

        let id = ReferenceId::new();
        let filename = ReferenceFilename::segment(&id);
        let output_path = self.store.path_for(&filename)?;

        tracing::debug!(
            start = request.range.start(),
            duration = request.range.duration(),
            output = %output_path.display(),
            "Starting segment extraction"
        );

        if let Err(e) = self
            .extractor
            .extract(&request.video_path, &request.range, &output_path)
            .await
        {
            self.discard(&filename).await;
            return Err(e.into());
        }

        if !self.store.exists(&filename).await? {
            return Err(ExtractionError::Storage(
                ReferenceStoreError::VerificationFailed(format!(
                    "Transcoder reported success but produced no file: {}",
                    filename
                )),
            ));
        }

        tracing::info!(reference_id = %id, filename = %filename, "Audio segment extracted");

        Ok(AudioReferenceRecord::segment(id, filename, output_path))
    }

    async fn discard(&self, filename: &ReferenceFilename) {
        match self.store.exists(filename).await {
            Ok(true) => {
                if let Err(e) = self.store.delete(filename).await {
                    tracing::error!(error = %e, filename = %filename, "Failed to remove partial segment");
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Failed to check for partial segment");
            }
        }
    }
}

async fn is_existing_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Video file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("{0}")]
    Time(#[from] TimeParseError),
    #[error("ffmpeg not found. Please install ffmpeg: {0}")]
    ToolMissing(String),
    #[error("ffmpeg failed: {0}...")]
    ProcessFailure(String),
    #[error("storage: {0}")]
    Storage(#[from] ReferenceStoreError),
}

impl From<AudioExtractorError> for ExtractionError {
    fn from(error: AudioExtractorError) -> Self {
        match error {
            AudioExtractorError::ToolMissing(detail) => Self::ToolMissing(detail),
            AudioExtractorError::ProcessFailed { stderr, .. } => {
                Self::ProcessFailure(stderr.chars().take(MAX_DIAGNOSTIC_CHARS).collect())
            }
            AudioExtractorError::Io(e) => Self::ProcessFailure(e.to_string()),
        }
    }
}

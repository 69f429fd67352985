use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractor, AudioExtractorError};
use crate::domain::TimeRange;

pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
const TARGET_SAMPLE_RATE: u32 = 44_100;
const TARGET_CHANNELS: u32 = 1;
const TARGET_CODEC: &str = "pcm_s16le";

/// Runs ffmpeg as a child process and waits for it. No timeout is applied.
pub struct FfmpegAudioExtractor {
    binary: String,
}

impl FfmpegAudioExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, video_path: &Path, range: &TimeRange, output_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        // -ss before -i seeks on the input, which is much faster on long videos.
        cmd.arg("-y")
            .arg("-ss")
            .arg(range.start().to_string())
            .arg("-i")
            .arg(video_path)
            .arg("-t")
            .arg(range.duration().to_string())
            .arg("-vn")
            .arg("-acodec")
            .arg(TARGET_CODEC)
            .arg("-ar")
            .arg(TARGET_SAMPLE_RATE.to_string())
            .arg("-ac")
            .arg(TARGET_CHANNELS.to_string())
            .arg(output_path)
            .stdin(Stdio::null());
        cmd
    }

    fn spawn_error(&self, error: io::Error) -> AudioExtractorError {
        if error.kind() == io::ErrorKind::NotFound {
            tracing::error!(binary = %self.binary, "ffmpeg command not found");
            AudioExtractorError::ToolMissing(self.binary.clone())
        } else {
            AudioExtractorError::Io(error)
        }
    }
}

impl Default for FfmpegAudioExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY)
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract(
        &self,
        video_path: &Path,
        range: &TimeRange,
        output_path: &Path,
    ) -> Result<(), AudioExtractorError> {
        let output = self
            .command(video_path, range, output_path)
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::error!(
                code = ?output.status.code(),
                stderr = %stderr,
                "ffmpeg command failed"
            );
            return Err(AudioExtractorError::ProcessFailed {
                code: output.status.code(),
                stderr,
            });
        }

        tracing::debug!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            stderr = %stderr,
            "ffmpeg finished"
        );
        Ok(())
    }
}

/// Start-up probe: runs `<binary> -version`.
pub fn check_ffmpeg_binary(binary: &str) -> Result<(), AudioExtractorError> {
    let output = std::process::Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AudioExtractorError::ToolMissing(binary.to_string()),
            _ => AudioExtractorError::Io(e),
        })?;

    if !output.status.success() {
        return Err(AudioExtractorError::ProcessFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

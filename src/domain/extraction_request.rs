use std::path::PathBuf;

use super::{RawTime, TimeParseError, TimeRange};

/// Segment extraction input once both endpoints share the same unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub video_path: PathBuf,
    pub range: TimeRange,
}

impl ExtractionRequest {
    pub fn parse(
        video_path: impl Into<PathBuf>,
        start: &RawTime,
        end: &RawTime,
    ) -> Result<Self, TimeParseError> {
        Ok(Self {
            video_path: video_path.into(),
            range: TimeRange::parse(start, end)?,
        })
    }
}

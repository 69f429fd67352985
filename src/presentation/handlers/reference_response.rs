use serde::Serialize;

use crate::domain::AudioReferenceRecord;

/// Success envelope shared by every reference and segment endpoint.
#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub success: bool,
    pub filepath: String,
    pub filename: String,
    pub reference_text: String,
    pub is_english: bool,
    pub language: String,
}

impl From<AudioReferenceRecord> for ReferenceResponse {
    fn from(record: AudioReferenceRecord) -> Self {
        Self {
            success: true,
            filepath: record.filepath.display().to_string(),
            filename: record.filename.to_string(),
            is_english: record.language.is_english(),
            language: record.language.as_str().to_string(),
            reference_text: record.transcript_text,
        }
    }
}

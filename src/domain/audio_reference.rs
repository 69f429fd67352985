use std::path::PathBuf;

use bytes::Bytes;

use super::{ReferenceFilename, ReferenceId};

/// Entry point a reference arrived through. Used to tag synthesized filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    Upload,
    Base64,
    Form,
    Override,
}

impl ReferenceSource {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Base64 => "b64",
            Self::Form => "form",
            Self::Override => "override",
        }
    }
}

/// Canonical request produced by the input normalizer, independent of transport shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioReferenceRequest {
    pub payload: Bytes,
    pub transcript_text: String,
    pub suggested_filename: Option<String>,
    pub source: ReferenceSource,
}

impl AudioReferenceRequest {
    pub fn new(payload: Bytes, transcript_text: String, source: ReferenceSource) -> Self {
        Self {
            payload,
            transcript_text,
            suggested_filename: None,
            source,
        }
    }

    pub fn with_suggested_filename(mut self, filename: impl Into<String>) -> Self {
        self.suggested_filename = Some(filename.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageClassification {
    English,
    NonEnglish,
    Unknown,
}

impl LanguageClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::NonEnglish => "Non-English",
            Self::Unknown => "Unknown",
        }
    }

    /// Only a positive non-English verdict reports false; unclassified transcripts
    /// keep the English default.
    pub fn is_english(&self) -> bool {
        !matches!(self, Self::NonEnglish)
    }
}

/// A reference audio file that exists on disk. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioReferenceRecord {
    pub id: ReferenceId,
    pub filename: ReferenceFilename,
    pub filepath: PathBuf,
    pub transcript_text: String,
    pub language: LanguageClassification,
}

impl AudioReferenceRecord {
    pub fn new(
        id: ReferenceId,
        filename: ReferenceFilename,
        filepath: PathBuf,
        transcript_text: String,
        language: LanguageClassification,
    ) -> Self {
        Self {
            id,
            filename,
            filepath,
            transcript_text,
            language,
        }
    }

    /// Segments never carry a transcript, so they are never classified.
    pub fn segment(id: ReferenceId, filename: ReferenceFilename, filepath: PathBuf) -> Self {
        Self::new(
            id,
            filename,
            filepath,
            String::new(),
            LanguageClassification::Unknown,
        )
    }
}

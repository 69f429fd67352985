use std::sync::LazyLock;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use regex::Regex;
use serde_json::Value;

use crate::domain::{AudioReferenceRequest, ReferenceSource};
use crate::infrastructure::observability::preview_payload;

pub const AUDIO_DATA_FIELD: &str = "audio_data";
pub const REFERENCE_TEXT_FIELD: &str = "reference_text";
const MISSING_AUDIO_PART: &str = "Missing audio_data file part";

/// Standard alphabet, accepting non-zero trailing bits.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

static BASE64_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap());

/// One part of a multipart or urlencoded form. `filename` is set only for file parts.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub data: Bytes,
}

impl FormPart {
    pub fn file(name: impl Into<String>, filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            filename: Some(filename.into()),
            data,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            data: Bytes::from(value.into()),
        }
    }

    pub fn is_file(&self) -> bool {
        self.filename.is_some()
    }

    fn text_value(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

#[derive(Debug, Clone)]
pub enum LegacyBody {
    Raw(Bytes),
    Form(Vec<FormPart>),
}

/// Inbound reference submission, tagged by the entry point it arrived through.
#[derive(Debug, Clone)]
pub enum ReferencePayload {
    Base64 { body: Bytes },
    Multipart { parts: Vec<FormPart> },
    Legacy { content_type: String, body: LegacyBody },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    #[error("{0}")]
    MalformedBody(String),
    #[error("{0}")]
    MissingField(String),
    #[error("{0}")]
    InvalidEncoding(String),
}

/// Reduces any of the three transport shapes to one canonical request. Nothing
/// here touches the filesystem.
pub fn normalize(payload: ReferencePayload) -> Result<AudioReferenceRequest, NormalizationError> {
    match payload {
        ReferencePayload::Base64 { body } => normalize_json(&body, ReferenceSource::Base64),
        ReferencePayload::Multipart { parts } => normalize_upload(&parts),
        ReferencePayload::Legacy { content_type, body } => normalize_legacy(&content_type, body),
    }
}

fn normalize_json(
    body: &[u8],
    source: ReferenceSource,
) -> Result<AudioReferenceRequest, NormalizationError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Reference body is not valid JSON");
        NormalizationError::MalformedBody("Invalid JSON data received".to_string())
    })?;

    let Value::Object(fields) = value else {
        return Err(NormalizationError::MalformedBody(
            "Invalid JSON data received: expected an object".to_string(),
        ));
    };

    let audio_data = fields
        .get(AUDIO_DATA_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            tracing::warn!("No audio_data string found in request JSON");
            NormalizationError::MissingField(
                "Missing or invalid audio_data (must be a base64 string)".to_string(),
            )
        })?;

    let transcript = fields
        .get(REFERENCE_TEXT_FIELD)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    decode_inline(audio_data, transcript, source)
}

fn decode_inline(
    encoded: &str,
    transcript: String,
    source: ReferenceSource,
) -> Result<AudioReferenceRequest, NormalizationError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(NormalizationError::MissingField(
            "Missing or invalid audio_data (must be a base64 string)".to_string(),
        ));
    }

    if !BASE64_SHAPE.is_match(encoded) {
        tracing::warn!(
            sample = %preview_payload(encoded),
            "Audio data does not appear to be valid base64"
        );
        return Err(NormalizationError::InvalidEncoding(
            "Invalid base64 format in audio_data".to_string(),
        ));
    }

    let decoded = LENIENT_STANDARD.decode(encoded).map_err(|e| {
        tracing::warn!(error = %e, sample = %preview_payload(encoded), "Base64 decoding failed");
        NormalizationError::InvalidEncoding(format!("Invalid base64 data: {}", e))
    })?;

    if decoded.is_empty() {
        return Err(NormalizationError::InvalidEncoding(
            "Invalid base64 data: decoded payload is empty".to_string(),
        ));
    }

    tracing::debug!(bytes = decoded.len(), source = source.tag(), "Decoded inline audio");

    Ok(AudioReferenceRequest::new(
        Bytes::from(decoded),
        transcript,
        source,
    ))
}

fn normalize_upload(parts: &[FormPart]) -> Result<AudioReferenceRequest, NormalizationError> {
    let file = parts.iter().find(|p| p.is_file()).ok_or_else(|| {
        tracing::warn!("Upload request missing file part");
        NormalizationError::MissingField("No file part in the request".to_string())
    })?;

    let filename = file.filename.as_deref().unwrap_or_default();
    if filename.is_empty() {
        tracing::warn!("Upload request received with no selected file");
        return Err(NormalizationError::MissingField(
            "No selected file".to_string(),
        ));
    }

    if file.data.is_empty() {
        return Err(NormalizationError::MissingField(format!(
            "Uploaded file is empty: {}",
            filename
        )));
    }

    Ok(AudioReferenceRequest::new(
        file.data.clone(),
        text_field(parts, REFERENCE_TEXT_FIELD),
        ReferenceSource::Upload,
    )
    .with_suggested_filename(filename))
}

fn normalize_legacy(
    content_type: &str,
    body: LegacyBody,
) -> Result<AudioReferenceRequest, NormalizationError> {
    let is_json = content_type
        .to_ascii_lowercase()
        .contains("application/json");

    match (is_json, body) {
        (true, LegacyBody::Raw(raw)) => normalize_json(&raw, ReferenceSource::Base64),
        (false, LegacyBody::Form(parts)) => normalize_recorded_form(&parts),
        (false, LegacyBody::Raw(_)) => {
            tracing::warn!(
                content_type = %content_type,
                "Recorded reference sent without a form body"
            );
            Err(NormalizationError::MissingField(MISSING_AUDIO_PART.to_string()))
        }
        (true, LegacyBody::Form(_)) => Err(NormalizationError::MalformedBody(format!(
            "Form body sent with JSON content type: {}",
            content_type
        ))),
    }
}

/// Recorders disagree on whether `audio_data` is a file part or an inline
/// base64 string, so both are accepted.
fn normalize_recorded_form(
    parts: &[FormPart],
) -> Result<AudioReferenceRequest, NormalizationError> {
    let transcript = text_field(parts, REFERENCE_TEXT_FIELD);

    if let Some(file) = parts
        .iter()
        .find(|p| p.name == AUDIO_DATA_FIELD && p.is_file())
    {
        if file.data.is_empty() {
            return Err(NormalizationError::MissingField(
                "Empty audio_data file part".to_string(),
            ));
        }
        return Ok(AudioReferenceRequest::new(
            file.data.clone(),
            transcript,
            ReferenceSource::Form,
        ));
    }

    if let Some(field) = parts
        .iter()
        .find(|p| p.name == AUDIO_DATA_FIELD && !p.is_file())
    {
        tracing::warn!("audio_data sent as a form field, treating it as inline base64");
        return decode_inline(&field.text_value(), transcript, ReferenceSource::Override);
    }

    tracing::warn!("Recorded reference request has no audio_data");
    Err(NormalizationError::MissingField(MISSING_AUDIO_PART.to_string()))
}

fn text_field(parts: &[FormPart], name: &str) -> String {
    parts
        .iter()
        .find(|p| p.name == name && !p.is_file())
        .map(FormPart::text_value)
        .unwrap_or_default()
}

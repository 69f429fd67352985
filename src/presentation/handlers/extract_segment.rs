use std::path::Path;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{AudioExtractor, LanguageClassifier, ReferenceStore};
use crate::domain::RawTime;
use crate::presentation::handlers::{ApiError, ReferenceResponse};
use crate::presentation::state::AppState;

/// Times may be numbers (seconds) or strings (`H:MM:SS.ms`, `MM:SS.ms`, seconds).
#[derive(Debug, Deserialize)]
pub struct ExtractSegmentRequest {
    pub video_path: Option<String>,
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
}

#[tracing::instrument(skip(state, body))]
pub async fn extract_segment_handler<S, C, E>(
    State(state): State<AppState<S, C, E>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    let request: ExtractSegmentRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON data received: {}", e)))?;

    let (Some(video_path), Some(start), Some(end)) = (
        request.video_path.filter(|p| !p.is_empty()),
        request.start_time,
        request.end_time,
    ) else {
        return Err(ApiError::bad_request(
            "Missing required parameters (video_path, start_time, end_time)",
        ));
    };

    let record = state
        .extraction_service
        .extract_segment(
            Path::new(&video_path),
            &RawTime::from(start),
            &RawTime::from(end),
        )
        .await?;

    Ok(Json(ReferenceResponse::from(record)))
}

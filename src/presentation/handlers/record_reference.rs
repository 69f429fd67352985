use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::application::ports::{AudioExtractor, LanguageClassifier, ReferenceStore};
use crate::application::services::{FormPart, LegacyBody, ReferencePayload};
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

use super::upload_reference::{collect_parts, persist_payload};

/// Recorder endpoint. JSON bodies take the base64 path; form bodies may carry
/// `audio_data` either as a file part or as an inline base64 field.
#[tracing::instrument(skip(state, request))]
pub async fn record_reference_handler<S, C, E>(
    State(state): State<AppState<S, C, E>>,
    request: Request,
) -> Result<impl IntoResponse, ApiError>
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    tracing::debug!(content_type = %content_type, "Recorded reference received");

    let body = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        LegacyBody::Form(collect_parts(multipart).await?)
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        LegacyBody::Form(
            fields
                .into_iter()
                .map(|(name, value)| FormPart::text(name, value))
                .collect(),
        )
    } else {
        let raw = Bytes::from_request(request, &())
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        LegacyBody::Raw(raw)
    };

    persist_payload(
        &state,
        ReferencePayload::Legacy {
            content_type,
            body,
        },
    )
    .await
}

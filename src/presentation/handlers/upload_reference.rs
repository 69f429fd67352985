use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;

use crate::application::ports::{AudioExtractor, LanguageClassifier, ReferenceStore};
use crate::application::services::{FormPart, ReferencePayload, normalize};
use crate::presentation::handlers::{ApiError, ReferenceResponse};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn process_base64_reference_handler<S, C, E>(
    State(state): State<AppState<S, C, E>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    persist_payload(&state, ReferencePayload::Base64 { body }).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_reference_handler<S, C, E>(
    State(state): State<AppState<S, C, E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    let multipart = multipart.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    let parts = collect_parts(multipart).await?;

    persist_payload(&state, ReferencePayload::Multipart { parts }).await
}

pub(super) async fn persist_payload<S, C, E>(
    state: &AppState<S, C, E>,
    payload: ReferencePayload,
) -> Result<Json<ReferenceResponse>, ApiError>
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    let request = normalize(payload)?;
    let record = state.persistence_service.persist(request).await?;

    Ok(Json(ReferenceResponse::from(record)))
}

pub(super) async fn collect_parts(mut multipart: Multipart) -> Result<Vec<FormPart>, ApiError> {
    let mut parts = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            ApiError::bad_request(format!("Failed to read multipart field {}: {}", name, e))
        })?;

        tracing::debug!(
            field = %name,
            filename = filename.as_deref().unwrap_or(""),
            bytes = data.len(),
            "Received form part"
        );

        parts.push(FormPart {
            name,
            filename,
            data,
        });
    }

    Ok(parts)
}

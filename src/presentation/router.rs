use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, LanguageClassifier, ReferenceStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_segment_handler, health_handler, process_base64_reference_handler,
    record_reference_handler, upload_reference_handler,
};
use crate::presentation::state::AppState;

pub const API_PREFIX: &str = "/api/narration";

pub fn create_router<S, C, E>(state: AppState<S, C, E>) -> Router
where
    S: ReferenceStore + 'static,
    C: LanguageClassifier + 'static,
    E: AudioExtractor + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // base64 payloads are a third larger than the audio they carry
    let body_limit = DefaultBodyLimit::max(state.settings.server.max_body_bytes());

    let narration = Router::new()
        .route(
            "/process-base64-reference",
            post(process_base64_reference_handler::<S, C, E>),
        )
        .route("/upload-reference", post(upload_reference_handler::<S, C, E>))
        .route("/record-reference", post(record_reference_handler::<S, C, E>))
        .route("/extract-segment", post(extract_segment_handler::<S, C, E>))
        .layer(body_limit);

    Router::new()
        .route("/health", get(health_handler))
        .nest(API_PREFIX, narration)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vocalref::application::services::{ReferencePersistenceService, SegmentExtractionService};
use vocalref::infrastructure::audio::{FfmpegAudioExtractor, check_ffmpeg_binary};
use vocalref::infrastructure::language::HeuristicLanguageClassifier;
use vocalref::infrastructure::observability::{TracingConfig, init_tracing};
use vocalref::infrastructure::storage::LocalReferenceStore;
use vocalref::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    if let Err(e) = check_ffmpeg_binary(&settings.extraction.ffmpeg_path) {
        tracing::warn!(
            error = %e,
            binary = %settings.extraction.ffmpeg_path,
            "ffmpeg unavailable, segment extraction requests will fail"
        );
    }

    let store = Arc::new(LocalReferenceStore::new(
        settings.storage.reference_audio_dir.clone(),
    )?);
    tracing::info!(path = %store.base_path().display(), "Reference audio directory ready");

    let classifier = Arc::new(HeuristicLanguageClassifier::default());
    let extractor = Arc::new(FfmpegAudioExtractor::new(
        settings.extraction.ffmpeg_path.clone(),
    ));

    let persistence_service = Arc::new(ReferencePersistenceService::new(
        Arc::clone(&store),
        classifier,
    ));
    let extraction_service = Arc::new(SegmentExtractionService::new(
        extractor,
        Arc::clone(&store),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        persistence_service,
        extraction_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

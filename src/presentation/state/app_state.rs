use std::sync::Arc;

use crate::application::ports::{AudioExtractor, LanguageClassifier, ReferenceStore};
use crate::application::services::{ReferencePersistenceService, SegmentExtractionService};
use crate::presentation::config::Settings;

pub struct AppState<S, C, E>
where
    S: ReferenceStore,
    C: LanguageClassifier,
    E: AudioExtractor,
{
    pub persistence_service: Arc<ReferencePersistenceService<S, C>>,
    pub extraction_service: Arc<SegmentExtractionService<E, S>>,
    pub settings: Settings,
}

impl<S, C, E> Clone for AppState<S, C, E>
where
    S: ReferenceStore,
    C: LanguageClassifier,
    E: AudioExtractor,
{
    fn clone(&self) -> Self {
        Self {
            persistence_service: Arc::clone(&self.persistence_service),
            extraction_service: Arc::clone(&self.extraction_service),
            settings: self.settings.clone(),
        }
    }
}

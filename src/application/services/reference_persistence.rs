use std::sync::Arc;

use crate::application::ports::{LanguageClassifier, ReferenceStore, ReferenceStoreError};
use crate::domain::{
    AudioReferenceRecord, AudioReferenceRequest, LanguageClassification, ReferenceFilename,
    ReferenceId,
};

pub struct ReferencePersistenceService<S, C>
where
    S: ReferenceStore + ?Sized,
    C: LanguageClassifier + ?Sized,
{
    store: Arc<S>,
    classifier: Arc<C>,
}

impl<S, C> ReferencePersistenceService<S, C>
where
    S: ReferenceStore + ?Sized,
    C: LanguageClassifier + ?Sized,
{
    pub fn new(store: Arc<S>, classifier: Arc<C>) -> Self {
        Self { store, classifier }
    }

    #[tracing::instrument(skip(self, request), fields(source = request.source.tag(), bytes = request.payload.len()))]
    pub async fn persist(
        &self,
        request: AudioReferenceRequest,
    ) -> Result<AudioReferenceRecord, PersistenceError> {
        let id = ReferenceId::new();
        let filename = match request.suggested_filename.as_deref() {
            Some(original) => ReferenceFilename::for_upload(original, &id),
            None => ReferenceFilename::synthesized(request.source, &id),
        };

        let filepath = self
            .store
            .store(&filename, request.payload)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, filename = %filename, "Failed to write reference audio");
                PersistenceError::Storage(e)
            })?;

        if !self.store.exists(&filename).await? {
            tracing::error!(filename = %filename, "Reference audio missing after reported write");
            return Err(PersistenceError::Storage(
                ReferenceStoreError::VerificationFailed(format!(
                    "Failed to save audio file: {}",
                    filename
                )),
            ));
        }

        let language = self.classify(&request.transcript_text);

        tracing::info!(
            reference_id = %id,
            filename = %filename,
            language = language.as_str(),
            "Reference audio stored"
        );

        Ok(AudioReferenceRecord::new(
            id,
            filename,
            filepath,
            request.transcript_text,
            language,
        ))
    }

    fn classify(&self, transcript: &str) -> LanguageClassification {
        if transcript.is_empty() {
            return LanguageClassification::Unknown;
        }
        if self.classifier.is_english(transcript) {
            LanguageClassification::English
        } else {
            LanguageClassification::NonEnglish
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage: {0}")]
    Storage(#[from] ReferenceStoreError),
}

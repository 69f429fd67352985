mod audio_extractor;
mod language_classifier;
mod reference_store;

pub use audio_extractor::{AudioExtractor, AudioExtractorError};
pub use language_classifier::LanguageClassifier;
pub use reference_store::{ReferenceStore, ReferenceStoreError};

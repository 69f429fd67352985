mod input_normalizer;
mod reference_persistence;
mod segment_extraction;

pub use input_normalizer::{
    AUDIO_DATA_FIELD, FormPart, LegacyBody, NormalizationError, REFERENCE_TEXT_FIELD,
    ReferencePayload, normalize,
};
pub use reference_persistence::{PersistenceError, ReferencePersistenceService};
pub use segment_extraction::{ExtractionError, SegmentExtractionService};

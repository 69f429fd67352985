mod audio_reference;
mod extraction_request;
mod reference_filename;
mod reference_id;
mod time_range;

pub use audio_reference::{
    AudioReferenceRecord, AudioReferenceRequest, LanguageClassification, ReferenceSource,
};
pub use extraction_request::ExtractionRequest;
pub use reference_filename::{ReferenceFilename, sanitize_filename};
pub use reference_id::ReferenceId;
pub use time_range::{RawTime, TimeParseError, TimeRange, parse_time};

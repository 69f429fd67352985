mod api_error;
mod extract_segment;
mod health;
mod record_reference;
mod reference_response;
mod upload_reference;

pub use api_error::{ApiError, ErrorResponse};
pub use extract_segment::{ExtractSegmentRequest, extract_segment_handler};
pub use health::health_handler;
pub use record_reference::record_reference_handler;
pub use reference_response::ReferenceResponse;
pub use upload_reference::{process_base64_reference_handler, upload_reference_handler};

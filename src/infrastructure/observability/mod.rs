mod init_tracing;
mod payload_preview;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use payload_preview::preview_payload;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;

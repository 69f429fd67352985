use std::io;
use std::path::PathBuf;

use bytes::Bytes;

use crate::domain::ReferenceFilename;

/// Append-only namespace of reference audio files.
#[async_trait::async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Filesystem location a name resolves to, whether or not it exists yet.
    fn path_for(&self, filename: &ReferenceFilename) -> Result<PathBuf, ReferenceStoreError>;

    /// Writes the whole payload. A failed write leaves nothing behind under `filename`.
    async fn store(
        &self,
        filename: &ReferenceFilename,
        data: Bytes,
    ) -> Result<PathBuf, ReferenceStoreError>;

    async fn exists(&self, filename: &ReferenceFilename) -> Result<bool, ReferenceStoreError>;

    async fn delete(&self, filename: &ReferenceFilename) -> Result<(), ReferenceStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReferenceStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("verification failed: {0}")]
    VerificationFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ReferenceStore, ReferenceStoreError};
use crate::domain::ReferenceFilename;

/// Reference audio directory on the local filesystem.
pub struct LocalReferenceStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalReferenceStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ReferenceStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ReferenceStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ReferenceStoreError::InvalidPath(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl ReferenceStore for LocalReferenceStore {
    fn path_for(&self, filename: &ReferenceFilename) -> Result<PathBuf, ReferenceStoreError> {
        let store_path = StorePath::from(filename.as_str());
        self.inner
            .path_to_filesystem(&store_path)
            .map_err(|e| ReferenceStoreError::InvalidPath(e.to_string()))
    }

    async fn store(
        &self,
        filename: &ReferenceFilename,
        data: Bytes,
    ) -> Result<PathBuf, ReferenceStoreError> {
        let store_path = StorePath::from(filename.as_str());
        let size = data.len();

        if let Err(e) = self.inner.put(&store_path, PutPayload::from(data)).await {
            if let Err(cleanup) = self.delete(filename).await {
                tracing::warn!(error = %cleanup, filename = %filename, "Failed to remove partial reference");
            }
            return Err(ReferenceStoreError::WriteFailed(e.to_string()));
        }

        tracing::debug!(filename = %filename, bytes = size, "Reference written");
        self.path_for(filename)
    }

    async fn exists(&self, filename: &ReferenceFilename) -> Result<bool, ReferenceStoreError> {
        let store_path = StorePath::from(filename.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(ReferenceStoreError::VerificationFailed(e.to_string())),
        }
    }

    async fn delete(&self, filename: &ReferenceFilename) -> Result<(), ReferenceStoreError> {
        let store_path = StorePath::from(filename.as_str());
        match self.inner.delete(&store_path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(ReferenceStoreError::DeleteFailed(e.to_string())),
        }
    }
}

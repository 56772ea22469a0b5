use crate::error::RecognitionError;
use crate::verdict::SearchVerdict;
use async_trait::async_trait;

/// Read-only search against the enrolled face collection.
#[async_trait]
pub trait FaceSearch: Send + Sync + 'static {
    async fn search_by_image(&self, image: Vec<u8>) -> Result<SearchVerdict, RecognitionError>;
}

/// Result of an idempotent collection create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyExists,
}

/// Administrative operations on the face collection, used outside the
/// request path.
#[async_trait]
pub trait CollectionAdmin: Send + Sync {
    async fn ensure_collection(
        &self,
        collection_id: &str,
    ) -> Result<EnsureOutcome, RecognitionError>;
}

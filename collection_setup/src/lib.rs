//! One-shot setup that makes sure the staff face collection exists before
//! the gateway ever searches it. Run manually, not part of the request path.

use anyhow::Result;
use rekognition_client::{CollectionAdmin, EnsureOutcome};

/// Single linear attempt. "Already exists" is success; anything else is
/// propagated so the process exits non-zero, without retry.
pub async fn run_setup<C: CollectionAdmin>(client: &C, collection_id: &str) -> Result<()> {
    match client.ensure_collection(collection_id).await {
        Ok(EnsureOutcome::Created) => {
            tracing::info!(collection_id, "collection created");
            Ok(())
        }
        Ok(EnsureOutcome::AlreadyExists) => {
            tracing::info!(collection_id, "collection already exists");
            Ok(())
        }
        Err(err) => {
            tracing::error!("failed to create collection: {:?}", err);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aws_sdk_rekognition::error::SdkError;
    use rekognition_client::RecognitionError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Pretends the collection springs into existence on the first call,
    /// like the real service does.
    struct MockAdmin {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockAdmin {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CollectionAdmin for MockAdmin {
        async fn ensure_collection(
            &self,
            _collection_id: &str,
        ) -> Result<EnsureOutcome, RecognitionError> {
            if self.fail {
                return Err(RecognitionError::CreateCollection(SdkError::timeout_error(
                    "connection timed out",
                )));
            }
            match self.calls.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(EnsureOutcome::Created),
                _ => Ok(EnsureOutcome::AlreadyExists),
            }
        }
    }

    #[tokio::test]
    async fn setup_is_idempotent_across_invocations() {
        let admin = MockAdmin::new();

        run_setup(&admin, "StaffFaceCollection").await.unwrap();
        run_setup(&admin, "StaffFaceCollection").await.unwrap();

        assert_eq!(admin.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn other_failures_propagate() {
        let admin = MockAdmin::failing();

        let result = run_setup(&admin, "StaffFaceCollection").await;

        assert!(result.is_err());
    }
}

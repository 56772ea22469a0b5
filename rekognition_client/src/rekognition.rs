use crate::config::RecognitionConfig;
use crate::error::RecognitionError;
use crate::face_search::{CollectionAdmin, EnsureOutcome, FaceSearch};
use crate::verdict::{verdict_from_matches, SearchVerdict};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::config::{Credentials, Region};
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;
use aws_sdk_rekognition::Client;

/// Explicitly constructed handle to AWS Rekognition. All settings come in
/// through [`RecognitionConfig`]; nothing is read from process-global SDK
/// state after construction.
pub struct RekognitionFaceClient {
    client: Client,
    config: RecognitionConfig,
}

impl RekognitionFaceClient {
    /// Build a client from the given settings. Static credentials in the
    /// config take precedence over the default provider chain.
    pub async fn connect(config: RecognitionConfig) -> Self {
        let client = match (&config.access_key_id, &config.secret_access_key) {
            (Some(key), Some(secret)) => {
                let credentials =
                    Credentials::new(key.clone(), secret.clone(), None, None, "recognition-config");
                let sdk_config = aws_sdk_rekognition::Config::builder()
                    .behavior_version(BehaviorVersion::latest())
                    .region(Region::new(config.region.clone()))
                    .credentials_provider(credentials)
                    .build();
                Client::from_conf(sdk_config)
            }
            _ => {
                let shared = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(config.region.clone()))
                    .load()
                    .await;
                Client::new(&shared)
            }
        };

        Self { client, config }
    }

    pub fn collection_id(&self) -> &str {
        &self.config.collection_id
    }
}

#[async_trait]
impl FaceSearch for RekognitionFaceClient {
    async fn search_by_image(&self, image: Vec<u8>) -> Result<SearchVerdict, RecognitionError> {
        let output = self
            .client
            .search_faces_by_image()
            .collection_id(&self.config.collection_id)
            .image(Image::builder().bytes(Blob::new(image)).build())
            .face_match_threshold(self.config.face_match_threshold)
            .max_faces(self.config.max_faces)
            .send()
            .await?;

        tracing::debug!(
            matches = output.face_matches().len(),
            "collection search returned"
        );

        Ok(verdict_from_matches(output.face_matches()))
    }
}

#[async_trait]
impl CollectionAdmin for RekognitionFaceClient {
    async fn ensure_collection(
        &self,
        collection_id: &str,
    ) -> Result<EnsureOutcome, RecognitionError> {
        match self
            .client
            .create_collection()
            .collection_id(collection_id)
            .send()
            .await
        {
            Ok(output) => {
                tracing::debug!(status_code = ?output.status_code(), "collection created");
                Ok(EnsureOutcome::Created)
            }
            Err(err)
                if err
                    .as_service_error()
                    .map(|e| e.is_resource_already_exists_exception())
                    .unwrap_or(false) =>
            {
                Ok(EnsureOutcome::AlreadyExists)
            }
            Err(err) => Err(RecognitionError::CreateCollection(err)),
        }
    }
}

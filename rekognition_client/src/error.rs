use aws_sdk_rekognition::error::SdkError;
use aws_sdk_rekognition::operation::create_collection::CreateCollectionError;
use aws_sdk_rekognition::operation::search_faces_by_image::SearchFacesByImageError;
use thiserror::Error;

/// Failures talking to the recognition service. Variants are distinguished
/// for logging; callers decide how much of that reaches their own surface.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("face search failed: {0}")]
    Search(#[from] SdkError<SearchFacesByImageError>),
    #[error("collection create failed: {0}")]
    CreateCollection(#[from] SdkError<CreateCollectionError>),
}

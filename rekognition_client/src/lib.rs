//! Client for the external face recognition service.
//!
//! Two operations are consumed: an idempotent collection create used by the
//! one-shot setup tool, and a read-only search-by-image used by the gateway.
//! Both sit behind traits so callers can be exercised without the service.

mod face_search;
mod rekognition;
mod verdict;

pub mod config;
pub mod error;

pub use config::RecognitionConfig;
pub use error::RecognitionError;
pub use face_search::{CollectionAdmin, EnsureOutcome, FaceSearch};
pub use rekognition::RekognitionFaceClient;
pub use verdict::SearchVerdict;

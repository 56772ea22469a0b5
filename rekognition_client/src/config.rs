use serde::Deserialize;

/// Collection name shared by the gateway and the setup tool.
pub const DEFAULT_COLLECTION_ID: &str = "StaffFaceCollection";

/// Settings for the external recognition service.
///
/// Static credentials are optional; when absent the default AWS provider
/// chain (environment, profile, instance role) supplies them.
#[derive(Debug, Deserialize, Clone)]
pub struct RecognitionConfig {
    pub region: String,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
    #[serde(default = "default_collection_id")]
    pub collection_id: String,
    #[serde(default = "default_face_match_threshold")]
    pub face_match_threshold: f32,
    #[serde(default = "default_max_faces")]
    pub max_faces: i32,
}

fn default_collection_id() -> String {
    DEFAULT_COLLECTION_ID.to_string()
}

fn default_face_match_threshold() -> f32 {
    90.0
}

fn default_max_faces() -> i32 {
    1
}

impl RecognitionConfig {
    /// Read settings from `AWS_*` / `FACE_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
            collection_id: std::env::var("FACE_COLLECTION_ID")
                .unwrap_or_else(|_| default_collection_id()),
            face_match_threshold: env_f32("FACE_MATCH_THRESHOLD", default_face_match_threshold()),
            max_faces: env_i32("FACE_MAX_FACES", default_max_faces()),
        }
    }
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

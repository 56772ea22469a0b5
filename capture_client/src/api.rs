use async_trait::async_trait;
use match_proto::{AuthenticateRequest, AuthenticateResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(u16),
}

/// Typed outcome of one authentication attempt. Callers match on this
/// instead of funneling every failure through a single catch branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { staff_id: Option<String> },
    Rejected,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, image_b64: String) -> Result<Verdict, SubmitError>;
}

pub struct MatchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MatchClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for MatchClient {
    async fn authenticate(&self, image_b64: String) -> Result<Verdict, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AuthenticateRequest { image: image_b64 })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmitError::Status(response.status().as_u16()));
        }

        let body: AuthenticateResponse = response.json().await?;
        if body.is_authenticated {
            Ok(Verdict::Accepted {
                staff_id: body.staff_id,
            })
        } else {
            Ok(Verdict::Rejected)
        }
    }
}

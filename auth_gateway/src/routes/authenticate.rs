use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use match_proto::{AuthenticateRequest, AuthenticateResponse};
use rekognition_client::{FaceSearch, RecognitionError, SearchVerdict};
use serde_json::json;
use std::time::Instant;
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum AuthenticateError {
    #[error("image payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("recognition service failed: {0}")]
    Recognition(#[from] RecognitionError),
}

impl IntoResponse for AuthenticateError {
    fn into_response(self) -> Response {
        // Causes stay in the log; the wire body is deliberately generic.
        match &self {
            AuthenticateError::Decode(err) => {
                tracing::error!("rejecting undecodable image payload: {:?}", err)
            }
            AuthenticateError::Recognition(err) => {
                tracing::error!("collection search failed: {:?}", err)
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response()
    }
}

#[instrument(skip(state, request))]
pub async fn authenticate<S: FaceSearch>(
    State(state): State<AppState<S>>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, AuthenticateError> {
    state.metrics.record_request("/authenticate");

    let image = BASE64_STANDARD.decode(request.image.as_bytes())?;

    let started = Instant::now();
    let verdict = state.search.search_by_image(image).await?;
    state
        .metrics
        .record_search_duration(started.elapsed().as_millis() as u64, "/authenticate");

    let response = match verdict {
        SearchVerdict::Match {
            staff_id,
            similarity,
        } => {
            tracing::info!(similarity, "face matched");
            AuthenticateResponse {
                is_authenticated: true,
                staff_id,
            }
        }
        SearchVerdict::NoMatch => AuthenticateResponse {
            is_authenticated: false,
            staff_id: None,
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::Metrics;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockSearch {
        verdict: Result<SearchVerdict, ()>,
        calls: AtomicUsize,
    }

    impl MockSearch {
        fn returning(verdict: SearchVerdict) -> Self {
            Self {
                verdict: Ok(verdict),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                verdict: Err(()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FaceSearch for MockSearch {
        async fn search_by_image(
            &self,
            _image: Vec<u8>,
        ) -> Result<SearchVerdict, RecognitionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.verdict {
                Ok(verdict) => Ok(verdict.clone()),
                Err(()) => Err(RecognitionError::Search(
                    aws_sdk_rekognition::error::SdkError::timeout_error("connection timed out"),
                )),
            }
        }
    }

    fn state_with(search: MockSearch) -> AppState<MockSearch> {
        AppState {
            search: Arc::new(search),
            metrics: Arc::new(Metrics::new()),
        }
    }

    fn request(image: &str) -> Json<AuthenticateRequest> {
        Json(AuthenticateRequest {
            image: image.to_string(),
        })
    }

    const VALID_B64: &str = "aGVsbG8=";

    #[tokio::test]
    async fn match_returns_authenticated_with_staff_id() {
        let state = state_with(MockSearch::returning(SearchVerdict::Match {
            staff_id: Some("S123".to_string()),
            similarity: 99.1,
        }));

        let Json(response) = authenticate(State(state), request(VALID_B64))
            .await
            .unwrap();

        assert!(response.is_authenticated);
        assert_eq!(response.staff_id.as_deref(), Some("S123"));
    }

    #[tokio::test]
    async fn no_match_returns_unauthenticated() {
        let state = state_with(MockSearch::returning(SearchVerdict::NoMatch));

        let Json(response) = authenticate(State(state), request(VALID_B64))
            .await
            .unwrap();

        assert!(!response.is_authenticated);
        assert!(response.staff_id.is_none());
    }

    #[tokio::test]
    async fn service_failure_maps_to_generic_500() {
        let state = state_with(MockSearch::failing());

        let err = authenticate(State(state), request(VALID_B64))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthenticateError::Recognition(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn malformed_base64_never_reaches_the_search() {
        let search = MockSearch::returning(SearchVerdict::NoMatch);
        let state = state_with(search);
        let calls = state.search.clone();

        let err = authenticate(State(state), request("not-base64-!!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthenticateError::Decode(_)));
        assert_eq!(calls.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

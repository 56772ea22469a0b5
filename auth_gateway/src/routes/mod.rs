mod authenticate;
mod health;
mod metrics;

use crate::server::AppState;
use authenticate::authenticate;
use axum::{
    routing::{get, post},
    Router,
};
use health::healthcheck;
use metrics::metrics_handler;
use rekognition_client::FaceSearch;

pub fn api_routes<S: FaceSearch>() -> Router<AppState<S>> {
    Router::new()
        .route("/authenticate", post(authenticate::<S>))
        .route("/health", get(healthcheck))
        .route("/metrics", get(metrics_handler::<S>))
}

use axum::{response::IntoResponse, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Health {
    status: String,
}

pub async fn healthcheck() -> impl IntoResponse {
    Json(Health {
        status: "available".into(),
    })
}

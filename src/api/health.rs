use axum::{http::StatusCode, response::IntoResponse, routing, Router};
use std::sync::Arc;

use crate::models::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", routing::get(check_health))
}

async fn check_health() -> impl IntoResponse {
    (StatusCode::OK, "🚀 Up and running")
}

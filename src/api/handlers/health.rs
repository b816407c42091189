/*
 * Responsibility
 * - GET /health (Dokploy の監視用)
 * - GET 以外の拒否と CSRF 免除は routes 側の middleware で扱う
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::health::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

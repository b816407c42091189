/*
 * Responsibility
 * - GET /info (サービスのメタ情報)
 */
use axum::Json;

use crate::api::dto::info::InfoResponse;

pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::current())
}

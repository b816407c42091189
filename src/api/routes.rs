/*
 * Responsibility
 * - URL 構造を定義 (/health, /info)
 * - GET 専用の制限は route_layer で全ルートに適用する (一番外側)
 * - CORS はその内側。OPTIONS は guard が 405 で返すので CORS には届かない
 * - CSRF 免除はここで宣言し、app 側で CsrfPolicy に登録する
 */
use axum::{Router, middleware, routing::get};

use crate::api::handlers::{health::health, info::info};
use crate::config::Config;
use crate::middleware::cors;
use crate::middleware::method::require_get;
use crate::state::AppState;

/// Paths hit by monitors without a session; skipped by the CSRF check.
pub const CSRF_EXEMPT_PATHS: &[&str] = &["/health", "/info"];

pub fn routes(config: &Config) -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/info", get(info));

    cors::apply(router, config).route_layer(middleware::from_fn(require_get))
}

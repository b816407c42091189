//! Response headers for the JSON monitoring endpoints.
//!
//! Applied at the Router level, so error responses (405/404/403) carry them too.
//!
//! - `Cache-Control: no-store`: health/info must never be served from a cache
//!   between the monitor and the service.
//! - `X-Content-Type-Options: nosniff`: bodies are JSON, never sniffed as HTML.
//! - Production only: `Strict-Transport-Security`, since Dokploy fronts the
//!   service with TLS there while development runs on plain HTTP.

use axum::Router;
use axum::http::header::{self, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;

const HSTS: &str = "max-age=31536000; includeSubDomains";

pub fn apply(router: Router, config: &Config) -> Router {
    let router = router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    if !config.app_env.is_production() {
        return router;
    }

    router.layer(SetResponseHeaderLayer::if_not_present(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static(HSTS),
    ))
}

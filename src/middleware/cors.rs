//! CORS policy for browser clients.
//!
//! Note:
//! - Monitors and Dokploy itself call these endpoints server-to-server, where
//!   CORS does not apply. The layer only matters for dashboards in a browser.
//! - The monitoring routes are plain GETs without custom headers, so browsers never
//!   need a preflight. The layer is installed with `route_layer` *inside* the
//!   GET guard: OPTIONS is answered 405 by the guard and never reaches it, and
//!   it only decorates GET responses with `Access-Control-Allow-Origin`.
//!
//! Policy:
//! - Allowlist origins from Config (comma-separated env var), exact match.
//! - No origins configured → no layer.
//! - GET only, WITHOUT credentials.

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

/// Build the CORS layer for the configured origins, if any.
pub fn layer(config: &Config) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET]),
    )
}

/// Wrap the routes registered so far. Call before the method guard is layered.
pub fn apply<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match layer(config) {
        Some(cors) => router.route_layer(cors),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_origins_means_no_layer() {
        assert!(layer(&Config::default()).is_none());
    }

    #[test]
    fn unparseable_origins_are_skipped() {
        let config = Config {
            cors_allowed_origins: vec!["bad\norigin".to_string()],
            ..Config::default()
        };
        assert!(layer(&config).is_none());

        let config = Config {
            cors_allowed_origins: vec![
                "bad\norigin".to_string(),
                "https://ok.example".to_string(),
            ],
            ..Config::default()
        };
        assert!(layer(&config).is_some());
    }
}

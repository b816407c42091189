//! CSRF protection for state-changing requests.
//!
//! Double-submit check: an unsafe request must send the `csrftoken` cookie and
//! the same value in the `X-CSRFToken` header. When an `Origin` header is
//! present it must be same-origin with `Host` or listed in
//! `CSRF_TRUSTED_ORIGINS`.
//!
//! Applied with `route_layer`, so unknown paths get a 404 rather than a 403.
//! Paths on the exempt allow-list (health/info monitoring) are never checked.

use std::collections::HashSet;

use axum::extract::{MatchedPath, Request, State};
use axum::http::{HeaderMap, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::state::AppState;

pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "x-csrftoken";

const CSRF_FAILED: &str = "CSRF_FAILED";

#[derive(Debug, Clone, Default)]
pub struct CsrfPolicy {
    trusted_origins: Vec<String>,
    exempt_paths: HashSet<String>,
}

impl CsrfPolicy {
    pub fn new(trusted_origins: Vec<String>) -> Self {
        Self {
            trusted_origins,
            exempt_paths: HashSet::new(),
        }
    }

    pub fn exempt(mut self, path: impl Into<String>) -> Self {
        self.exempt_paths.insert(path.into());
        self
    }

    pub fn exempt_all<'a>(self, paths: impl IntoIterator<Item = &'a str>) -> Self {
        paths.into_iter().fold(self, |policy, path| policy.exempt(path))
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.contains(path)
    }

    /// Decide whether a request may proceed. `path` is the matched route pattern.
    pub fn check(&self, method: &Method, path: &str, headers: &HeaderMap) -> Result<(), AppError> {
        if is_safe(method) || self.is_exempt(path) {
            return Ok(());
        }

        if let Some(origin) = headers.get(header::ORIGIN) {
            let origin = origin.to_str().unwrap_or_default();
            if !self.origin_allowed(origin, headers) {
                return Err(AppError::forbidden(
                    CSRF_FAILED,
                    format!("origin {origin} does not match any trusted origins"),
                ));
            }
        }

        let jar = CookieJar::from_headers(headers);
        let cookie = jar
            .get(CSRF_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::forbidden(CSRF_FAILED, "CSRF cookie not set"))?;

        let submitted = headers
            .get(CSRF_HEADER_NAME)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::forbidden(CSRF_FAILED, "CSRF token missing"))?;

        if !tokens_match(&cookie, submitted) {
            return Err(AppError::forbidden(CSRF_FAILED, "CSRF token incorrect"));
        }

        Ok(())
    }

    fn origin_allowed(&self, origin: &str, headers: &HeaderMap) -> bool {
        if self.trusted_origins.iter().any(|t| t == origin) {
            return true;
        }

        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let origin_host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"));

        !host.is_empty() && origin_host == Some(host)
    }
}

/// Route-level middleware enforcing the policy held in `AppState`.
pub async fn enforce(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    if let Err(err) = state.csrf.check(request.method(), &path, request.headers()) {
        tracing::warn!(method = %request.method(), path = %path, error = %err, "csrf check failed");
        return Err(err);
    }

    Ok(next.run(request).await)
}

fn is_safe(method: &Method) -> bool {
    [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE].contains(method)
}

// Constant-time so the token can't be probed byte by byte.
fn tokens_match(expected: &str, given: &str) -> bool {
    if expected.len() != given.len() {
        return false;
    }
    expected
        .bytes()
        .zip(given.bytes())
        .fold(0, |acc, (a, b)| acc | (a ^ b))
        == 0
}

//! HTTP method restriction.
//!
//! Applied with `route_layer` so it only sees requests that matched a route.
//! Anything other than GET (HEAD and OPTIONS included) is answered with 405
//! before the handler runs.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;

/// Reject every method except GET with `405 Method Not Allowed` and `Allow: GET`.
pub async fn require_get(request: Request, next: Next) -> Result<Response, AppError> {
    if request.method() != Method::GET {
        return Err(AppError::method_not_allowed("GET"));
    }

    Ok(next.run(request).await)
}

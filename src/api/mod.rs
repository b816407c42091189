/*
 * Responsibility
 * - API の公開ポイント (routes() と CSRF 免除パスの re-export)
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::{CSRF_EXEMPT_PATHS, routes};

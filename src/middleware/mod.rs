/*
 * Responsibility
 * - middleware の公開インターフェース
 * - Router 全体にかける層 (http/response_headers) と route 単位の層 (method/csrf/cors)
 */
pub mod cors;
pub mod csrf;
pub mod http;
pub mod method;
pub mod response_headers;

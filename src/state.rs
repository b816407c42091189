/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - handler 自体は状態を持たない。CSRF 設定など middleware 用の値だけ載せる
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::api::CSRF_EXEMPT_PATHS;
use crate::config::Config;
use crate::middleware::csrf::CsrfPolicy;

#[derive(Clone, Debug)]
pub struct AppState {
    pub csrf: Arc<CsrfPolicy>,
}

impl AppState {
    pub fn new(csrf: CsrfPolicy) -> Self {
        Self {
            csrf: Arc::new(csrf),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let csrf = CsrfPolicy::new(config.csrf_trusted_origins.clone())
            .exempt_all(CSRF_EXEMPT_PATHS.iter().copied());
        Self::new(csrf)
    }
}

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::llm_client::Generator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pluggable generation boundary. Default: GeminiClient. Swappable so the
    /// free-text reply contract can change without touching handlers.
    pub generator: Arc<dyn Generator>,
    pub config: Config,
}

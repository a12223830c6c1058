use std::sync::Arc;

use crate::config::Config;
use crate::share::Clock;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Time source for `_meta.created` and published-link records.
    pub clock: Arc<dyn Clock>,
}

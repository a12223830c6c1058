pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::share::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV share API
        .route("/api/v1/cv/normalize", post(handlers::handle_normalize))
        .route("/api/v1/cv/share", post(handlers::handle_share))
        .route("/api/v1/cv/decode", post(handlers::handle_decode))
        .route("/api/v1/cv/detect", post(handlers::handle_detect))
        .route("/api/v1/cv/complexity", post(handlers::handle_complexity))
        .with_state(state)
}

//! HTTP surface

pub mod auth;
pub mod health;
pub mod state;
pub mod types;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth::create_auth_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router (`/login`, `/logout`, `/session`)
pub fn auth_router(config: Arc<AuthConfig>) -> Router {
    let state = AuthAppState { config };

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/session", get(handlers::session_status))
        .with_state(state)
}

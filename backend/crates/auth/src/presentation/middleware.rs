//! Auth Middleware
//!
//! Gate for admin routes. Runs before the inner handler so a denied request
//! never reaches admin data.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthDecision, SessionStore, authorize};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub store: SessionStore,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            store: SessionStore::new(config),
        }
    }
}

/// Middleware that requires the admin flag in the session.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_admin(
    State(state): State<AuthMiddlewareState>,
    req: Request,
    next: Next,
) -> Response {
    let session = state.store.load_from_headers(req.headers());

    match authorize(&session) {
        AuthDecision::Allowed => next.run(req).await,
        AuthDecision::Redirect { to } => {
            tracing::debug!(path = %req.uri().path(), "Admin route denied");
            Redirect::to(to).into_response()
        }
    }
}

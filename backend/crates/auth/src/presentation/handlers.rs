//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::cookie_header;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ADMIN_PATH, LOGIN_PATH, SessionStore, SignInInput, SignInOutput, SignInUseCase,
    SignOutUseCase,
};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, SessionStatusResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState {
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// Always answers 303. Only a valid credential sets the cookie.
pub async fn login(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
    form: Result<Form<LoginForm>, FormRejection>,
) -> AuthResult<Response> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login form");
            LoginForm::default()
        }
    };

    let use_case = SignInUseCase::new(state.config.clone());
    let input = SignInInput {
        username: form.username,
        password: form.password,
    };

    let output = use_case
        .execute(input, cookie_header(&headers).as_deref())
        .await?;

    Ok(match output {
        SignInOutput::Authenticated { set_cookie } => {
            ([(header::SET_COOKIE, set_cookie)], Redirect::to(ADMIN_PATH)).into_response()
        }
        SignInOutput::Rejected => Redirect::to(LOGIN_PATH).into_response(),
    })
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse> {
    let use_case = SignOutUseCase::new(state.config.clone());
    let set_cookie = use_case.execute(cookie_header(&headers).as_deref())?;

    Ok(([(header::SET_COOKIE, set_cookie)], Redirect::to(LOGIN_PATH)))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /session
pub async fn session_status(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse> {
    let session = SessionStore::new(state.config.clone()).load_from_headers(&headers);

    Json(SessionStatusResponse {
        is_admin: session.is_admin(),
    })
}

//! Sign In Use Case
//!
//! Verifies the admin credential and marks the session as admin.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_store::SessionStore;
use crate::application::verify_credentials::CredentialVerifier;
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
#[derive(Debug)]
pub enum SignInOutput {
    /// Credential accepted; carries the `Set-Cookie` value
    Authenticated { set_cookie: String },
    /// Credential rejected. Bad username and bad password look the same.
    Rejected,
}

/// Sign in use case
pub struct SignInUseCase {
    verifier: CredentialVerifier,
    store: SessionStore,
}

impl SignInUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            verifier: CredentialVerifier::new(config.clone()),
            store: SessionStore::new(config),
        }
    }

    /// `cookie_header` is the request's current Cookie header; other keys
    /// in an existing session are kept.
    pub async fn execute(
        &self,
        input: SignInInput,
        cookie_header: Option<&str>,
    ) -> AuthResult<SignInOutput> {
        // Argon2 is CPU-bound; keep it off the async workers
        let verifier = self.verifier.clone();
        let verified = tokio::task::spawn_blocking(move || {
            verifier.verify(input.username.as_deref(), input.password.as_deref())
        })
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Credential verification task failed");
            false
        });

        if !verified {
            tracing::warn!("Invalid login attempt");
            return Ok(SignInOutput::Rejected);
        }

        let mut session = self.store.load(cookie_header);
        session.set_admin(true);
        let set_cookie = self.store.serialize(&session)?;

        tracing::info!("Admin signed in");

        Ok(SignInOutput::Authenticated { set_cookie })
    }
}

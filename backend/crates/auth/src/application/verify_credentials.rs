//! Credential Verifier
//!
//! Checks a submitted username/password pair against the admin identity.

use std::sync::Arc;

use platform::crypto::constant_time_eq;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;

/// Credential verifier
#[derive(Clone)]
pub struct CredentialVerifier {
    config: Arc<AuthConfig>,
}

impl CredentialVerifier {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// `true` only for the configured username with the matching password.
    ///
    /// Missing fields, an empty password or a hashing failure yield `false`.
    /// The password hash is evaluated even when the username is wrong.
    pub fn verify(&self, username: Option<&str>, password: Option<&str>) -> bool {
        let (Some(username), Some(password)) = (username, password) else {
            return false;
        };
        if password.is_empty() {
            return false;
        }

        let username_ok =
            constant_time_eq(username.as_bytes(), self.config.admin.username.as_bytes());
        let password_ok = self.config.admin.password_hash.verify(
            &ClearTextPassword::for_verification(password),
            self.config.pepper(),
        );

        username_ok && password_ok
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::{SealKey, random_key};
use platform::password::ClearTextPassword;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::AdminIdentity;
use crate::error::{AuthError, AuthResult};

/// Username and password used by [`AuthConfig::development`]
pub const DEVELOPMENT_CREDENTIAL: &str = "admin";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// The single admin credential
    pub admin: AdminIdentity,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Sealing keys. The first seals new cookies; every key is tried on open.
    pub session_secrets: Vec<SealKey>,
    /// Session lifetime (cookie Max-Age and payload expiry)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl AuthConfig {
    /// Production defaults around the given credential and secrets.
    ///
    /// Fails when `session_secrets` is empty.
    pub fn new(admin: AdminIdentity, session_secrets: Vec<SealKey>) -> AuthResult<Self> {
        if session_secrets.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self {
            admin,
            password_pepper: None,
            session_cookie_name: "session".to_string(),
            session_secrets,
            session_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        })
    }

    /// Create config with a random session secret
    pub fn with_random_secret(admin: AdminIdentity) -> Self {
        Self {
            admin,
            password_pepper: None,
            session_cookie_name: "session".to_string(),
            session_secrets: vec![random_key()],
            session_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }

    /// Create config for development: insecure cookie, random secret and
    /// `admin` / `admin` as the credential.
    pub fn development() -> AuthResult<Self> {
        let hash = ClearTextPassword::for_verification(DEVELOPMENT_CREDENTIAL).hash(None)?;
        Ok(Self {
            cookie_secure: false,
            ..Self::with_random_secret(AdminIdentity::new(DEVELOPMENT_CREDENTIAL, hash))
        })
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Key used to seal new cookies
    pub fn sealing_key(&self) -> AuthResult<&SealKey> {
        self.session_secrets.first().ok_or(AuthError::MissingSecret)
    }

    /// Cookie attributes derived from this config
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_username", &self.admin.username)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secrets", &self.session_secrets.len())
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_a_secret() {
        let admin = AuthConfig::development().unwrap().admin;
        assert!(matches!(
            AuthConfig::new(admin, Vec::new()),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn test_cookie_config_follows_session_settings() {
        let config = AuthConfig::development().unwrap();
        let cookie = config.cookie_config();
        assert_eq!(cookie.name, "session");
        assert!(!cookie.secure);
        assert!(cookie.http_only);
        assert_eq!(cookie.same_site, SameSite::Lax);
        assert_eq!(cookie.max_age_secs, Some(86400));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::development()
            .unwrap()
            .with_pepper(Some(b"pepper-value".to_vec()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("pepper-value"));
        assert!(debug.contains("session_secrets: 1"));
    }

    #[test]
    fn test_from_phc_rejects_garbage() {
        assert!(AdminIdentity::from_phc("admin", "plaintext").is_err());
    }
}

//! Sign Out Use Case
//!
//! Drops the admin flag and re-issues the cookie.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_store::SessionStore;
use crate::domain::IS_ADMIN;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase {
    store: SessionStore,
}

impl SignOutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            store: SessionStore::new(config),
        }
    }

    /// Returns the `Set-Cookie` value for the updated session
    pub fn execute(&self, cookie_header: Option<&str>) -> AuthResult<String> {
        let mut session = self.store.load(cookie_header);
        let was_admin = session.is_admin();
        session.unset(IS_ADMIN);

        if was_admin {
            tracing::info!("Admin signed out");
        }

        self.store.serialize(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_out_clears_flag() {
        let config = Arc::new(AuthConfig::development().unwrap());
        let store = SessionStore::new(config.clone());
        let mut session = store.create();
        session.set_admin(true);
        let set_cookie = store.serialize(&session).unwrap();
        let header = set_cookie.split(';').next().unwrap();

        let cleared = SignOutUseCase::new(config).execute(Some(header)).unwrap();
        let cleared_header = cleared.split(';').next().unwrap();
        assert!(!store.load(Some(cleared_header)).is_admin());
    }

    #[test]
    fn test_sign_out_without_session_is_fine() {
        let config = Arc::new(AuthConfig::development().unwrap());
        let set_cookie = SignOutUseCase::new(config).execute(None).unwrap();
        assert!(set_cookie.starts_with("session="));
    }
}

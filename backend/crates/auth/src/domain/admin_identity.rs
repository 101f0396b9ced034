//! Admin Identity
//!
//! The single static credential. Comes from configuration and lives for the
//! process lifetime; nothing about it is persisted.

use platform::password::HashedPassword;

use crate::error::AuthResult;

/// Admin credential
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
    pub password_hash: HashedPassword,
}

impl AdminIdentity {
    pub fn new(username: impl Into<String>, password_hash: HashedPassword) -> Self {
        Self {
            username: username.into(),
            password_hash,
        }
    }

    /// Credential from a stored PHC string (`ADMIN_PASSWORD_HASH`)
    pub fn from_phc(username: impl Into<String>, phc: &str) -> AuthResult<Self> {
        Ok(Self::new(username, HashedPassword::from_phc_string(phc)?))
    }
}

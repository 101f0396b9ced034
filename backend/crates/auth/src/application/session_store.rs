//! Session Store
//!
//! Stateless sessions: the whole record travels in the `session` cookie,
//! sealed with XChaCha20-Poly1305. Anything that fails to open, parse or is
//! past its expiry loads as a fresh empty session.
//!
//! Logging out rewrites the cookie without the admin flag. A copy of the
//! earlier cookie stays valid until its embedded expiry.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::{cookie_header, cookie_value};
use platform::crypto::{from_base64url, open, seal, to_base64url};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::Session;
use crate::error::AuthResult;

/// Sealed cookie payload
#[derive(Debug, Serialize, Deserialize)]
struct SessionPayload {
    data: Session,
    /// Expiry (Unix ms)
    exp: i64,
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Session store
#[derive(Clone)]
pub struct SessionStore {
    config: Arc<AuthConfig>,
}

impl SessionStore {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Fresh empty session
    pub fn create(&self) -> Session {
        Session::new()
    }

    /// Load from a raw `Cookie` header value
    pub fn load(&self, cookie_header: Option<&str>) -> Session {
        self.load_at(cookie_header, now_ms())
    }

    /// Load from request headers (every `Cookie` header is considered)
    pub fn load_from_headers(&self, headers: &HeaderMap) -> Session {
        self.load(cookie_header(headers).as_deref())
    }

    /// Full `Set-Cookie` value carrying `session`
    pub fn serialize(&self, session: &Session) -> AuthResult<String> {
        self.serialize_at(session, now_ms())
    }

    pub(crate) fn load_at(&self, cookie_header: Option<&str>, now_ms: i64) -> Session {
        let Some(raw) =
            cookie_header.and_then(|h| cookie_value(h, &self.config.session_cookie_name))
        else {
            return self.create();
        };

        match self.open_payload(&raw) {
            Some(payload) if payload.exp > now_ms => payload.data,
            Some(payload) => {
                tracing::debug!(exp = payload.exp, "Session cookie expired");
                self.create()
            }
            None => {
                tracing::debug!("Discarding unreadable session cookie");
                self.create()
            }
        }
    }

    pub(crate) fn serialize_at(&self, session: &Session, now_ms: i64) -> AuthResult<String> {
        let payload = SessionPayload {
            data: session.clone(),
            exp: now_ms + self.config.session_ttl_ms(),
        };

        let json = serde_json::to_vec(&payload)?;
        let sealed = seal(self.config.sealing_key()?, &json)?;

        Ok(self
            .config
            .cookie_config()
            .build_set_cookie(&to_base64url(&sealed)))
    }

    fn open_payload(&self, raw: &str) -> Option<SessionPayload> {
        let sealed = from_base64url(raw).ok()?;
        let json = self
            .config
            .session_secrets
            .iter()
            .find_map(|key| open(key, &sealed).ok())?;
        serde_json::from_slice(&json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::random_key;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(AuthConfig::development().unwrap()))
    }

    /// `session=<value>` part of a Set-Cookie string, usable as a Cookie header
    fn as_cookie_header(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[test]
    fn test_roundtrip_admin_flag() {
        let store = store();
        let mut session = store.create();
        session.set_admin(true);

        let set_cookie = store.serialize(&session).unwrap();
        let loaded = store.load(Some(&as_cookie_header(&set_cookie)));
        assert!(loaded.is_admin());
    }

    #[test]
    fn test_missing_header_is_not_admin() {
        let store = store();
        assert!(!store.load(None).is_admin());
        assert!(!store.load(Some("other=1")).is_admin());
    }

    #[test]
    fn test_set_cookie_attributes() {
        let store = store();
        let set_cookie = store.serialize(&store.create()).unwrap();
        assert!(set_cookie.starts_with("session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("Max-Age=86400"));
    }

    #[test]
    fn test_tampered_cookie_loads_empty() {
        let store = store();
        let mut session = store.create();
        session.set_admin(true);
        let header = as_cookie_header(&store.serialize(&session).unwrap());

        let mut tampered = header.into_bytes();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(!store.load(Some(&tampered)).is_admin());
        assert!(!store.load(Some("session=not-base64!")).is_admin());
        assert!(!store.load(Some("session=")).is_admin());
    }

    #[test]
    fn test_forged_unsealed_json_is_rejected() {
        let store = store();
        let forged = to_base64url(br#"{"data":{"isAdmin":true},"exp":99999999999999}"#);
        assert!(!store.load(Some(&format!("session={forged}"))).is_admin());
    }

    #[test]
    fn test_expired_cookie_loads_empty() {
        let store = store();
        let mut session = store.create();
        session.set_admin(true);

        let now = now_ms();
        let header = as_cookie_header(&store.serialize_at(&session, now).unwrap());

        assert!(store.load_at(Some(&header), now + 1000).is_admin());
        let after_ttl = now + store.config.session_ttl_ms();
        assert!(!store.load_at(Some(&header), after_ttl).is_admin());
    }

    #[test]
    fn test_rotated_secret_still_opens() {
        let old = AuthConfig::development().unwrap();
        let old_store = SessionStore::new(Arc::new(old.clone()));
        let mut session = old_store.create();
        session.set_admin(true);
        let header = as_cookie_header(&old_store.serialize(&session).unwrap());

        let mut rotated = old.clone();
        rotated.session_secrets = vec![random_key(), old.session_secrets[0]];
        let rotated_store = SessionStore::new(Arc::new(rotated.clone()));
        assert!(rotated_store.load(Some(&header)).is_admin());

        rotated.session_secrets.truncate(1);
        let retired_store = SessionStore::new(Arc::new(rotated));
        assert!(!retired_store.load(Some(&header)).is_admin());
    }

    #[test]
    fn test_unset_then_serialize_drops_flag() {
        let store = store();
        let mut session = store.create();
        session.set_admin(true);
        session.set("note", "kept");

        session.unset(crate::domain::IS_ADMIN);
        let header = as_cookie_header(&store.serialize(&session).unwrap());
        let loaded = store.load(Some(&header));
        assert!(!loaded.is_admin());
        assert_eq!(loaded.get("note"), Some(&serde_json::json!("kept")));
    }
}

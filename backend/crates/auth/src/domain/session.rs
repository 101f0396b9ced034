//! Session Entity
//!
//! A small key-value record carried by the browser inside the sealed
//! `session` cookie. The server keeps no copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only key this system reads
pub const IS_ADMIN: &str = "isAdmin";

/// Session record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    data: BTreeMap<String, Value>,
}

impl Session {
    /// Empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a key, returning the old value
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `true` only for a literal boolean `true` under [`IS_ADMIN`]
    pub fn is_admin(&self) -> bool {
        matches!(self.get(IS_ADMIN), Some(Value::Bool(true)))
    }

    /// `false` removes the key rather than storing `false`
    pub fn set_admin(&mut self, is_admin: bool) {
        if is_admin {
            self.set(IS_ADMIN, true);
        } else {
            self.unset(IS_ADMIN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_not_admin() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(!session.is_admin());
        assert_eq!(session.get(IS_ADMIN), None);
    }

    #[test]
    fn test_set_admin_toggle() {
        let mut session = Session::new();
        session.set_admin(true);
        assert!(session.is_admin());
        assert_eq!(session.get(IS_ADMIN), Some(&Value::Bool(true)));

        session.set_admin(false);
        assert!(!session.is_admin());
        assert!(session.is_empty());
    }

    #[test]
    fn test_only_boolean_true_counts() {
        let mut session = Session::new();
        session.set(IS_ADMIN, "true");
        assert!(!session.is_admin());
        session.set(IS_ADMIN, 1);
        assert!(!session.is_admin());
        session.set(IS_ADMIN, false);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut session = Session::new();
        session.set_admin(true);
        assert_eq!(serde_json::to_string(&session).unwrap(), r#"{"isAdmin":true}"#);
    }
}

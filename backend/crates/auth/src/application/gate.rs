//! Auth Gate
//!
//! Decides whether a session may reach admin routes.

use crate::domain::Session;

/// Where unauthenticated visitors are sent
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands
pub const ADMIN_PATH: &str = "/admin";

/// Gate decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allowed,
    Redirect { to: &'static str },
}

pub fn authorize(session: &Session) -> AuthDecision {
    if session.is_admin() {
        AuthDecision::Allowed
    } else {
        AuthDecision::Redirect { to: LOGIN_PATH }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denies_without_flag() {
        assert_eq!(
            authorize(&Session::new()),
            AuthDecision::Redirect { to: "/login" }
        );
    }

    #[test]
    fn test_allows_admin() {
        let mut session = Session::new();
        session.set_admin(true);
        assert_eq!(authorize(&session), AuthDecision::Allowed);
    }

    #[test]
    fn test_non_boolean_flag_is_denied() {
        let mut session = Session::new();
        session.set(crate::domain::IS_ADMIN, "yes");
        assert!(matches!(authorize(&session), AuthDecision::Redirect { .. }));
    }
}

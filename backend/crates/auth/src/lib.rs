//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin identity and the session record
//! - `application/` - Credential verification, session store, gate, use cases
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Single admin login with username + password
//! - Stateless sessions sealed into the `session` cookie
//! - Gate middleware redirecting non-admins to `/login`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session payload sealed with XChaCha20-Poly1305 and time-bounded
//! - Session secrets can be rotated (seal with first, open with any)

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

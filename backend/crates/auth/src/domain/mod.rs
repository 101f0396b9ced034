//! Domain Layer
//!
//! The admin identity and the client-held session record.

pub mod admin_identity;
pub mod session;

// Re-exports
pub use admin_identity::AdminIdentity;
pub use session::{IS_ADMIN, Session};

//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod session_store;
pub mod sign_in;
pub mod sign_out;
pub mod verify_credentials;

// Re-exports
pub use config::AuthConfig;
pub use gate::{ADMIN_PATH, AuthDecision, LOGIN_PATH, authorize};
pub use session_store::SessionStore;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use verify_credentials::CredentialVerifier;

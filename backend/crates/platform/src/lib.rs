//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the bounded contexts:
//! - Authenticated encryption for client-held state (XChaCha20-Poly1305)
//! - Password hashing (Argon2id)
//! - Cookie construction and parsing

pub mod cookie;
pub mod crypto;
pub mod password;

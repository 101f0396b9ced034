//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary both bounded contexts (`auth`, `catalog`) agree on:
//! - Unified error type and its HTTP mapping
//! - Typed integer IDs for store-assigned keys

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

//! Shared types for the usage service
//!
//! Subscription catalog and account records as returned by the usage API,
//! plus the pure entitlement resolution built on top of them.

pub mod entitlement;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use entitlement::AccountEntitlement;

//! Usage Client - HTTP client for the usage service
//!
//! Typed access to the subscription catalog, account subscription, limits,
//! redemption codes, creator earnings and signed upload URLs. Every
//! authenticated call takes a [`UserContext`] whose provider is asked for the
//! `Authorization` header at call time.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;

pub use api::{ChangeSubscriptionOptions, UploadFile, UploadType};
pub use auth::{AuthorizationProvider, BearerToken, UserContext};
pub use config::{ClientConfig, ClientPlatform};
pub use error::{ClientError, ClientResult};
pub use http::UsageClient;

// Re-export cancellation token for callers aborting in-flight requests
pub use tokio_util::sync::CancellationToken;

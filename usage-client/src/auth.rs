//! Per-call authorization
//!
//! The client never stores credentials: each authenticated call asks the
//! provider for a fresh `Authorization` header value, so token refresh stays
//! the caller's business.

use async_trait::async_trait;

use crate::ClientResult;

/// Produces the `Authorization` header value for a request
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    async fn authorization_header(&self) -> ClientResult<String>;
}

/// Fixed bearer token
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[async_trait]
impl AuthorizationProvider for BearerToken {
    async fn authorization_header(&self) -> ClientResult<String> {
        Ok(format!("Bearer {}", self.0))
    }
}

/// The user a request is made for, with the means to authenticate as them
#[derive(Clone, Copy)]
pub struct UserContext<'a> {
    pub user_id: &'a str,
    pub auth: &'a dyn AuthorizationProvider,
}

impl<'a> UserContext<'a> {
    pub fn new(user_id: &'a str, auth: &'a dyn AuthorizationProvider) -> Self {
        Self { user_id, auth }
    }
}

impl std::fmt::Debug for UserContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserContext")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

//! Inspector configuration

use usage_client::ClientConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Inspector configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Usage service connection (USAGE_API_URL, USAGE_API_TIMEOUT, USAGE_PLATFORM)
    pub client: ClientConfig,
    /// Account to inspect
    pub user_id: String,
    /// Bearer token of that account
    pub access_token: String,
    /// Locale used for plan and feature names
    pub locale: String,
    /// Also list legacy plans
    pub include_legacy: bool,
}

impl Config {
    /// Require an env var to be set and non-empty
    fn require(name: &str) -> Result<String, BoxError> {
        match std::env::var(name) {
            Ok(v) if !v.is_empty() => Ok(v),
            Ok(_) => Err(format!("{name} must not be empty").into()),
            Err(_) => Err(format!("{name} must be set").into()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            client: ClientConfig::from_env(),
            user_id: Self::require("USAGE_USER_ID")?,
            access_token: Self::require("USAGE_ACCESS_TOKEN")?,
            locale: std::env::var("USAGE_LOCALE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "en".into()),
            include_legacy: std::env::var("USAGE_INCLUDE_LEGACY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }
}

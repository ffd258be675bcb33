//! Client configuration

/// Default usage service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.gdevelop.io/usage";

/// Platform the client runs on; mobile apps get app-store specific limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientPlatform {
    #[default]
    Desktop,
    Mobile,
}

impl ClientPlatform {
    /// Parse `desktop` / `mobile` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// Client configuration for connecting to the usage service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.gdevelop.io/usage")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Platform reported to the limits endpoint
    pub platform: ClientPlatform,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            platform: ClientPlatform::Desktop,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `USAGE_API_URL`, `USAGE_API_TIMEOUT` (seconds) and `USAGE_PLATFORM`
    /// (`desktop` | `mobile`); unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("USAGE_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        );
        if let Some(timeout) = std::env::var("USAGE_API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(platform) = std::env::var("USAGE_PLATFORM") {
            match ClientPlatform::parse(&platform) {
                Some(platform) => config.platform = platform,
                None => tracing::warn!(%platform, "Unknown USAGE_PLATFORM, using desktop"),
            }
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the client platform
    pub fn with_platform(mut self, platform: ClientPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Create a usage client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::UsageClient> {
        crate::UsageClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

//! HTTP transport for the usage service

use std::future::Future;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::auth::AuthorizationProvider;
use crate::config::ClientPlatform;
use crate::{ClientConfig, ClientError, ClientResult};

/// Query string pairs
pub(crate) type Query<'a> = [(&'a str, String)];

/// Error body returned by the usage service
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the usage service.
///
/// Cheap to clone; clones share the connection pool. Holds no credentials
/// and no cached data.
#[derive(Debug, Clone)]
pub struct UsageClient {
    client: Client,
    base_url: String,
    platform: ClientPlatform,
}

impl UsageClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            platform: config.platform,
        })
    }

    /// Base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn platform(&self) -> ClientPlatform {
        self.platform
    }

    /// Run `request` unless `token` is cancelled first.
    ///
    /// Cancellation drops the in-flight request and yields
    /// [`ClientError::Cancelled`]. Use it when the account context changes
    /// while a fetch is pending.
    pub async fn cancellable<T, F>(token: &CancellationToken, request: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("Usage request cancelled by caller");
                Err(ClientError::Cancelled)
            }
            result = request => result,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the `Authorization` header, fetched just in time
    async fn authorize(
        request: RequestBuilder,
        auth: Option<&dyn AuthorizationProvider>,
    ) -> ClientResult<RequestBuilder> {
        match auth {
            Some(provider) => {
                let header = provider.authorization_header().await?;
                Ok(request.header(reqwest::header::AUTHORIZATION, header))
            }
            None => Ok(request),
        }
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        auth: Option<&dyn AuthorizationProvider>,
    ) -> ClientResult<T> {
        tracing::debug!(method = "GET", path, "Usage API request");
        let request = self.client.get(self.url(path)).query(query);
        let response = Self::authorize(request, auth).await?.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
        auth: Option<&dyn AuthorizationProvider>,
    ) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "Usage API request");
        let request = self.client.post(self.url(path)).query(query).json(body);
        let response = Self::authorize(request, auth).await?.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request whose response body is ignored
    pub(crate) async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
        auth: Option<&dyn AuthorizationProvider>,
    ) -> ClientResult<()> {
        tracing::debug!(method = "POST", path, "Usage API request");
        let request = self.client.post(self.url(path)).query(query).json(body);
        let response = Self::authorize(request, auth).await?.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Map non-success statuses to errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(ApiErrorResponse {
                code: Some(code),
                message,
            }) => match message {
                Some(message) => format!("{code}: {message}"),
                None => code,
            },
            Ok(ApiErrorResponse {
                code: None,
                message: Some(message),
            }) => message,
            _ => text,
        };

        tracing::debug!(status = status.as_u16(), %message, "Usage API error response");

        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

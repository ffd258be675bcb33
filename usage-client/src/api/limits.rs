//! Limits and recorded usages

use shared::models::{Limits, Usage};

use crate::auth::UserContext;
use crate::config::ClientPlatform;
use crate::{ClientResult, UsageClient};

impl UsageClient {
    /// Quotas, capabilities and credits of the user.
    ///
    /// Mobile clients send `platform=mobile` so app-store rules apply.
    pub async fn get_user_limits(&self, user: UserContext<'_>) -> ClientResult<Limits> {
        let mut query = vec![("userId", user.user_id.to_string())];
        if self.platform() == ClientPlatform::Mobile {
            query.push(("platform", "mobile".to_string()));
        }
        self.get("/limits", &query, Some(user.auth)).await
    }

    pub async fn get_user_usages(&self, user: UserContext<'_>) -> ClientResult<Vec<Usage>> {
        self.get("/usage", &[("userId", user.user_id.to_string())], Some(user.auth))
            .await
    }
}

//! Redemption code endpoints

use serde::Serialize;
use shared::models::RedemptionCode;

use crate::auth::UserContext;
use crate::{ClientResult, UsageClient};

#[derive(Serialize)]
struct RedeemCodeRequest<'a> {
    code: &'a str,
}

impl UsageClient {
    /// Redeem `code` for the user. Refresh the subscription afterwards to
    /// see the granted plan.
    pub async fn redeem_code(&self, user: UserContext<'_>, code: &str) -> ClientResult<()> {
        tracing::info!(user_id = user.user_id, "Redeeming code");
        self.post_no_content(
            "/redemption-code/action/redeem-code",
            &[("userId", user.user_id.to_string())],
            &RedeemCodeRequest { code },
            Some(user.auth),
        )
        .await
    }

    /// Codes made by or for the user
    pub async fn get_redemption_codes(
        &self,
        user: UserContext<'_>,
    ) -> ClientResult<Vec<RedemptionCode>> {
        self.get(
            "/redemption-code",
            &[("userId", user.user_id.to_string())],
            Some(user.auth),
        )
        .await
    }
}

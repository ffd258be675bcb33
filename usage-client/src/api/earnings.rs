//! Creator earnings endpoints

use serde::Serialize;
use shared::models::{CashOutType, UserEarningsBalance};

use crate::auth::UserContext;
use crate::{ClientError, ClientResult, UsageClient};

#[derive(Serialize)]
struct CashOutRequest {
    #[serde(rename = "type")]
    cash_out_type: CashOutType,
}

impl UsageClient {
    /// Earnings balance of the user.
    ///
    /// The endpoint answers with a list; it must be non-empty and only the
    /// first record is used.
    pub async fn get_user_earnings_balance(
        &self,
        user: UserContext<'_>,
    ) -> ClientResult<UserEarningsBalance> {
        let response: serde_json::Value = self
            .get(
                "/user-earnings-balance",
                &[("userId", user.user_id.to_string())],
                Some(user.auth),
            )
            .await?;

        let serde_json::Value::Array(balances) = response else {
            tracing::warn!(user_id = user.user_id, "Earnings balance response is not a list");
            return Err(ClientError::InvalidResponse(
                "Invalid response from the user earnings API".into(),
            ));
        };

        let first = balances.into_iter().next().ok_or_else(|| {
            ClientError::InvalidResponse("No user earnings balance found".into())
        })?;

        Ok(serde_json::from_value(first)?)
    }

    /// Pay earnings out as cash or as credits
    pub async fn cash_out_user_earnings(
        &self,
        user: UserContext<'_>,
        cash_out_type: CashOutType,
    ) -> ClientResult<()> {
        tracing::info!(user_id = user.user_id, ?cash_out_type, "Cashing out earnings");
        self.post_no_content(
            "/user-earnings-balance/action/cash-out",
            &[("userId", user.user_id.to_string())],
            &CashOutRequest { cash_out_type },
            Some(user.auth),
        )
        .await
    }
}

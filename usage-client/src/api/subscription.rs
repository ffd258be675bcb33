//! Subscription endpoints (`/subscription-v2`)

use serde::Serialize;
use shared::models::{CancelReasons, Subscription};

use crate::auth::UserContext;
use crate::{ClientError, ClientResult, UsageClient};

/// How a plan change treats the current subscription
#[derive(Debug, Clone, Default)]
pub struct ChangeSubscriptionOptions {
    /// End the current plan now instead of at the end of the period
    pub cancel_immediately: bool,
    pub cancel_reasons: CancelReasons,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeSubscriptionRequest<'a> {
    plan_id: Option<&'a str>,
    cancel_immediately: bool,
    cancel_reasons: &'a CancelReasons,
}

impl UsageClient {
    pub async fn get_user_subscription(&self, user: UserContext<'_>) -> ClientResult<Subscription> {
        self.get("/subscription-v2", &[("userId", user.user_id.to_string())], Some(user.auth))
            .await
    }

    /// Switch to `plan_id`, or cancel with `None`
    pub async fn change_user_subscription(
        &self,
        user: UserContext<'_>,
        plan_id: Option<&str>,
        options: &ChangeSubscriptionOptions,
    ) -> ClientResult<Subscription> {
        let body = ChangeSubscriptionRequest {
            plan_id,
            cancel_immediately: options.cancel_immediately,
            cancel_reasons: &options.cancel_reasons,
        };
        tracing::info!(user_id = user.user_id, ?plan_id, "Changing subscription");
        self.post(
            "/subscription-v2",
            &[("userId", user.user_id.to_string())],
            &body,
            Some(user.auth),
        )
        .await
    }

    /// URL of the payment processor's customer portal for this user
    pub async fn get_redirect_to_subscription_portal_url(
        &self,
        user: UserContext<'_>,
    ) -> ClientResult<String> {
        let response: serde_json::Value = self
            .post(
                "/subscription-v2/action/redirect-to-portal",
                &[("userId", user.user_id.to_string())],
                &serde_json::json!({}),
                Some(user.auth),
            )
            .await?;

        response
            .get("sessionPortalUrl")
            .and_then(serde_json::Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from)
            .ok_or_else(|| {
                tracing::warn!(user_id = user.user_id, "Portal response without session url");
                ClientError::InvalidResponse("Could not find the session portal url.".into())
            })
    }

    /// Checkout page URL for buying `pricing_system_id`.
    ///
    /// Built locally; the browser follows it. `quantity` is only sent for
    /// multi-seat purchases (more than one).
    pub fn redirect_to_checkout_url(
        &self,
        pricing_system_id: &str,
        user_id: &str,
        user_email: &str,
        quantity: Option<u32>,
    ) -> ClientResult<String> {
        let checkout = self.url("/subscription-v2/action/redirect-to-checkout-v2");
        let mut url =
            reqwest::Url::parse(&checkout).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("pricingSystemId", pricing_system_id)
                .append_pair("userId", user_id)
                .append_pair("customerEmail", user_email);
            if let Some(quantity) = quantity.filter(|q| *q > 1) {
                pairs.append_pair("quantity", &quantity.to_string());
            }
        }
        Ok(url.into())
    }
}

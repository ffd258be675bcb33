//! Plan and pricing-system catalog endpoints

use shared::models::{
    PricingSystem, SubscriptionPlan, SubscriptionPlanWithPricingSystems, attach_pricing_systems,
};

use crate::auth::UserContext;
use crate::{ClientResult, UsageClient};

fn include_legacy_param(include_legacy: bool) -> (&'static str, String) {
    ("includeLegacy", include_legacy.to_string())
}

impl UsageClient {
    /// List subscription plans.
    ///
    /// With a `user`, the request is authenticated and the server may add
    /// plans specific to that account.
    pub async fn list_subscription_plans(
        &self,
        include_legacy: bool,
        user: Option<UserContext<'_>>,
    ) -> ClientResult<Vec<SubscriptionPlan>> {
        let mut query = vec![include_legacy_param(include_legacy)];
        if let Some(user) = &user {
            query.push(("userId", user.user_id.to_string()));
        }
        self.get("/subscription-plan", &query, user.map(|u| u.auth))
            .await
    }

    /// Fetch one pricing system. A pricing system the server does not know
    /// is `Ok(None)`, not an error.
    pub async fn get_subscription_plan_pricing_system(
        &self,
        pricing_system_id: &str,
    ) -> ClientResult<Option<PricingSystem>> {
        let path = format!("/subscription-plan-pricing-system/{pricing_system_id}");
        match self.get(&path, &[], None).await {
            Ok(pricing_system) => Ok(Some(pricing_system)),
            Err(e) if e.is_not_found() => {
                tracing::warn!(pricing_system_id, "Pricing system not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// List pricing systems, optionally restricted to some plans
    pub async fn list_subscription_plan_pricing_systems(
        &self,
        subscription_plan_ids: Option<&[String]>,
        include_legacy: bool,
        user: Option<UserContext<'_>>,
    ) -> ClientResult<Vec<PricingSystem>> {
        let mut query = vec![include_legacy_param(include_legacy)];
        if let Some(ids) = subscription_plan_ids.filter(|ids| !ids.is_empty()) {
            query.push(("subscriptionPlanIds", ids.join(",")));
        }
        if let Some(user) = &user {
            query.push(("userId", user.user_id.to_string()));
        }
        self.get("/subscription-plan-pricing-system", &query, user.map(|u| u.auth))
            .await
    }

    /// Fetch plans and pricing systems concurrently and join them
    pub async fn list_subscription_plans_with_pricing_systems(
        &self,
        include_legacy: bool,
        user: Option<UserContext<'_>>,
    ) -> ClientResult<Vec<SubscriptionPlanWithPricingSystems>> {
        let (plans, pricing_systems) = tokio::try_join!(
            self.list_subscription_plans(include_legacy, user),
            self.list_subscription_plan_pricing_systems(None, include_legacy, user),
        )?;
        tracing::debug!(
            plans = plans.len(),
            pricing_systems = pricing_systems.len(),
            "Fetched subscription catalog"
        );
        Ok(attach_pricing_systems(plans, pricing_systems))
    }
}

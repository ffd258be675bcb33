//! Human-facing summary of an account's entitlement

use rust_decimal::Decimal;
use serde::Serialize;
use shared::AccountEntitlement;
use shared::entitlement::{
    SummarizedPlanFeature, filter_available_plans, summarize_plan_features,
};
use shared::models::{
    BillingPeriod, Currency, Limits, Subscription, SubscriptionPlanWithPricingSystems,
};

#[derive(Debug, Serialize)]
pub struct PriceLine {
    pub id: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub period: BillingPeriod,
    pub period_count: u32,
}

#[derive(Debug, Serialize)]
pub struct PlanCard {
    pub id: String,
    pub name: Option<String>,
    pub prices: Vec<PriceLine>,
    pub features: Vec<SummarizedPlanFeature>,
}

impl PlanCard {
    fn new(plan: &SubscriptionPlanWithPricingSystems, locale: &str) -> Self {
        Self {
            id: plan.id().to_string(),
            name: plan.plan.name_by_locale.select(locale).map(String::from),
            prices: plan
                .pricing_systems
                .iter()
                .map(|p| PriceLine {
                    id: p.id.clone(),
                    amount: p.amount(),
                    currency: p.currency,
                    period: p.period,
                    period_count: p.period_count,
                })
                .collect(),
            features: summarize_plan_features(plan, locale),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub user_id: String,
    pub entitlement: AccountEntitlement,
    /// Legacy plan the user is still billed on, as a card
    pub legacy_plan: Option<PlanCard>,
    /// Plans the user could buy now
    pub available_plans: Vec<PlanCard>,
    /// Quotas whose limit is reached
    pub exhausted_quotas: Vec<String>,
}

impl Report {
    pub fn build(
        plans: &[SubscriptionPlanWithPricingSystems],
        subscription: &Subscription,
        limits: &Limits,
        locale: &str,
    ) -> Self {
        let entitlement = AccountEntitlement::resolve(plans, Some(subscription), Some(limits));

        let mut exhausted_quotas: Vec<String> = limits
            .quotas
            .iter()
            .filter(|(_, quota)| quota.limit_reached)
            .map(|(name, _)| name.clone())
            .collect();
        exhausted_quotas.sort();

        Self {
            user_id: subscription.user_id.clone(),
            legacy_plan: entitlement
                .legacy_plan
                .as_ref()
                .map(|plan| PlanCard::new(plan, locale)),
            available_plans: filter_available_plans(plans)
                .iter()
                .filter(|plan| !plan.is_legacy())
                .map(|plan| PlanCard::new(plan, locale))
                .collect(),
            exhausted_quotas,
            entitlement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan(id: &str, is_legacy: bool, prices: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "isLegacy": is_legacy,
            "nameByLocale": {"en": format!("{id} (en)")},
            "descriptionByLocale": {},
            "fullFeatures": [
                {
                    "featureName": "builds", "pillarName": "publish",
                    "displayInSummary": true, "unlimited": true
                },
                {"featureName": "builds", "pillarName": "publish"}
            ],
            "featureNamesByLocale": {"builds": {"en": "Builds"}},
            "pricingSystems": prices
        })
    }

    fn price(id: &str, plan_id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id, "planId": plan_id, "period": "month", "currency": "EUR",
            "region": "eu", "status": status, "amountInCents": 1299, "periodCount": 1
        })
    }

    #[test]
    fn test_report_for_legacy_subscriber() {
        let plans: Vec<SubscriptionPlanWithPricingSystems> = serde_json::from_value(json!([
            plan(
                "gdevelop_silver",
                false,
                json!([price("silver_month", "gdevelop_silver", "active")])
            ),
            plan("gdevelop_indie", true, json!([
                price("indie_month", "gdevelop_indie", "inactive"),
                price("indie_year", "gdevelop_indie", "active")
            ])),
        ]))
        .unwrap();
        let subscription: Subscription = serde_json::from_value(json!({
            "userId": "user-1",
            "planId": "gdevelop_indie",
            "pricingSystemId": "indie_month",
            "createdAt": 0,
            "updatedAt": 0
        }))
        .unwrap();
        let limits: Limits = serde_json::from_value(json!({
            "quotas": {
                "ai-request": {"limitReached": true, "current": 5, "max": 5},
                "cordova-build": {"limitReached": false, "current": 0, "max": 2}
            },
            "capabilities": {
                "analytics": {
                    "sessions": true, "players": true, "retention": true,
                    "sessionsTimeStats": true, "platforms": true
                },
                "cloudProjects": {
                    "maximumCount": 50, "canMaximumCountBeIncreased": false,
                    "maximumGuestCollaboratorsPerProject": 2
                },
                "leaderboards": {
                    "maximumCountPerGame": 10, "canMaximumCountPerGameBeIncreased": false,
                    "themeCustomizationCapabilities": "FULL", "canUseCustomCss": true,
                    "canDisableLoginInLeaderboard": true
                },
                "multiplayer": {
                    "lobbiesCount": 5, "maxPlayersPerLobby": 8,
                    "themeCustomizationCapabilities": "FULL"
                },
                "versionHistory": {"enabled": true}
            },
            "credits": {"userBalance": {"amount": 0}}
        }))
        .unwrap();

        let report = Report::build(&plans, &subscription, &limits, "en");

        assert!(report.entitlement.has_valid_plan);
        let legacy = report.legacy_plan.unwrap();
        assert_eq!(legacy.prices.len(), 1);
        assert_eq!(legacy.prices[0].id, "indie_month");
        assert_eq!(legacy.prices[0].amount.to_string(), "12.99");
        assert_eq!(legacy.features.len(), 1);
        assert_eq!(legacy.features[0].unlimited, Some(true));

        let ids: Vec<_> = report.available_plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["gdevelop_silver"]);
        assert_eq!(report.available_plans[0].name.as_deref(), Some("gdevelop_silver (en)"));
        assert_eq!(report.exhausted_quotas, vec!["ai-request".to_string()]);
        assert!(report.entitlement.can_use_cloud_project_history);
    }
}

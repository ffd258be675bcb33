//! Resolved entitlement snapshot of one account

use serde::{Deserialize, Serialize};

use crate::models::{Limits, PricingSystem, Subscription, SubscriptionPlanWithPricingSystems};

use super::catalog::{find_plan, find_pricing_system, legacy_plan_with_pricing_system};
use super::predicates;

/// Where the current plan comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOrigin {
    /// No valid plan
    None,
    /// Billed through a catalog price
    Catalog,
    /// Bought in a mobile app store
    MobileAppStore,
    /// Granted by a redemption code
    RedemptionCode,
    /// Set by an administrator
    ManuallyAdded,
    /// Inherited from a team
    TeamMember,
}

/// Everything the UI asks about an account's subscription, computed once
/// from the fetched catalog, subscription and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEntitlement {
    pub has_valid_plan: bool,
    pub plan_id: Option<String>,
    pub origin: PlanOrigin,
    /// Catalog record of the current plan, when the plan is valid and known
    pub plan: Option<SubscriptionPlanWithPricingSystems>,
    /// Current catalog price, `None` for out-of-band grants
    pub pricing_system: Option<PricingSystem>,
    /// Legacy plan narrowed to the subscriber's price
    pub legacy_plan: Option<SubscriptionPlanWithPricingSystems>,
    /// The subscription's pricing system id refers to a catalog entry
    pub can_price_be_found_in_catalog: bool,
    pub has_mobile_app_store_subscription: bool,
    pub was_manually_added: bool,
    pub is_coming_from_team: bool,
    pub can_upgrade: bool,
    pub can_benefit_from_discord_role: bool,
    pub can_use_classroom_feature: bool,
    pub should_hide_classroom_tab: bool,
    pub can_use_cloud_project_history: bool,
}

impl AccountEntitlement {
    /// Resolve against the current time
    pub fn resolve(
        plans: &[SubscriptionPlanWithPricingSystems],
        subscription: Option<&Subscription>,
        limits: Option<&Limits>,
    ) -> Self {
        Self::resolve_at(plans, subscription, limits, crate::util::now_millis())
    }

    /// Resolve as of `now` (Unix millis).
    ///
    /// Paid-plan answers are gated on
    /// [`has_valid_subscription_plan_at`](predicates::has_valid_subscription_plan_at):
    /// an account whose plan is not valid gets no plan, no price, no legacy
    /// projection and no plan-based benefit. Flags describing where the
    /// subscription comes from read it as fetched. Capability answers come
    /// from `limits` alone, which the server already computes per account.
    pub fn resolve_at(
        plans: &[SubscriptionPlanWithPricingSystems],
        subscription: Option<&Subscription>,
        limits: Option<&Limits>,
        now: i64,
    ) -> Self {
        let has_valid_plan = predicates::has_valid_subscription_plan_at(subscription, now);
        let valid = if has_valid_plan { subscription } else { None };

        let plan_id = valid.and_then(Subscription::plan_id).map(String::from);
        let plan = plan_id
            .as_deref()
            .and_then(|id| find_plan(plans, id))
            .cloned();
        let pricing_system = valid
            .and_then(Subscription::pricing_system_id)
            .and_then(|id| find_pricing_system(plans, id))
            .cloned();

        let entitlement = Self {
            has_valid_plan,
            origin: Self::origin(valid),
            plan_id,
            plan,
            pricing_system,
            legacy_plan: legacy_plan_with_pricing_system(plans, valid),
            can_price_be_found_in_catalog: subscription
                .and_then(Subscription::pricing_system_id)
                .is_some_and(predicates::can_price_be_found_in_catalog),
            has_mobile_app_store_subscription: predicates::has_mobile_app_store_subscription(
                subscription,
            ),
            was_manually_added: predicates::was_manually_added(subscription),
            is_coming_from_team: predicates::is_coming_from_team(subscription),
            // Upgrade offers also target accounts without a plan, and an
            // expired plan counts as no plan
            can_upgrade: match valid {
                Some(_) => predicates::can_upgrade_subscription(valid),
                None => subscription.is_some_and(|s| !s.benefits_from_education_plan()),
            },
            can_benefit_from_discord_role: predicates::can_benefit_from_discord_role(valid),
            can_use_classroom_feature: predicates::can_use_classroom_feature(limits),
            should_hide_classroom_tab: predicates::should_hide_classroom_tab(limits),
            can_use_cloud_project_history: predicates::can_use_cloud_project_history(limits),
        };

        tracing::debug!(
            plan_id = ?entitlement.plan_id,
            origin = ?entitlement.origin,
            legacy = entitlement.legacy_plan.is_some(),
            "Resolved account entitlement"
        );

        entitlement
    }

    fn origin(valid: Option<&Subscription>) -> PlanOrigin {
        use crate::models::pricing_system::sentinel;

        let Some(subscription) = valid else {
            return PlanOrigin::None;
        };
        if predicates::has_mobile_app_store_subscription(valid) {
            return PlanOrigin::MobileAppStore;
        }
        if predicates::was_manually_added(valid) {
            return PlanOrigin::ManuallyAdded;
        }
        if predicates::is_coming_from_team(valid) {
            return PlanOrigin::TeamMember;
        }
        if subscription.pricing_system_id() == Some(sentinel::REDEMPTION_CODE)
            || subscription.redemption_code_valid_until.is_some()
        {
            return PlanOrigin::RedemptionCode;
        }
        PlanOrigin::Catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitlement::fixtures::{catalog, plan_with, price};
    use crate::models::PricingSystemStatus::{Active, Inactive};
    use crate::models::limits::fixtures;

    const NOW: i64 = 1_700_000_000_000;

    fn subscription(plan: &str, pricing_system: &str) -> Subscription {
        Subscription {
            user_id: "user-1".into(),
            plan_id: Some(plan.into()),
            pricing_system_id: Some(pricing_system.into()),
            created_at: NOW - 1_000,
            updated_at: NOW - 1_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_catalog_subscription() {
        let plans = catalog();
        let sub = subscription("gdevelop_gold", "gold_year");
        let limits = fixtures::limits();

        let resolved = AccountEntitlement::resolve_at(&plans, Some(&sub), Some(&limits), NOW);

        assert!(resolved.has_valid_plan);
        assert_eq!(resolved.origin, PlanOrigin::Catalog);
        assert_eq!(resolved.plan.as_ref().map(|p| p.id()), Some("gdevelop_gold"));
        assert_eq!(resolved.pricing_system.as_ref().map(|p| p.id.as_str()), Some("gold_year"));
        assert!(resolved.legacy_plan.is_none());
        assert!(resolved.can_price_be_found_in_catalog);
        assert!(resolved.can_upgrade);
        assert!(resolved.can_benefit_from_discord_role);
        assert!(!resolved.can_use_cloud_project_history);
    }

    #[test]
    fn test_resolve_legacy_subscription() {
        let mut plans = catalog();
        plans.push(plan_with(
            "gdevelop_indie",
            true,
            vec![
                price("indie_month", "gdevelop_indie", Inactive),
                price("indie_year", "gdevelop_indie", Active),
            ],
        ));
        let sub = subscription("gdevelop_indie", "indie_month");

        let resolved = AccountEntitlement::resolve_at(&plans, Some(&sub), None, NOW);

        let legacy = resolved.legacy_plan.unwrap();
        assert_eq!(legacy.pricing_systems.len(), 1);
        assert_eq!(legacy.pricing_systems[0].id, "indie_month");
        assert!(!resolved.can_benefit_from_discord_role);
    }

    #[test]
    fn test_resolve_expired_redemption_code_grants_nothing() {
        let plans = catalog();
        let mut sub = subscription("gdevelop_gold", "REDEMPTION_CODE");
        sub.redemption_code = Some("GOLD-2023".into());
        sub.redemption_code_valid_until = Some(NOW - 1);

        let resolved = AccountEntitlement::resolve_at(&plans, Some(&sub), None, NOW);

        assert!(!resolved.has_valid_plan);
        assert_eq!(resolved.origin, PlanOrigin::None);
        assert!(resolved.plan_id.is_none());
        assert!(resolved.plan.is_none());
        assert!(!resolved.can_benefit_from_discord_role);
    }

    #[test]
    fn test_expired_plan_can_be_upgraded() {
        let plans = catalog();
        let mut sub = subscription("gdevelop_startup", "REDEMPTION_CODE");
        sub.redemption_code_valid_until = Some(NOW - 1);

        let resolved = AccountEntitlement::resolve_at(&plans, Some(&sub), None, NOW);
        assert!(!resolved.has_valid_plan);
        assert_eq!(resolved.origin, PlanOrigin::None);
        assert!(resolved.can_upgrade);

        let planless = Subscription {
            user_id: "user-1".into(),
            ..Default::default()
        };
        let resolved = AccountEntitlement::resolve_at(&plans, Some(&planless), None, NOW);
        assert!(!resolved.has_valid_plan);
        assert!(resolved.can_upgrade);

        let student = Subscription {
            benefits_from_education_plan: Some(true),
            ..planless
        };
        let resolved = AccountEntitlement::resolve_at(&plans, Some(&student), None, NOW);
        assert!(!resolved.can_upgrade);
    }

    #[test]
    fn test_resolve_active_redemption_code() {
        let plans = catalog();
        let mut sub = subscription("gdevelop_gold", "REDEMPTION_CODE");
        sub.redemption_code_valid_until = Some(NOW + 86_400_000);

        let resolved = AccountEntitlement::resolve_at(&plans, Some(&sub), None, NOW);

        assert!(resolved.has_valid_plan);
        assert_eq!(resolved.origin, PlanOrigin::RedemptionCode);
        assert!(resolved.plan.is_some());
        assert!(resolved.pricing_system.is_none());
    }

    #[test]
    fn test_resolve_out_of_band_origins() {
        let plans = catalog();

        let team = subscription("gdevelop_startup", "TEAM_MEMBER");
        let resolved = AccountEntitlement::resolve_at(&plans, Some(&team), None, NOW);
        assert_eq!(resolved.origin, PlanOrigin::TeamMember);
        assert!(resolved.is_coming_from_team);
        assert!(!resolved.can_price_be_found_in_catalog);
        assert!(!resolved.can_upgrade);

        let manual = subscription("gdevelop_silver", "MANUALLY_ADDED");
        let resolved = AccountEntitlement::resolve_at(&plans, Some(&manual), None, NOW);
        assert_eq!(resolved.origin, PlanOrigin::ManuallyAdded);
        assert!(resolved.was_manually_added);
        assert!(resolved.pricing_system.is_none());

        let mut store = subscription("gdevelop_silver", "PURCHASELY_silver_month");
        store.purchasely_plan = Some("silver_month".into());
        let resolved = AccountEntitlement::resolve_at(&plans, Some(&store), None, NOW);
        assert_eq!(resolved.origin, PlanOrigin::MobileAppStore);
        assert!(resolved.has_mobile_app_store_subscription);
        assert!(!resolved.can_price_be_found_in_catalog);
    }

    #[test]
    fn test_resolve_without_account_data() {
        let resolved = AccountEntitlement::resolve_at(&catalog(), None, None, NOW);

        assert!(!resolved.has_valid_plan);
        assert_eq!(resolved.origin, PlanOrigin::None);
        assert!(!resolved.can_price_be_found_in_catalog);
        assert!(!resolved.can_upgrade);
        assert!(!resolved.can_benefit_from_discord_role);
        assert!(!resolved.can_use_classroom_feature);
        assert!(!resolved.should_hide_classroom_tab);
        assert!(!resolved.can_use_cloud_project_history);
    }
}

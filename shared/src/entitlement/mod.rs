//! Entitlement resolution
//!
//! Pure, synchronous functions over already-fetched catalog and account
//! data. No caching happens here: the caller owns catalog snapshots and
//! decides when to refetch them.

pub mod account;
pub mod catalog;
pub mod features;
pub mod predicates;

pub use account::{AccountEntitlement, PlanOrigin};
pub use catalog::{
    filter_available_plans, find_plan, find_pricing_system, legacy_plan_with_pricing_system,
};
pub use features::{SummarizedPlanFeature, summarize_plan_features};
pub use predicates::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::HashMap;

    use crate::models::{
        BillingPeriod, Currency, MessageByLocale, PricingSystem, PricingSystemStatus,
        SubscriptionPlan, SubscriptionPlanWithPricingSystems, TargetAudience,
    };

    pub fn price(id: &str, plan_id: &str, status: PricingSystemStatus) -> PricingSystem {
        PricingSystem {
            id: id.to_string(),
            plan_id: plan_id.to_string(),
            period: BillingPeriod::Month,
            is_per_user: None,
            currency: Currency::Eur,
            region: "eu".to_string(),
            status,
            amount_in_cents: 999,
            period_count: 1,
        }
    }

    pub fn plan_with(
        id: &str,
        is_legacy: bool,
        pricing_systems: Vec<PricingSystem>,
    ) -> SubscriptionPlanWithPricingSystems {
        SubscriptionPlanWithPricingSystems {
            plan: SubscriptionPlan {
                id: id.to_string(),
                is_legacy,
                name_by_locale: MessageByLocale::new().with("en", id),
                description_by_locale: MessageByLocale::new(),
                bullet_points_by_locale: vec![],
                specific_requirement_by_locale: None,
                target_audiences: vec![TargetAudience::Pro],
                full_features: vec![],
                pillar_names_per_locale: HashMap::new(),
                feature_names_by_locale: HashMap::new(),
            },
            pricing_systems,
        }
    }

    /// Current (non-legacy) catalog
    pub fn catalog() -> Vec<SubscriptionPlanWithPricingSystems> {
        use PricingSystemStatus::Active;

        vec![
            plan_with(
                "gdevelop_silver",
                false,
                vec![price("silver_month", "gdevelop_silver", Active)],
            ),
            plan_with(
                "gdevelop_gold",
                false,
                vec![
                    price("gold_month", "gdevelop_gold", Active),
                    price("gold_year", "gdevelop_gold", Active),
                ],
            ),
            plan_with(
                "gdevelop_startup",
                false,
                vec![price("startup_month", "gdevelop_startup", Active)],
            ),
        ]
    }
}

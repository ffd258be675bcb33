//! Subscription plan catalog records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::locale::MessageByLocale;
use super::pricing_system::PricingSystem;

/// Well-known plan ids
pub mod plan_id {
    pub const SILVER: &str = "gdevelop_silver";
    pub const GOLD: &str = "gdevelop_gold";
    pub const STARTUP: &str = "gdevelop_startup";
    pub const EDUCATION: &str = "gdevelop_education";
}

/// Minimum number of seats of an education plan
pub const EDUCATION_PLAN_MIN_SEATS: u32 = 5;
/// Maximum number of seats of an education plan
pub const EDUCATION_PLAN_MAX_SEATS: u32 = 300;

/// Audience a plan is marketed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetAudience {
    Casual,
    Pro,
    Education,
}

/// Availability of a feature in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureAvailability {
    Yes,
    No,
}

/// One row of a plan's feature table.
///
/// Every flag is optional: unset means "not applicable", which is not the
/// same thing as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeature {
    pub feature_name: String,
    pub pillar_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_by_locale: Option<MessageByLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_by_locale: Option<MessageByLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<FeatureAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_like: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_in_summary: Option<bool>,
}

/// Plan as listed by `/subscription-plan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    /// No longer sold, still billed for existing holders
    pub is_legacy: bool,
    pub name_by_locale: MessageByLocale,
    pub description_by_locale: MessageByLocale,
    #[serde(default)]
    pub bullet_points_by_locale: Vec<MessageByLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_requirement_by_locale: Option<MessageByLocale>,
    #[serde(default)]
    pub target_audiences: Vec<TargetAudience>,
    #[serde(default)]
    pub full_features: Vec<PlanFeature>,
    #[serde(default)]
    pub pillar_names_per_locale: HashMap<String, MessageByLocale>,
    #[serde(default)]
    pub feature_names_by_locale: HashMap<String, MessageByLocale>,
}

/// Plan together with the pricing systems it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanWithPricingSystems {
    #[serde(flatten)]
    pub plan: SubscriptionPlan,
    pub pricing_systems: Vec<PricingSystem>,
}

impl SubscriptionPlanWithPricingSystems {
    pub fn id(&self) -> &str {
        &self.plan.id
    }

    pub fn is_legacy(&self) -> bool {
        self.plan.is_legacy
    }

    /// New record sharing this plan's data with another pricing list
    pub fn with_pricing_systems(&self, pricing_systems: Vec<PricingSystem>) -> Self {
        Self {
            plan: self.plan.clone(),
            pricing_systems,
        }
    }
}

/// Join a plan list with a pricing-system list on `plan_id`.
///
/// Plan order is preserved; pricing systems keep their listing order within
/// each plan. Pricing systems of unknown plans are dropped.
pub fn attach_pricing_systems(
    plans: Vec<SubscriptionPlan>,
    pricing_systems: Vec<PricingSystem>,
) -> Vec<SubscriptionPlanWithPricingSystems> {
    let mut by_plan: HashMap<String, Vec<PricingSystem>> = HashMap::new();
    for pricing_system in pricing_systems {
        by_plan
            .entry(pricing_system.plan_id.clone())
            .or_default()
            .push(pricing_system);
    }

    let attached: Vec<_> = plans
        .into_iter()
        .map(|plan| {
            let pricing_systems = by_plan.remove(&plan.id).unwrap_or_default();
            SubscriptionPlanWithPricingSystems {
                plan,
                pricing_systems,
            }
        })
        .collect();

    if !by_plan.is_empty() {
        tracing::warn!(
            orphan_plans = ?by_plan.keys().collect::<Vec<_>>(),
            "Pricing systems reference plans missing from the catalog"
        );
    }

    attached
}

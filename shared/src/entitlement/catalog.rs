//! Plan / pricing-system matching over a fetched catalog snapshot
//!
//! Nothing here mutates the catalog: narrowed plans are new records, so a
//! caller-cached snapshot stays intact across lookups.

use crate::models::{PricingSystem, Subscription, SubscriptionPlanWithPricingSystems};

use super::predicates::can_price_be_found_in_catalog;

/// First plan with the given id
pub fn find_plan<'a>(
    plans: &'a [SubscriptionPlanWithPricingSystems],
    plan_id: &str,
) -> Option<&'a SubscriptionPlanWithPricingSystems> {
    plans.iter().find(|plan| plan.id() == plan_id)
}

/// Plans that can be bought right now.
///
/// Each plan keeps only its `active` pricing systems. Plans left with no
/// active pricing system are dropped entirely.
pub fn filter_available_plans(
    plans: &[SubscriptionPlanWithPricingSystems],
) -> Vec<SubscriptionPlanWithPricingSystems> {
    plans
        .iter()
        .filter_map(|plan| {
            let active: Vec<PricingSystem> = plan
                .pricing_systems
                .iter()
                .filter(|pricing_system| pricing_system.is_active())
                .cloned()
                .collect();
            if active.is_empty() {
                None
            } else {
                Some(plan.with_pricing_systems(active))
            }
        })
        .collect()
}

/// The legacy plan a subscriber is still billed on, narrowed to their price.
///
/// Returns `None` unless the subscription has both a plan and a pricing
/// system, the plan is in the catalog and marked legacy, and the plan owns
/// that pricing system. The returned record carries exactly one pricing
/// system: the subscriber's.
pub fn legacy_plan_with_pricing_system(
    plans: &[SubscriptionPlanWithPricingSystems],
    subscription: Option<&Subscription>,
) -> Option<SubscriptionPlanWithPricingSystems> {
    let subscription = subscription?;
    let plan_id = subscription.plan_id()?;
    let pricing_system_id = subscription.pricing_system_id()?;

    let plan = find_plan(plans, plan_id)?;
    if !plan.is_legacy() {
        return None;
    }

    let pricing_system = plan
        .pricing_systems
        .iter()
        .find(|pricing_system| pricing_system.id == pricing_system_id)?;

    Some(plan.with_pricing_systems(vec![pricing_system.clone()]))
}

/// Look a pricing system up across every plan of the catalog.
///
/// Sentinel ids short-circuit to `None` without scanning.
pub fn find_pricing_system<'a>(
    plans: &'a [SubscriptionPlanWithPricingSystems],
    pricing_system_id: &str,
) -> Option<&'a PricingSystem> {
    if !can_price_be_found_in_catalog(pricing_system_id) {
        return None;
    }
    plans
        .iter()
        .flat_map(|plan| plan.pricing_systems.iter())
        .find(|pricing_system| pricing_system.id == pricing_system_id)
}

//! Entitlement predicates
//!
//! Every predicate takes possibly-absent account data (logged out, not
//! loaded yet) and answers "no entitlement" for it instead of failing.

use crate::models::pricing_system::sentinel;
use crate::models::plan::plan_id;
use crate::models::{Limits, Subscription};
use crate::util::now_millis;

/// Plans that cannot be upgraded from the subscription dialog
pub const UPGRADE_EXCLUDED_PLAN_IDS: [&str; 2] = [plan_id::EDUCATION, plan_id::STARTUP];

/// Plans whose holders get the community role
pub const ROLE_BENEFIT_PLAN_IDS: [&str; 3] = [plan_id::EDUCATION, plan_id::STARTUP, plan_id::GOLD];

/// Whether a pricing system id refers to an entry of the price catalog.
///
/// False for out-of-band grants (redemption code, manual, team) and for
/// app-store prices sold through the reseller.
pub fn can_price_be_found_in_catalog(pricing_system_id: &str) -> bool {
    if sentinel::ALL.contains(&pricing_system_id) {
        return false;
    }
    !pricing_system_id.starts_with(sentinel::PURCHASELY_PREFIX)
}

/// Subscription bought through a mobile app store
pub fn has_mobile_app_store_subscription(subscription: Option<&Subscription>) -> bool {
    subscription
        .and_then(|s| s.purchasely_plan.as_deref())
        .is_some_and(|plan| !plan.is_empty())
}

pub fn was_manually_added(subscription: Option<&Subscription>) -> bool {
    subscription.and_then(Subscription::pricing_system_id) == Some(sentinel::MANUALLY_ADDED)
}

pub fn is_coming_from_team(subscription: Option<&Subscription>) -> bool {
    subscription.and_then(Subscription::pricing_system_id) == Some(sentinel::TEAM_MEMBER)
}

/// Whether the account currently has paid access.
///
/// This is the one place validity is decided: anything gating paid features
/// must go through it.
pub fn has_valid_subscription_plan(subscription: Option<&Subscription>) -> bool {
    has_valid_subscription_plan_at(subscription, now_millis())
}

/// [`has_valid_subscription_plan`] evaluated at `now` (Unix millis).
///
/// A plan is valid when set, unless it came with a redemption code whose
/// validity ended at or before `now`.
pub fn has_valid_subscription_plan_at(subscription: Option<&Subscription>, now: i64) -> bool {
    let Some(subscription) = subscription else {
        return false;
    };
    if subscription.plan_id().is_none() {
        return false;
    }
    match subscription.redemption_code_valid_until {
        None => true,
        Some(valid_until) => valid_until > now,
    }
}

/// Whether higher plans can be offered to this account
pub fn can_upgrade_subscription(subscription: Option<&Subscription>) -> bool {
    let Some(subscription) = subscription else {
        return false;
    };
    let excluded = subscription
        .plan_id()
        .is_some_and(|id| UPGRADE_EXCLUDED_PLAN_IDS.contains(&id));
    !excluded && !subscription.benefits_from_education_plan()
}

/// Whether the account can claim the community role that comes with top plans
pub fn can_benefit_from_discord_role(subscription: Option<&Subscription>) -> bool {
    let Some(subscription) = subscription else {
        return false;
    };
    let allowed = subscription
        .plan_id()
        .is_some_and(|id| ROLE_BENEFIT_PLAN_IDS.contains(&id));
    allowed && !subscription.benefits_from_education_plan()
}

/// Whether switching to `plan_id` can happen without a new checkout.
///
/// Always false: the payment processor cannot move a subscription between
/// prices of different currencies, and the backend does not compare them
/// yet. Callers must go through checkout.
// TODO: compare currencies once the backend exposes seamless plan changes.
pub fn can_seamlessly_change_subscription(_subscription: &Subscription, _plan_id: &str) -> bool {
    false
}

/// Classroom features are unlocked for the account
pub fn can_use_classroom_feature(limits: Option<&Limits>) -> bool {
    limits
        .and_then(|l| l.capabilities.classrooms.as_ref())
        .is_some_and(|classrooms| classrooms.show_classroom_tab)
}

/// Classroom tab must be hidden: classroom settings exist but do not show it
pub fn should_hide_classroom_tab(limits: Option<&Limits>) -> bool {
    limits
        .and_then(|l| l.capabilities.classrooms.as_ref())
        .is_some_and(|classrooms| !classrooms.show_classroom_tab)
}

pub fn can_use_cloud_project_history(limits: Option<&Limits>) -> bool {
    limits.is_some_and(|l| l.capabilities.version_history.enabled)
}

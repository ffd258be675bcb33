//! Account subscription state (`/subscription-v2`)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answer to one cancellation survey question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CancelReason {
    Checked(bool),
    Text(String),
}

/// Cancellation survey answers keyed by question
pub type CancelReasons = HashMap<String, CancelReason>;

/// Subscription record of a user.
///
/// An empty subscription has `plan_id` and `pricing_system_id` set to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub user_id: String,
    pub plan_id: Option<String>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
    /// Catalog pricing system id, or one of the
    /// [`sentinel`](crate::models::pricing_system::sentinel) ids
    pub pricing_system_id: Option<String>,

    // Stripe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    // PayPal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_payer_id: Option<String>,
    // Mobile app stores, through the Purchasely reseller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchasely_plan: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_at_period_end: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reasons: Option<CancelReasons>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption_code: Option<String>,
    /// Unix millis after which a redeemed plan stops applying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption_code_valid_until: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_from_education_plan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_teacher: Option<bool>,
}

impl Subscription {
    /// Plan id, treating an empty string as no plan
    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Pricing system id, treating an empty string as none
    pub fn pricing_system_id(&self) -> Option<&str> {
        self.pricing_system_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn benefits_from_education_plan(&self) -> bool {
        self.benefits_from_education_plan.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_deserialize_nulls() {
        let json = r#"{
            "userId": "user-1",
            "planId": null,
            "createdAt": 1700000000000,
            "updatedAt": 1700000000000,
            "pricingSystemId": null,
            "redemptionCode": null,
            "redemptionCodeValidUntil": null
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.plan_id(), None);
        assert_eq!(sub.pricing_system_id(), None);
        assert_eq!(sub.redemption_code_valid_until, None);
        assert!(!sub.benefits_from_education_plan());
    }

    #[test]
    fn test_cancel_reasons_mixed_values() {
        let json = r#"{
            "userId": "user-1",
            "planId": "gdevelop_silver",
            "createdAt": 0,
            "updatedAt": 0,
            "pricingSystemId": "PRICE_1",
            "cancelAtPeriodEnd": true,
            "cancelReasons": {"too-expensive": true, "other": "moved to another engine"}
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        let reasons = sub.cancel_reasons.unwrap();
        assert_eq!(reasons["too-expensive"], CancelReason::Checked(true));
        assert_eq!(
            reasons["other"],
            CancelReason::Text("moved to another engine".to_string())
        );
    }

    #[test]
    fn test_empty_plan_id_is_no_plan() {
        let sub = Subscription {
            plan_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(sub.plan_id(), None);
    }
}

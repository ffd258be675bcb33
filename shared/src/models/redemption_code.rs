//! Redemption codes (`/redemption-code`)

use serde::{Deserialize, Serialize};

/// A code granting a plan for a limited duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionCode {
    pub code: String,
    pub given_subscription_plan_id: Option<String>,
    pub duration_in_days: u32,
    pub max_usage_count: u32,
    pub remaining_usage_count: u32,
    pub made_by: String,
    pub made_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

impl RedemptionCode {
    pub fn is_exhausted(&self) -> bool {
        self.remaining_usage_count == 0
    }
}

//! Subscription plan pricing systems (price/period/currency offers)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing system ids that are not catalog prices.
///
/// These mark entitlements granted out of band and never resolve to an
/// entry of the pricing-system catalog.
pub mod sentinel {
    /// Plan granted by a redemption code
    pub const REDEMPTION_CODE: &str = "REDEMPTION_CODE";
    /// Plan set by hand by an administrator
    pub const MANUALLY_ADDED: &str = "MANUALLY_ADDED";
    /// Plan inherited from a team owner's subscription
    pub const TEAM_MEMBER: &str = "TEAM_MEMBER";
    /// Prefix of pricing systems billed through the mobile app stores reseller
    pub const PURCHASELY_PREFIX: &str = "PURCHASELY_";

    /// Exact-match sentinel ids
    pub const ALL: [&str; 3] = [REDEMPTION_CODE, MANUALLY_ADDED, TEAM_MEMBER];
}

/// Billing period unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Week,
    Month,
    Year,
}

/// Billing currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
}

/// Whether a pricing system can be offered to new subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingSystemStatus {
    Active,
    Inactive,
}

/// A price attached to a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSystem {
    pub id: String,
    pub plan_id: String,
    pub period: BillingPeriod,
    /// Price is per seat (team and education plans)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_per_user: Option<bool>,
    pub currency: Currency,
    pub region: String,
    pub status: PricingSystemStatus,
    /// Price in minor currency units
    pub amount_in_cents: i64,
    /// Billed every `period_count` periods
    pub period_count: u32,
}

impl PricingSystem {
    pub fn is_active(&self) -> bool {
        self.status == PricingSystemStatus::Active
    }

    /// Price in major currency units (e.g. 4.99)
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.amount_in_cents, 2)
    }
}

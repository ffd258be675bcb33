//! Usage limits of an account (`/limits`)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rolling window a quota is counted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaPeriod {
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "30days")]
    ThirtyDays,
}

/// Current consumption of one resource (e.g. remaining builds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    pub limit_reached: bool,
    pub current: i64,
    pub max: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<QuotaPeriod>,
}

impl Quota {
    pub fn remaining(&self) -> i64 {
        (self.max - self.current).max(0)
    }
}

/// Quotas keyed by resource name
pub type Quotas = HashMap<String, Quota>;

/// How much of a theme can be customized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeCustomization {
    None,
    Basic,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsCapabilities {
    pub sessions: bool,
    pub players: bool,
    pub retention: bool,
    pub sessions_time_stats: bool,
    pub platforms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudProjectsCapabilities {
    pub maximum_count: i64,
    pub can_maximum_count_be_increased: bool,
    pub maximum_guest_collaborators_per_project: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardsCapabilities {
    pub maximum_count_per_game: i64,
    pub can_maximum_count_per_game_be_increased: bool,
    pub theme_customization_capabilities: ThemeCustomization,
    pub can_use_custom_css: bool,
    pub can_disable_login_in_leaderboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTutorialsCapabilities {
    pub allowed_id_prefixes: Vec<String>,
}

/// Home-screen switches applied to classroom (education) accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomsCapabilities {
    pub hide_ask_ai: bool,
    pub hide_announcements: bool,
    pub hide_play_tab: bool,
    pub hide_socials: bool,
    pub hide_premium_products: bool,
    pub hide_upgrade_notice: bool,
    pub show_classroom_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplayerCapabilities {
    pub lobbies_count: i64,
    pub max_players_per_lobby: i64,
    pub theme_customization_capabilities: ThemeCustomization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHistoryCapabilities {
    pub enabled: bool,
}

/// Feature ceilings of the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub analytics: AnalyticsCapabilities,
    pub cloud_projects: CloudProjectsCapabilities,
    pub leaderboards: LeaderboardsCapabilities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_tutorials: Option<PrivateTutorialsCapabilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classrooms: Option<ClassroomsCapabilities>,
    pub multiplayer: MultiplayerCapabilities,
    pub version_history: VersionHistoryCapabilities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablePrice {
    pub minimum_price_in_credits: i64,
    pub maximum_price_in_credits: i64,
}

/// Price of one usage in credits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePrice {
    pub price_in_credits: i64,
    /// sub-usage type → variant → price range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_price: Option<HashMap<String, HashMap<String, VariablePrice>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasableQuantity {
    pub purchasable_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBalance {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    pub user_balance: UserBalance,
    #[serde(default)]
    pub prices: HashMap<String, UsagePrice>,
    #[serde(default)]
    pub purchasable_quantities: HashMap<String, PurchasableQuantity>,
}

/// Limits communicated by the API for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    #[serde(default)]
    pub quotas: Quotas,
    pub capabilities: Capabilities,
    pub credits: Credits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Limits {
    pub fn quota(&self, name: &str) -> Option<&Quota> {
        self.quotas.get(name)
    }
}

//! Recorded usages (`/usage`)

use serde::{Deserialize, Serialize};

/// One consumed usage (a build, a preview upload, an AI request...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub usage_type: String,
    /// Unix millis
    pub created_at: i64,
}

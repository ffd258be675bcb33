//! Creator earnings (`/user-earnings-balance`)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings accumulated by a creator from sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEarningsBalance {
    pub user_id: String,
    #[serde(rename = "amountInMilliUSDs")]
    pub amount_in_milli_usds: i64,
    pub amount_in_credits: i64,
    #[serde(rename = "minAmountToCashoutInMilliUSDs")]
    pub min_amount_to_cashout_in_milli_usds: i64,
    /// Unix millis
    pub updated_at: i64,
}

impl UserEarningsBalance {
    /// Balance in USD
    pub fn amount_in_usd(&self) -> Decimal {
        Decimal::new(self.amount_in_milli_usds, 3)
    }

    pub fn can_cash_out(&self) -> bool {
        self.amount_in_milli_usds >= self.min_amount_to_cashout_in_milli_usds
    }
}

/// How earnings are paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashOutType {
    Cash,
    Credits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earnings_wire_names() {
        let json = r#"{
            "userId": "user-1",
            "amountInMilliUSDs": 12500,
            "amountInCredits": 300,
            "minAmountToCashoutInMilliUSDs": 20000,
            "updatedAt": 1700000000000
        }"#;
        let balance: UserEarningsBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.amount_in_usd().to_string(), "12.500");
        assert!(!balance.can_cash_out());
        assert_eq!(serde_json::to_value(CashOutType::Credits).unwrap(), "credits");
    }
}

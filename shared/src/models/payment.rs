//! Payment history record

use serde::{Deserialize, Serialize};

/// Payment row, append-only
///
/// `transaction_id` is the provider's payment-intent id and carries a
/// unique index: reconciling the same checkout session twice can never
/// produce a second row. `amount` is in the provider's minor units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub transaction_id: String,
    pub hr_email: String,
    pub package_id: i64,
    pub package_name: String,
    pub employee_limit: i64,
    pub amount: i64,
    pub currency: String,
    pub paid_at: i64,
}

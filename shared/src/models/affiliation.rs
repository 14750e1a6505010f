//! Employee-company affiliation

use serde::{Deserialize, Serialize};

/// Affiliation row
///
/// Set semantics: one row per (employee, company) pair, created as a side
/// effect of the first approved request and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Affiliation {
    pub employee_email: String,
    pub company_name: String,
    pub created_at: i64,
}

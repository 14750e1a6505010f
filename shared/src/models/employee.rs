//! Employee and HR manager directory models

use serde::{Deserialize, Serialize};

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: i64,
}

/// HR manager row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Manager {
    pub id: i64,
    pub name: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub role: String,
    pub package_limit: Option<i64>,
    pub current_employees: Option<i64>,
    pub subscription: Option<String>,
    pub created_at: i64,
}

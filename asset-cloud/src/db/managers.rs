//! HR manager directory storage

use shared::models::Manager;
use sqlx::PgPool;

pub struct CreateManager<'a> {
    pub id: i64,
    pub name: &'a str,
    pub company_name: &'a str,
    pub company_logo: Option<&'a str>,
    pub email: &'a str,
    pub date_of_birth: Option<&'a str>,
    pub role: &'a str,
    pub package_limit: Option<i64>,
    pub current_employees: Option<i64>,
    pub subscription: Option<&'a str>,
    pub now: i64,
}

pub async fn create(pool: &PgPool, mgr: &CreateManager<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO managers
            (id, name, company_name, company_logo, email, date_of_birth, role, package_limit, current_employees, subscription, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(mgr.id)
    .bind(mgr.name)
    .bind(mgr.company_name)
    .bind(mgr.company_logo)
    .bind(mgr.email)
    .bind(mgr.date_of_birth)
    .bind(mgr.role)
    .bind(mgr.package_limit)
    .bind(mgr.current_employees)
    .bind(mgr.subscription)
    .bind(mgr.now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Manager>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM managers WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// All managers
pub async fn list(pool: &PgPool) -> Result<Vec<Manager>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM managers ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Distinct company names across all HR managers
pub async fn distinct_companies(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT DISTINCT company_name FROM managers ORDER BY company_name")
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(|r| r.0).collect())
}

/// Update a manager's role; false if no such row
pub async fn update_role(pool: &PgPool, id: i64, role: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE managers SET role = $2 WHERE id = $1")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

//! Assignment storage

use shared::models::Assignment;
use sqlx::PgPool;

pub struct CreateAssignment<'a> {
    pub id: i64,
    pub request_id: i64,
    pub employee_email: &'a str,
    pub asset_id: i64,
    pub product_name: &'a str,
    pub product_type: &'a str,
    pub company_name: &'a str,
    pub request_date: i64,
    pub approval_date: i64,
}

/// Record an assignment for an approved request.
///
/// The unique index on `request_id` is the backstop for the one-assignment-
/// per-request rule; a duplicate insert is a silent no-op.
pub async fn create(pool: &PgPool, a: &CreateAssignment<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO assignments
            (id, request_id, employee_email, asset_id, product_name, product_type, company_name, request_date, approval_date, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'approved')
         ON CONFLICT (request_id) DO NOTHING",
    )
    .bind(a.id)
    .bind(a.request_id)
    .bind(a.employee_email)
    .bind(a.asset_id)
    .bind(a.product_name)
    .bind(a.product_type)
    .bind(a.company_name)
    .bind(a.request_date)
    .bind(a.approval_date)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Assignment>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM assignments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Assignments newest first, optionally narrowed by a product-name search
/// and a product-type filter
pub async fn list(
    pool: &PgPool,
    search_text: Option<&str>,
    product_type: Option<&str>,
) -> Result<Vec<Assignment>, sqlx::Error> {
    let pattern = search_text.map(|s| format!("%{s}%"));
    sqlx::query_as(
        "SELECT * FROM assignments
         WHERE ($1::text IS NULL OR product_name ILIKE $1)
           AND ($2::text IS NULL OR product_type = $2)
         ORDER BY approval_date DESC",
    )
    .bind(pattern)
    .bind(product_type)
    .fetch_all(pool)
    .await
}

/// Approved -> returned. False when the assignment was already returned
/// (or never existed); the caller must not restock in that case.
pub async fn mark_returned(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE assignments SET status = 'returned' WHERE id = $1 AND status = 'approved'",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

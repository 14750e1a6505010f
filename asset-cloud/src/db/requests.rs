//! Asset request storage
//!
//! Status changes are UPDATEs guarded on the expected current status, so a
//! request that lost a race (e.g. two concurrent approvals) affects zero
//! rows instead of silently overwriting the winner.

use shared::models::AssetRequest;
use sqlx::PgPool;

pub struct CreateRequest<'a> {
    pub id: i64,
    pub employee_email: &'a str,
    pub employee_name: &'a str,
    pub asset_id: i64,
    pub product_name: &'a str,
    pub product_type: &'a str,
    pub note: Option<&'a str>,
    pub now: i64,
}

pub async fn create(pool: &PgPool, req: &CreateRequest<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO asset_requests
            (id, employee_email, employee_name, asset_id, product_name, product_type, quantity, note, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, 1, $7, 'pending', $8)",
    )
    .bind(req.id)
    .bind(req.employee_email)
    .bind(req.employee_name)
    .bind(req.asset_id)
    .bind(req.product_name)
    .bind(req.product_type)
    .bind(req.note)
    .bind(req.now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<AssetRequest>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM asset_requests WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All requests, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<AssetRequest>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM asset_requests ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Pending -> approved, stamping the approval date. False when the request
/// was no longer pending at update time.
pub async fn mark_approved(
    pool: &PgPool,
    id: i64,
    approval_date: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE asset_requests SET status = 'approved', approval_date = $2
         WHERE id = $1 AND status = 'pending'",
    )
    .bind(id)
    .bind(approval_date)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Pending -> rejected. False when the request was no longer pending.
pub async fn mark_rejected(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE asset_requests SET status = 'rejected' WHERE id = $1 AND status = 'pending'",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Approved -> returned. False when the request was not approved.
pub async fn mark_returned(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE asset_requests SET status = 'returned' WHERE id = $1 AND status = 'approved'",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

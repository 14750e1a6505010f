//! Asset storage + inventory ledger
//!
//! The ledger operations are single conditional UPDATEs checked through
//! `rows_affected()`. Stock is never read first and written second: two
//! concurrent approvals racing over the last unit would otherwise both see
//! `quantity = 1` and drive it negative.

use shared::models::Asset;
use sqlx::PgPool;

pub struct CreateAsset<'a> {
    pub id: i64,
    pub product_name: &'a str,
    pub product_type: &'a str,
    pub product_url: Option<&'a str>,
    pub quantity: i64,
    pub company_name: &'a str,
    pub now: i64,
}

pub async fn create(pool: &PgPool, asset: &CreateAsset<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO assets (id, product_name, product_type, product_url, quantity, company_name, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(asset.id)
    .bind(asset.product_name)
    .bind(asset.product_type)
    .bind(asset.product_url)
    .bind(asset.quantity)
    .bind(asset.company_name)
    .bind(asset.now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Asset>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM assets WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All assets, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM assets ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Delete an asset; false if no such row
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Take one unit out of stock.
///
/// Atomic check-and-decrement: affects zero rows when the asset is missing
/// or exhausted, and the caller must treat that as out-of-stock without any
/// state having changed.
pub async fn decrement_stock(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE assets SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

/// Put one unit back (asset returned). No upper bound; false if the asset
/// row no longer exists.
pub async fn restock(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE assets SET quantity = quantity + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

//! Package storage

use shared::models::Package;
use sqlx::PgPool;

pub struct CreatePackage<'a> {
    pub id: i64,
    pub package_name: &'a str,
    pub employee_limit: i64,
    pub price: i64,
    pub owner_email: Option<&'a str>,
    pub payment_status: &'a str,
    pub tracking_id: Option<&'a str>,
    pub now: i64,
}

pub async fn create(pool: &PgPool, pkg: &CreatePackage<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO packages
            (id, package_name, employee_limit, price, owner_email, payment_status, tracking_id, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(pkg.id)
    .bind(pkg.package_name)
    .bind(pkg.employee_limit)
    .bind(pkg.price)
    .bind(pkg.owner_email)
    .bind(pkg.payment_status)
    .bind(pkg.tracking_id)
    .bind(pkg.now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Package>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM packages WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Packages newest first, optionally restricted to one owner
pub async fn list(pool: &PgPool, owner_email: Option<&str>) -> Result<Vec<Package>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM packages
         WHERE ($1::text IS NULL OR owner_email = $1)
         ORDER BY created_at DESC",
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await
}

/// Duplicate check for `POST /packages`: same owner + same package name
pub async fn exists_for_owner(
    pool: &PgPool,
    owner_email: &str,
    package_name: &str,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT 1 FROM packages WHERE owner_email = $1 AND package_name = $2")
            .bind(owner_email)
            .bind(package_name)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Catalog seeding: insert a default package only when no package of that
/// name exists yet, regardless of owner
pub async fn seed_if_name_absent(
    pool: &PgPool,
    pkg: &CreatePackage<'_>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO packages
            (id, package_name, employee_limit, price, owner_email, payment_status, tracking_id, created_at)
         SELECT $1, $2, $3, $4, $5, $6, $7, $8
         WHERE NOT EXISTS (SELECT 1 FROM packages WHERE package_name = $2)",
    )
    .bind(pkg.id)
    .bind(pkg.package_name)
    .bind(pkg.employee_limit)
    .bind(pkg.price)
    .bind(pkg.owner_email)
    .bind(pkg.payment_status)
    .bind(pkg.tracking_id)
    .bind(pkg.now)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Flip a package to paid. False when the id does not resolve; the
/// reconciler reports that as a non-fatal PackageNotFound.
pub async fn mark_paid(pool: &PgPool, id: i64, paid_at: i64) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE packages SET payment_status = 'paid', paid_at = $2 WHERE id = $1")
            .bind(id)
            .bind(paid_at)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

//! Payment history storage (append-only)

use shared::models::Payment;
use sqlx::PgPool;

pub struct CreatePayment<'a> {
    pub id: i64,
    pub transaction_id: &'a str,
    pub hr_email: &'a str,
    pub package_id: i64,
    pub package_name: &'a str,
    pub employee_limit: i64,
    pub amount: i64,
    pub currency: &'a str,
    pub paid_at: i64,
}

pub async fn find_by_transaction(
    pool: &PgPool,
    transaction_id: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM payments WHERE transaction_id = $1")
        .bind(transaction_id)
        .fetch_optional(pool)
        .await
}

/// Insert a payment row unless its transaction id is already recorded.
///
/// ON CONFLICT DO NOTHING closes the race between the reconciler's
/// existence check and the insert: whoever loses simply affects zero rows.
/// Returns false when the row already existed.
pub async fn insert_idempotent(
    pool: &PgPool,
    payment: &CreatePayment<'_>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO payments
            (id, transaction_id, hr_email, package_id, package_name, employee_limit, amount, currency, paid_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         ON CONFLICT (transaction_id) DO NOTHING",
    )
    .bind(payment.id)
    .bind(payment.transaction_id)
    .bind(payment.hr_email)
    .bind(payment.package_id)
    .bind(payment.package_name)
    .bind(payment.employee_limit)
    .bind(payment.amount)
    .bind(payment.currency)
    .bind(payment.paid_at)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Payment history newest first, optionally restricted to one HR email
pub async fn list(pool: &PgPool, hr_email: Option<&str>) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM payments
         WHERE ($1::text IS NULL OR hr_email = $1)
         ORDER BY paid_at DESC",
    )
    .bind(hr_email)
    .fetch_all(pool)
    .await
}

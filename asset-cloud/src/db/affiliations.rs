//! Employee-company affiliation storage

use sqlx::PgPool;

/// Record the (employee, company) pair if it is not already present.
///
/// The composite primary key makes this safe under concurrent approvals:
/// however many requests the employee gets approved for the same company,
/// exactly one row exists.
pub async fn ensure(
    pool: &PgPool,
    employee_email: &str,
    company_name: &str,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO affiliations (employee_email, company_name, created_at)
         VALUES ($1, $2, $3)
         ON CONFLICT (employee_email, company_name) DO NOTHING",
    )
    .bind(employee_email)
    .bind(company_name)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

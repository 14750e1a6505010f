//! Employee directory storage

use shared::models::Employee;
use sqlx::PgPool;

pub struct CreateEmployee<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub company_name: Option<&'a str>,
    pub date_of_birth: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub role: &'a str,
    pub now: i64,
}

pub async fn create(pool: &PgPool, emp: &CreateEmployee<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO employees (id, name, email, company_name, date_of_birth, photo_url, role, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(emp.id)
    .bind(emp.name)
    .bind(emp.email)
    .bind(emp.company_name)
    .bind(emp.date_of_birth)
    .bind(emp.photo_url)
    .bind(emp.role)
    .bind(emp.now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// All employees, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Employees with a given email and the `employee` role (the directory
/// lookup backing GET /employees)
pub async fn list_by_email(pool: &PgPool, email: &str) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE email = $1 AND role = 'employee'")
        .bind(email)
        .fetch_all(pool)
        .await
}

/// Delete an employee; false if no such row
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

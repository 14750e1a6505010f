//! Directory endpoints: companies, employees, HR managers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, Manager, PackageStatus};
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::state::AppState;

use super::ApiResult;

/// GET /companies
#[derive(Serialize)]
pub struct Company {
    pub name: String,
}

pub async fn list_companies(State(state): State<AppState>) -> ApiResult<Vec<Company>> {
    let names = db::managers::distinct_companies(&state.pool).await?;
    Ok(Json(names.into_iter().map(|name| Company { name }).collect()))
}

/// GET /employees?email=
#[derive(Deserialize)]
pub struct EmployeeQuery {
    pub email: Option<String>,
}

pub async fn find_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> ApiResult<Vec<Employee>> {
    let email = query
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::validation("Email is required"))?;
    Ok(Json(db::employees::list_by_email(&state.pool, &email).await?))
}

/// GET /users/employee
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    Ok(Json(db::employees::list(&state.pool).await?))
}

/// GET /users
pub async fn list_managers(State(state): State<AppState>) -> ApiResult<Vec<Manager>> {
    Ok(Json(db::managers::list(&state.pool).await?))
}

/// POST /em-users
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeBody {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
    pub role: Option<String>,
}

pub async fn register_employee(
    State(state): State<AppState>,
    Json(body): Json<RegisterEmployeeBody>,
) -> ApiResult<Employee> {
    if body.name.trim().is_empty() || body.email.trim().is_empty() {
        return Err(AppError::validation("name and email are required").into());
    }

    if db::employees::find_by_email(&state.pool, &body.email)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeAlreadyExists).into());
    }

    let id = snowflake_id();
    db::employees::create(
        &state.pool,
        &db::employees::CreateEmployee {
            id,
            name: &body.name,
            email: &body.email,
            company_name: body.company_name.as_deref(),
            date_of_birth: body.date_of_birth.as_deref(),
            photo_url: body.photo_url.as_deref(),
            role: body.role.as_deref().unwrap_or("employee"),
            now: now_millis(),
        },
    )
    .await?;

    let created = db::employees::find_by_email(&state.pool, &body.email)
        .await?
        .ok_or_else(|| AppError::internal("employee row vanished after insert"))?;
    Ok(Json(created))
}

/// POST /hr-users
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterManagerBody {
    pub name: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub role: Option<String>,
    pub package_limit: Option<i64>,
    pub current_employees: Option<i64>,
    pub subscription: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterManagerResult {
    pub success: bool,
    pub user_id: i64,
}

/// Default catalog seeded once, alongside the first manager registrations
const DEFAULT_PACKAGES: [(&str, i64, i64); 4] = [
    ("Basic", 5, 100),
    ("Standard", 15, 900),
    ("Premium", 30, 1900),
    ("Enterprise", 999, 4900),
];

pub async fn register_manager(
    State(state): State<AppState>,
    Json(body): Json<RegisterManagerBody>,
) -> ApiResult<RegisterManagerResult> {
    if body.name.trim().is_empty()
        || body.email.trim().is_empty()
        || body.company_name.trim().is_empty()
    {
        return Err(AppError::validation("name, email and company are required").into());
    }

    if db::managers::find_by_email(&state.pool, &body.email)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::ManagerAlreadyExists).into());
    }

    let id = snowflake_id();
    let now = now_millis();
    db::managers::create(
        &state.pool,
        &db::managers::CreateManager {
            id,
            name: &body.name,
            company_name: &body.company_name,
            company_logo: body.company_logo.as_deref(),
            email: &body.email,
            date_of_birth: body.date_of_birth.as_deref(),
            role: body.role.as_deref().unwrap_or("hr"),
            package_limit: body.package_limit,
            current_employees: body.current_employees,
            subscription: body.subscription.as_deref(),
            now,
        },
    )
    .await?;

    // Seed the package catalog for names not present yet
    for (name, employee_limit, price) in DEFAULT_PACKAGES {
        db::packages::seed_if_name_absent(
            &state.pool,
            &db::packages::CreatePackage {
                id: snowflake_id(),
                package_name: name,
                employee_limit,
                price,
                owner_email: None,
                payment_status: PackageStatus::Pending.as_db(),
                tracking_id: None,
                now,
            },
        )
        .await?;
    }

    Ok(Json(RegisterManagerResult {
        success: true,
        user_id: id,
    }))
}

/// PATCH /users/hr-user/{id}
#[derive(Deserialize)]
pub struct UpdateRoleBody {
    pub role: String,
}

pub async fn update_manager_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateRoleBody>,
) -> ApiResult<serde_json::Value> {
    if !db::managers::update_role(&state.pool, id, &body.role).await? {
        return Err(AppError::new(ErrorCode::ManagerNotFound).into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /users/{email}/role
#[derive(Serialize)]
pub struct RoleResult {
    pub role: String,
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<RoleResult> {
    let role = match db::managers::find_by_email(&state.pool, &email).await? {
        Some(manager) => manager.role,
        None => match db::employees::find_by_email(&state.pool, &email).await? {
            Some(employee) => employee.role,
            None => "user".to_string(),
        },
    };
    Ok(Json(RoleResult { role }))
}

/// DELETE /users/employee-team-delete/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    if !db::employees::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

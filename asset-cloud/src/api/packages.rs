//! Subscription package endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{Package, PackageStatus};
use shared::util::{now_millis, snowflake_id, tracking_id};

use crate::db;
use crate::state::AppState;

use super::ApiResult;

/// GET /packages?email=
#[derive(Deserialize)]
pub struct ListQuery {
    pub email: Option<String>,
}

pub async fn list_packages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Package>> {
    Ok(Json(
        db::packages::list(&state.pool, query.email.as_deref()).await?,
    ))
}

/// GET /employee-package/{id}
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Package> {
    let package = db::packages::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::PackageNotFound))?;
    Ok(Json(package))
}

/// POST /packages
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageBody {
    pub package_name: String,
    pub employee_limit: i64,
    pub price: i64,
    pub email: String,
    pub payment_status: Option<String>,
}

pub async fn create_package(
    State(state): State<AppState>,
    Json(body): Json<CreatePackageBody>,
) -> ApiResult<Package> {
    if body.package_name.trim().is_empty()
        || body.email.trim().is_empty()
        || body.employee_limit <= 0
        || body.price <= 0
    {
        return Err(AppError::validation("Missing required fields").into());
    }

    let payment_status = match body.payment_status.as_deref() {
        None => PackageStatus::Pending,
        Some(s) => PackageStatus::from_db(s)
            .ok_or_else(|| AppError::validation(format!("unknown payment status: {s}")))?,
    };

    if db::packages::exists_for_owner(&state.pool, &body.email, &body.package_name).await? {
        return Err(AppError::new(ErrorCode::PackageAlreadyExists).into());
    }

    let id = snowflake_id();
    let tracking = tracking_id();
    db::packages::create(
        &state.pool,
        &db::packages::CreatePackage {
            id,
            package_name: &body.package_name,
            employee_limit: body.employee_limit,
            price: body.price,
            owner_email: Some(&body.email),
            payment_status: payment_status.as_db(),
            tracking_id: Some(&tracking),
            now: now_millis(),
        },
    )
    .await?;

    let created = db::packages::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::internal("package row vanished after insert"))?;
    Ok(Json(created))
}

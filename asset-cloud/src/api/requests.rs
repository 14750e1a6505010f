//! Asset request endpoints
//!
//! `PATCH /requestAssets/{id}` drives the request lifecycle. Approval is
//! the one transition with side effects, and their order matters: the
//! stock decrement runs before the status flip so a failed decrement
//! leaves the system exactly as it was — request still pending, no
//! assignment, no affiliation.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{AssetRequest, ProductType, RequestStatus};
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

use super::ApiResult;

/// GET /requestAssets
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<Vec<AssetRequest>> {
    Ok(Json(db::requests::list(&state.pool).await?))
}

/// POST /requestAssets
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub employee_email: String,
    pub employee_name: String,
    pub asset_id: i64,
    pub note: Option<String>,
}

/// Create a pending request, snapshotting the asset's product fields
pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<CreateRequestBody>,
) -> ApiResult<AssetRequest> {
    if body.employee_email.trim().is_empty() || body.employee_name.trim().is_empty() {
        return Err(AppError::validation("employee email and name are required").into());
    }

    let asset = db::assets::find_by_id(&state.pool, body.asset_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AssetNotFound))?;

    let id = snowflake_id();
    db::requests::create(
        &state.pool,
        &db::requests::CreateRequest {
            id,
            employee_email: &body.employee_email,
            employee_name: &body.employee_name,
            asset_id: asset.id,
            product_name: &asset.product_name,
            product_type: &asset.product_type,
            note: body.note.as_deref(),
            now: now_millis(),
        },
    )
    .await?;

    let created = db::requests::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::internal("request row vanished after insert"))?;
    Ok(Json(created))
}

/// PATCH /requestAssets/{id}
#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusBody>,
) -> ApiResult<AssetRequest> {
    let target = RequestStatus::parse(&body.status).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::UnknownStatus,
            format!("unknown status: {}", body.status),
        )
    })?;

    let request = db::requests::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound))?;

    let current = RequestStatus::from_db(&request.status)
        .ok_or_else(|| AppError::internal(format!("corrupt request status: {}", request.status)))?;

    current.validate_transition(target, ProductType::from_db(&request.product_type))?;

    match target {
        RequestStatus::Approved => approve(&state, &request).await?,
        RequestStatus::Rejected => {
            if !db::requests::mark_rejected(&state.pool, request.id).await? {
                return Err(AppError::new(ErrorCode::InvalidStatusTransition).into());
            }
        }
        RequestStatus::Returned => {
            if !db::requests::mark_returned(&state.pool, request.id).await? {
                return Err(AppError::new(ErrorCode::InvalidStatusTransition).into());
            }
        }
        RequestStatus::Pending => {
            return Err(AppError::new(ErrorCode::InvalidStatusTransition).into());
        }
    }

    let updated = db::requests::find_by_id(&state.pool, request.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound))?;
    Ok(Json(updated))
}

/// Approve a pending request: decrement stock, flip the status, record the
/// assignment and the employee-company affiliation.
async fn approve(state: &AppState, request: &AssetRequest) -> ServiceResult<()> {
    if db::employees::find_by_email(&state.pool, &request.employee_email)
        .await?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
    }

    // Resolved for its company; stock itself is only touched through the
    // conditional decrement below.
    let asset = db::assets::find_by_id(&state.pool, request.asset_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AssetOutOfStock))?;

    if !db::assets::decrement_stock(&state.pool, asset.id).await? {
        return Err(AppError::new(ErrorCode::AssetOutOfStock).into());
    }

    let now = now_millis();

    // Guarded on the request still being pending. Losing that race means a
    // concurrent caller already resolved this request; give the unit back.
    if !db::requests::mark_approved(&state.pool, request.id, now).await? {
        db::assets::restock(&state.pool, asset.id).await?;
        return Err(AppError::new(ErrorCode::InvalidStatusTransition).into());
    }

    db::assignments::create(
        &state.pool,
        &db::assignments::CreateAssignment {
            id: snowflake_id(),
            request_id: request.id,
            employee_email: &request.employee_email,
            asset_id: asset.id,
            product_name: &request.product_name,
            product_type: &request.product_type,
            company_name: &asset.company_name,
            request_date: request.created_at,
            approval_date: now,
        },
    )
    .await?;

    db::affiliations::ensure(&state.pool, &request.employee_email, &asset.company_name, now)
        .await?;

    tracing::info!(
        request_id = request.id,
        asset_id = asset.id,
        employee = %request.employee_email,
        "Asset request approved"
    );

    Ok(())
}

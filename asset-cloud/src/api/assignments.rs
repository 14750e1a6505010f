//! Assigned asset endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use shared::error::{AppError, ErrorCode};
use shared::models::Assignment;

use crate::db;
use crate::state::AppState;

use super::ApiResult;

/// GET /employeeAssets
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub search_text: Option<String>,
    /// "returnable" | "non-returnable"
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

pub async fn list_assignments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Assignment>> {
    let search = query.search_text.as_deref().filter(|s| !s.is_empty());
    let product_type = query.product_type.as_deref().filter(|s| !s.is_empty());
    Ok(Json(
        db::assignments::list(&state.pool, search, product_type).await?,
    ))
}

/// PATCH /employeeAssets/return/{id}
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnResult {
    pub success: bool,
    /// False when this call was a repeat return and stock was left alone
    pub restocked: bool,
    pub assignment: Assignment,
}

/// Close an assignment and put the unit back in stock.
///
/// Idempotent: returning an already-returned assignment succeeds without a
/// second restock. Only the caller whose conditional update actually flips
/// the status touches the inventory.
pub async fn return_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ReturnResult> {
    let assignment = db::assignments::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AssignmentNotFound))?;

    let closed = db::assignments::mark_returned(&state.pool, assignment.id).await?;

    let mut restocked = false;
    if closed {
        restocked = db::assets::restock(&state.pool, assignment.asset_id).await?;
        if !restocked {
            tracing::warn!(
                assignment_id = assignment.id,
                asset_id = assignment.asset_id,
                "Returned assignment references a missing asset"
            );
        }
        tracing::info!(
            assignment_id = assignment.id,
            asset_id = assignment.asset_id,
            "Assignment returned"
        );
    }

    let updated = db::assignments::find_by_id(&state.pool, assignment.id)
        .await?
        .ok_or_else(|| AppError::internal("assignment row vanished during return"))?;

    Ok(Json(ReturnResult {
        success: true,
        restocked,
        assignment: updated,
    }))
}

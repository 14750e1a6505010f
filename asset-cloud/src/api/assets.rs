//! Asset inventory endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{Asset, ProductType};
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::state::AppState;

use super::ApiResult;

/// GET /hrAssets
pub async fn list_assets(State(state): State<AppState>) -> ApiResult<Vec<Asset>> {
    Ok(Json(db::assets::list(&state.pool).await?))
}

/// POST /hrAssets
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetBody {
    pub product_name: String,
    pub product_type: ProductType,
    pub product_url: Option<String>,
    pub quantity: i64,
    pub company_name: String,
}

pub async fn create_asset(
    State(state): State<AppState>,
    Json(body): Json<CreateAssetBody>,
) -> ApiResult<Asset> {
    if body.product_name.trim().is_empty() || body.company_name.trim().is_empty() {
        return Err(AppError::validation("product name and company are required").into());
    }
    if body.quantity < 0 {
        return Err(AppError::new(ErrorCode::AssetInvalidQuantity).into());
    }

    let id = snowflake_id();
    db::assets::create(
        &state.pool,
        &db::assets::CreateAsset {
            id,
            product_name: &body.product_name,
            product_type: body.product_type.as_db(),
            product_url: body.product_url.as_deref(),
            quantity: body.quantity,
            company_name: &body.company_name,
            now: now_millis(),
        },
    )
    .await?;

    let created = db::assets::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::internal("asset row vanished after insert"))?;
    Ok(Json(created))
}

/// DELETE /hrAssets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    if !db::assets::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::AssetNotFound).into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

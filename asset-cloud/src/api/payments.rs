//! Checkout and payment reconciliation endpoints

use axum::extract::{Extension, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use shared::error::{AppError, ErrorCode};
use shared::models::Payment;
use shared::util::{now_millis, snowflake_id};

use crate::auth::Identity;
use crate::db;
use crate::state::AppState;
use crate::stripe;

use super::ApiResult;

/// POST /payment-checkout-session
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    pub price: i64,
    pub package_id: i64,
    pub email: String,
    pub package_name: String,
    pub employee_limit: i64,
}

pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutBody>,
) -> ApiResult<serde_json::Value> {
    if body.price <= 0 {
        return Err(AppError::validation("price must be positive").into());
    }
    if body.email.trim().is_empty() {
        return Err(AppError::validation("email is required").into());
    }

    let label = format!("Please pay for {}", body.package_name);
    let url = stripe::create_checkout_session(
        &state.stripe_secret_key,
        &state.site_domain,
        &stripe::CheckoutParams {
            amount: body.price * 100,
            label: &label,
            customer_email: &body.email,
            package_id: body.package_id,
            package_name: &body.package_name,
            employee_limit: body.employee_limit,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(%e, "Failed to create Stripe checkout");
        AppError::new(ErrorCode::PaymentSetupFailed)
    })?;

    Ok(Json(serde_json::json!({ "url": url })))
}

/// PATCH /payment-success?session_id=
#[derive(Deserialize)]
pub struct PaymentSuccessQuery {
    pub session_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileResult {
    pub success: bool,
    pub message: String,
    /// False when the session metadata did not resolve to a package
    pub package_updated: bool,
    pub payment: Payment,
}

/// Turn a completed checkout session into durable local state, exactly once.
///
/// Re-delivery (the user refreshing the success page, a duplicate redirect)
/// finds the existing payment row by transaction id and returns it; the
/// unique index closes the window between the lookup and the insert.
pub async fn payment_success(
    State(state): State<AppState>,
    Query(query): Query<PaymentSuccessQuery>,
) -> ApiResult<ReconcileResult> {
    let session_id = query
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("session_id missing"))?;

    let session = stripe::retrieve_session(&state.stripe_secret_key, &session_id)
        .await
        .map_err(|e| {
            tracing::warn!(%e, session_id = %session_id, "Checkout session retrieval failed");
            AppError::new(ErrorCode::PaymentSessionNotFound)
        })?;

    if !session.is_paid() {
        return Err(AppError::new(ErrorCode::PaymentIncomplete).into());
    }

    let transaction_id = session
        .payment_intent
        .clone()
        .ok_or_else(|| AppError::new(ErrorCode::PaymentIncomplete))?;

    let now = now_millis();

    // Flip the package to paid; an unresolvable package id is reported in
    // the response rather than failing the reconciliation.
    let package_id = session.package_id();
    let package_updated = match package_id {
        Some(id) => db::packages::mark_paid(&state.pool, id, now).await?,
        None => false,
    };
    if !package_updated {
        tracing::warn!(
            session_id = %session.id,
            "Checkout session metadata does not resolve to a package"
        );
    }

    let payment = match db::payments::find_by_transaction(&state.pool, &transaction_id).await? {
        Some(existing) => {
            tracing::info!(
                transaction_id = %transaction_id,
                "Duplicate reconciliation, returning existing payment"
            );
            existing
        }
        None => {
            db::payments::insert_idempotent(
                &state.pool,
                &db::payments::CreatePayment {
                    id: snowflake_id(),
                    transaction_id: &transaction_id,
                    hr_email: session.customer_email.as_deref().unwrap_or_default(),
                    package_id: package_id.unwrap_or_default(),
                    package_name: session.metadata.package_name.as_deref().unwrap_or_default(),
                    employee_limit: session.employee_limit(),
                    amount: session.amount_total.unwrap_or_default(),
                    currency: session.currency.as_deref().unwrap_or("usd"),
                    paid_at: now,
                },
            )
            .await?;
            // Read back whichever row won: ours or a concurrent reconciler's.
            db::payments::find_by_transaction(&state.pool, &transaction_id)
                .await?
                .ok_or_else(|| AppError::internal("payment row vanished after insert"))?
        }
    };

    let message = if package_updated {
        "Payment successful"
    } else {
        "Payment recorded; package not found"
    };

    Ok(Json(ReconcileResult {
        success: true,
        message: message.into(),
        package_updated,
        payment,
    }))
}

/// GET /payments?email= (JWT protected)
#[derive(Deserialize)]
pub struct PaymentsQuery {
    pub email: Option<String>,
}

pub async fn list_payments(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<PaymentsQuery>,
) -> ApiResult<Vec<Payment>> {
    if let Some(email) = query.email.as_deref() {
        if email != identity.email {
            return Err(AppError::permission_denied("forbidden access").into());
        }
    }
    Ok(Json(
        db::payments::list(&state.pool, query.email.as_deref()).await?,
    ))
}

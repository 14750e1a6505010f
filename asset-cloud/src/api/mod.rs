//! API routes for asset-cloud

pub mod assets;
pub mod assignments;
pub mod health;
pub mod packages;
pub mod payments;
pub mod requests;
pub mod users;

use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::auth_middleware;
use crate::error::ServiceError;
use crate::state::AppState;

/// Handler result: JSON payload or a service error that renders itself
pub type ApiResult<T> = Result<axum::Json<T>, ServiceError>;

async fn root() -> &'static str {
    "AssetVerse backend running..."
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Payment history requires a verified principal
    let protected = Router::new()
        .route("/payments", get(payments::list_payments))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        // Directory
        .route("/companies", get(users::list_companies))
        .route("/employees", get(users::find_employees))
        .route("/users", get(users::list_managers))
        .route("/users/employee", get(users::list_employees))
        .route("/users/hr-user/{id}", patch(users::update_manager_role))
        .route("/users/{email}/role", get(users::get_role))
        .route(
            "/users/employee-team-delete/{id}",
            delete(users::delete_employee),
        )
        .route("/em-users", post(users::register_employee))
        .route("/hr-users", post(users::register_manager))
        // Inventory
        .route("/hrAssets", get(assets::list_assets).post(assets::create_asset))
        .route("/hrAssets/{id}", delete(assets::delete_asset))
        // Request lifecycle
        .route(
            "/requestAssets",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/requestAssets/{id}", patch(requests::set_status))
        // Assignments
        .route("/employeeAssets", get(assignments::list_assignments))
        .route(
            "/employeeAssets/return/{id}",
            patch(assignments::return_assignment),
        )
        // Billing
        .route(
            "/packages",
            get(packages::list_packages).post(packages::create_package),
        )
        .route("/employee-package/{id}", get(packages::get_package))
        .route("/payment-checkout-session", post(payments::create_checkout))
        .route("/payment-success", patch(payments::payment_success))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Customer Handlers
//!
//! CRUD endpoints under `/rest`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::handlers::AppState;
use crate::models::{Customer, CustomerRequest};
use crate::utils::error::{AppError, AppResult};

/// Create a customer (201) or update an existing one (200)
pub async fn create_or_update_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let Json(request) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let saved = state.customer_service.save_customer(request).await?;
    let status = if saved.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(saved.customer)))
}

/// Get a customer by id
///
/// Answers 201 on success, which existing clients expect.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.customer_service.get_customer(id).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// List all customers
pub async fn get_all_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.customer_service.list_customers().await?))
}

/// Delete a customer by id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.customer_service.delete_customer(id).await?;
    Ok(StatusCode::OK)
}

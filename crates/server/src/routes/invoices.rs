use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde_json::{json, Value};

use common::types::StatusMessage;
use service::invoice::domain::{InvoiceChanges, NewInvoice};

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/invoices", tag = "invoices",
    responses(
        (status = 200, description = "All invoices by id as {id, comp_code, amt}", body = crate::openapi::InvoiceListResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    let invoices = state.invoices.list().await?;
    Ok(Json(json!({ "invoices": invoices })))
}

#[utoipa::path(
    get, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice with its company", body = crate::openapi::InvoiceDetailResponse),
        (status = 404, description = "No matching invoice", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, JsonApiError> {
    let found = state.invoices.get(&id).await?;
    Ok(Json(json!({ "invoice": found.invoice, "company": found.company })))
}

#[utoipa::path(
    post, path = "/invoices", tag = "invoices",
    request_body = crate::openapi::NewInvoiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::InvoiceResponse),
        (status = 400, description = "Missing body", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. unknown or missing comp_code")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<NewInvoice>>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let invoice = state.invoices.create(body.map(|Json(b)| b)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

#[utoipa::path(
    put, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    request_body = crate::openapi::InvoiceChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::InvoiceResponse),
        (status = 400, description = "Missing body", body = crate::openapi::ErrorResponse),
        (status = 404, description = "No matching invoice", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. missing or non-positive amt")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<InvoiceChanges>>,
) -> Result<Json<Value>, JsonApiError> {
    let invoice = state.invoices.update(&id, body.map(|Json(b)| b)).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

#[utoipa::path(
    delete, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusResponse),
        (status = 404, description = "No matching invoice", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<StatusMessage>, JsonApiError> {
    state.invoices.delete(&id).await?;
    Ok(Json(StatusMessage::deleted()))
}

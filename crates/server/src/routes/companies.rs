use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde_json::{json, Value};

use common::types::StatusMessage;
use service::company::domain::{CompanyChanges, NewCompany};

use crate::{errors::JsonApiError, state::AppState};

// Bodies are extracted as `Option<Json<_>>`: an absent or non-JSON body
// arrives as `None` and the service answers 400. Fields are optional, so a
// partial body reaches storage and fails its constraints there.

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "All companies ordered by name", body = crate::openapi::CompanyListResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    let companies = state.companies.list().await?;
    Ok(Json(json!({ "companies": companies })))
}

#[utoipa::path(
    get, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Company with its invoice ids", body = crate::openapi::CompanyDetailResponse),
        (status = 404, description = "No matching company", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, Path(code): Path<String>) -> Result<Json<Value>, JsonApiError> {
    let company = state.companies.get(&code).await?;
    Ok(Json(json!({ "company": company })))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::NewCompanyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyResponse),
        (status = 400, description = "Missing body", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. duplicate code or missing field")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<NewCompany>>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let company = state.companies.create(body.map(|Json(b)| b)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

#[utoipa::path(
    put, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = crate::openapi::CompanyChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyResponse),
        (status = 400, description = "Missing body", body = crate::openapi::ErrorResponse),
        (status = 404, description = "No matching company", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. missing name")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Option<Json<CompanyChanges>>,
) -> Result<Json<Value>, JsonApiError> {
    let company = state.companies.update(&code, body.map(|Json(b)| b)).await?;
    Ok(Json(json!({ "company": company })))
}

#[utoipa::path(
    delete, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusResponse),
        (status = 404, description = "No matching company", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(code): Path<String>) -> Result<Json<StatusMessage>, JsonApiError> {
    state.companies.delete(&code).await?;
    Ok(Json(StatusMessage::deleted()))
}

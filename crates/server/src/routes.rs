use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod companies;
pub mod invoices;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn fallback() -> JsonApiError {
    JsonApiError::not_found("Not Found")
}

/// Build the full application router: resources, health, docs, and a JSON 404 fallback.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let resources = Router::new()
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/:code",
            get(companies::get).put(companies::update).delete(companies::delete),
        )
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/:id",
            get(invoices::get).put(invoices::update).delete(invoices::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(resources)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency per response
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

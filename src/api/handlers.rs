//! REST endpoint handlers: ingestion, query surface, health.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::{MessageDto, SendRequest, SendResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /send` — Ingest one entity and notify downstream consumers.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed payload, persistence failure, or
/// publish failure.
#[utoipa::path(
    post,
    path = "/send",
    tag = "Ingestion",
    summary = "Create an entity and publish its creation event",
    description = "Persists the entity to the store, then publishes a creation event to the notification exchange. A publish failure after a successful persist still returns 500, but the entity stays stored.",
    request_body = SendRequest,
    responses(
        (status = 200, description = "Entity persisted and notified", body = SendResponse),
        (status = 400, description = "Malformed payload or empty name", body = ErrorResponse),
        (status = 500, description = "Persistence or publish failure", body = ErrorResponse),
    )
)]
pub async fn send_handler(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload.map_err(|e| GatewayError::Validation(e.body_text()))?;

    state.ingest_service.ingest(&req.name).await?;

    Ok(Json(SendResponse {
        status: "success".to_string(),
    }))
}

/// `GET /messages` — List all stored entities.
///
/// # Errors
///
/// Returns [`GatewayError`] on read failure.
#[utoipa::path(
    get,
    path = "/messages",
    tag = "Ingestion",
    summary = "List stored entities",
    description = "Returns every entity committed to the store, in storage-engine default order.",
    responses(
        (status = 200, description = "Stored entities", body = Vec<MessageDto>),
        (status = 500, description = "Read failure", body = ErrorResponse),
    )
)]
pub async fn messages_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let entities = state.ingest_service.list().await?;
    let messages: Vec<MessageDto> = entities.into_iter().map(MessageDto::from).collect();
    Ok(Json(messages))
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Composes all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/send", post(send_handler))
        .route("/messages", get(messages_handler))
        .route("/health", get(health_handler))
}

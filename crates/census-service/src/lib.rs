#![deny(unsafe_code)]

pub mod auth;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use census_core::{
    validate, AdminCredentials, FieldSet, Participant, ParticipantRegistry, ValidationError,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ServiceState {
    pub registry: Arc<RwLock<ParticipantRegistry>>,
    pub credentials: Arc<AdminCredentials>,
}

impl ServiceState {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            registry: Arc::new(RwLock::new(ParticipantRegistry::new())),
            credentials: Arc::new(credentials),
        }
    }
}

pub fn build_router(state: ServiceState) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/participants/add", post(add_participant))
        .route("/participants", get(list_participants))
        .route("/participants/details", get(list_details))
        .route("/participants/details/:email", get(get_details))
        .route("/participants/work/:email", get(get_work))
        .route("/participants/home/:email", get(get_home))
        .route(
            "/participants/:email",
            put(update_participant).delete(delete_participant),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed")]
    Unauthorized,
    #[error("Participant not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    BadRequest { message: String },
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

// A body that does not parse as JSON is handled like a payload with no
// fields, so it fails the presence check.
fn parse_participant(payload: Result<Json<Value>, JsonRejection>) -> Result<Participant, ApiError> {
    let Json(payload) = payload.unwrap_or_else(|_| Json(Value::Null));
    validate(&payload)?;
    serde_json::from_value(payload).map_err(|err| ApiError::bad_request(err.to_string()))
}

#[derive(Debug, Clone, Serialize)]
struct InfoResponse {
    message: &'static str,
}

async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Welcome to the Census Application API. Use the provided endpoints to interact with the system.",
    })
}

#[derive(Debug, Clone, Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn add_participant(
    State(state): State<ServiceState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let record = parse_participant(payload)?;
    let mut registry = state.registry.write().await;
    registry.upsert(record.email.clone(), record);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Participant added successfully",
        }),
    ))
}

async fn list_participants(State(state): State<ServiceState>) -> Json<Vec<Participant>> {
    let registry = state.registry.read().await;
    Json(registry.list())
}

async fn list_details(State(state): State<ServiceState>) -> Json<Vec<Map<String, Value>>> {
    let registry = state.registry.read().await;
    Json(registry.project_all(FieldSet::Personal))
}

async fn project_one(
    state: &ServiceState,
    email: &str,
    fieldset: FieldSet,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let registry = state.registry.read().await;
    let record = registry.get(email).ok_or(ApiError::NotFound)?;
    Ok(Json(record.project(fieldset)))
}

async fn get_details(
    Path(email): Path<String>,
    State(state): State<ServiceState>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    project_one(&state, &email, FieldSet::Personal).await
}

async fn get_work(
    Path(email): Path<String>,
    State(state): State<ServiceState>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    project_one(&state, &email, FieldSet::Work).await
}

async fn get_home(
    Path(email): Path<String>,
    State(state): State<ServiceState>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    project_one(&state, &email, FieldSet::Home).await
}

async fn update_participant(
    Path(email): Path<String>,
    State(state): State<ServiceState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut registry = state.registry.write().await;
    if !registry.contains(&email) {
        return Err(ApiError::NotFound);
    }
    // Replacements are keyed by the path address even when the payload
    // carries a different email value.
    let record = parse_participant(payload)?;
    registry.upsert(email, record);
    Ok(Json(MessageResponse {
        message: "Participant updated successfully",
    }))
}

async fn delete_participant(
    Path(email): Path<String>,
    State(state): State<ServiceState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut registry = state.registry.write().await;
    if !registry.remove(&email) {
        return Err(ApiError::NotFound);
    }
    Ok(Json(MessageResponse {
        message: "Participant deleted successfully",
    }))
}

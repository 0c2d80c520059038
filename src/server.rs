//! HTTP server: routes, handlers and error mapping.
//!
//! Thin layer over the domain services. Every response carries a
//! permissive CORS policy; every failure resolves to a structured JSON
//! payload whose status distinguishes client input problems (400) from
//! server/dependency problems (500).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};

use crate::domain::{ProjectService, TaskIntakeService};
use crate::entities::TaskPatch;
use crate::errors::KanriError;
use crate::storage::Storage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Intake pipeline.
    pub intake: Arc<TaskIntakeService>,
    /// Project CRUD.
    pub projects: Arc<ProjectService>,
    /// Task CRUD beyond intake.
    pub storage: Arc<dyn Storage>,
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Natural-language intake
        .route("/chat", post(chat_handler))
        // Task CRUD
        .route("/issues", get(list_issues_handler))
        .route(
            "/issues/{id}",
            put(update_issue_handler).delete(delete_issue_handler),
        )
        // Project CRUD
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route("/projects/{id}", put(rename_project_handler))
        // Health check
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

impl IntoResponse for KanriError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Extraction => {
                warn!("intake rejected: {self}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "success": false, "message": "Failed to parse task" }),
                )
            }
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, json!({ "error": self.to_string() })),
            _ => {
                error!("request failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Intake request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
}

/// Handle a natural-language intake request.
async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Value>, KanriError> {
    let record = state
        .intake
        .intake(
            &req.message,
            req.priority.as_deref(),
            req.project_id.as_deref(),
        )
        .await?;

    Ok(Json(json!({ "success": true, "issueId": record.id })))
}

/// List all task records.
async fn list_issues_handler(State(state): State<AppState>) -> Result<Json<Value>, KanriError> {
    let tasks = state.storage.list_tasks().await?;
    Ok(Json(serde_json::to_value(tasks)?))
}

/// Update request body: the addressing timestamp plus the patch fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateIssueRequest {
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    patch: TaskPatch,
}

/// Apply a partial update to a task addressed by composite identity.
async fn update_issue_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateIssueRequest>,
) -> Result<Json<Value>, KanriError> {
    state
        .storage
        .update_task(&id, req.created_at, &req.patch)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// Delete request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteIssueRequest {
    created_at: DateTime<Utc>,
}

/// Delete a task addressed by composite identity.
async fn delete_issue_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<DeleteIssueRequest>,
) -> Result<Json<Value>, KanriError> {
    state.storage.delete_task(&id, req.created_at).await?;
    Ok(Json(json!({ "success": true })))
}

/// List all projects (or the default sentinel).
async fn list_projects_handler(State(state): State<AppState>) -> Result<Json<Value>, KanriError> {
    let projects = state.projects.list().await?;
    Ok(Json(serde_json::to_value(projects)?))
}

/// Project creation body.
#[derive(Debug, Deserialize)]
struct CreateProjectRequest {
    name: String,
}

/// Create a new project.
async fn create_project_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<Value>, KanriError> {
    let record = state.projects.create(&req.name).await?;
    Ok(Json(json!({ "success": true, "id": record.id })))
}

/// Rename an existing project.
async fn rename_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<Value>, KanriError> {
    state.projects.rename(&id, &req.name).await?;
    Ok(Json(json!({ "success": true })))
}

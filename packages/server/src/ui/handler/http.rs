//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{CreateProjectRequest, ErrorResponseDto, HealthDto, ProjectDto},
    ui::state::AppState,
    usecase::CreateProjectError,
};

pub async fn root() -> &'static str {
    "Agora chat server is running. Connect a WebSocket client to /ws."
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let status = state.get_chat_status_usecase.execute().await;
    Json(HealthDto {
        status: "ok".to_string(),
        connections: status.connections,
        messages: status.messages,
    })
}

/// `POST /projects`
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDto>), (StatusCode, Json<ErrorResponseDto>)> {
    let input = request.into_input();

    match state
        .create_project_usecase
        .execute(input.name.as_deref(), input.description.as_deref())
        .await
    {
        Ok(project) => Ok((StatusCode::CREATED, Json(project.into()))),
        Err(e @ CreateProjectError::InvalidInput) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto {
                error: e.to_string(),
            }),
        )),
        Err(e @ CreateProjectError::StoreFailed(_)) => {
            tracing::error!("Error creating project: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseDto {
                    error: "Internal server error while creating project".to_string(),
                }),
            ))
        }
    }
}

/// `GET /projects`
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectDto>> {
    let projects = state.list_projects_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(projects.into_iter().map(ProjectDto::from).collect())
}

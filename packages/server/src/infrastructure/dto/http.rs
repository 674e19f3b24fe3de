//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Fields of a project as submitted by a client. Missing fields are
/// reported as validation errors rather than decode errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `POST /projects` body: either `{"project": {...}}` or the bare fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateProjectRequest {
    Wrapped { project: ProjectInput },
    Bare(ProjectInput),
}

impl CreateProjectRequest {
    pub fn into_input(self) -> ProjectInput {
        match self {
            CreateProjectRequest::Wrapped { project } => project,
            CreateProjectRequest::Bare(input) => input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub connections: usize,
    pub messages: usize,
}

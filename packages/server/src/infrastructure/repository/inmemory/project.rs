//! InMemory Project Repository 実装

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Project, ProjectRepository, RepositoryError};

pub struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new(projects: Arc<Mutex<Vec<Project>>>) -> Self {
        Self { projects }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Vec::new())))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn add(&self, project: Project) -> Result<(), RepositoryError> {
        let mut projects = self.projects.lock().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(RepositoryError::Duplicate(project.id.into_string()));
        }
        projects.push(project);
        Ok(())
    }

    async fn list(&self) -> Vec<Project> {
        let projects = self.projects.lock().await;
        projects.clone()
    }
}

//! UseCase: プロジェクトの作成・一覧取得
//!
//! チャットとは独立した、インメモリの単純な追記・一覧 API です。

use std::sync::Arc;

use crate::domain::{
    Project, ProjectDescription, ProjectIdFactory, ProjectName, ProjectRepository,
};

use super::error::CreateProjectError;

/// プロジェクト作成のユースケース
pub struct CreateProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl CreateProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// name, description を trim して保存する
    ///
    /// どちらかが無い、または空白のみの場合は `InvalidInput`。
    pub async fn execute(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Project, CreateProjectError> {
        let name = name
            .and_then(|n| ProjectName::new(n).ok())
            .ok_or(CreateProjectError::InvalidInput)?;
        let description = description
            .and_then(|d| ProjectDescription::new(d).ok())
            .ok_or(CreateProjectError::InvalidInput)?;

        let project = Project {
            id: ProjectIdFactory::generate(),
            name,
            description,
        };
        self.repository
            .add(project.clone())
            .await
            .map_err(|e| CreateProjectError::StoreFailed(e.to_string()))?;

        tracing::info!("Project '{}' created", project.id);
        Ok(project)
    }
}

/// プロジェクト一覧取得のユースケース
pub struct ListProjectsUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl ListProjectsUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<Project> {
        self.repository.list().await
    }
}

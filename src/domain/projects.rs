//! Project management with the default-project guarantee.

use std::sync::Arc;

use crate::entities::ProjectRecord;
use crate::errors::KanriResult;
use crate::storage::Storage;

/// CRUD over projects.
pub struct ProjectService {
    storage: Arc<dyn Storage>,
}

impl ProjectService {
    /// Create a new project service.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// List all projects.
    ///
    /// An empty store yields the `"default"` sentinel so every task has a
    /// resolvable project context even before any project is created.
    pub async fn list(&self) -> KanriResult<Vec<ProjectRecord>> {
        let projects = self.storage.list_projects().await?;
        if projects.is_empty() {
            return Ok(vec![ProjectRecord::default_project()]);
        }
        Ok(projects)
    }

    /// Create a project with a fresh identifier.
    pub async fn create(&self, name: &str) -> KanriResult<ProjectRecord> {
        let record = ProjectRecord::new(name);
        self.storage.insert_project(&record).await?;
        tracing::info!(id = %record.id, name = %record.name, "project created");
        Ok(record)
    }

    /// Rename an existing project.
    pub async fn rename(&self, id: &str, name: &str) -> KanriResult<()> {
        self.storage.rename_project(id, name).await
    }
}

//! Storage abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ProjectRecord, TaskPatch, TaskRecord};
use crate::errors::KanriResult;

/// Keyed persistence for tasks and projects.
///
/// Task updates and deletes address a record by its composite identity
/// (`id` + `created_at`). Updates merge only the supplied patch fields.
/// Deleting an absent record succeeds, so retries with the same key are
/// idempotent; updating an absent record is an error.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a freshly created task. Pure insert, no read-modify-write.
    async fn insert_task(&self, record: &TaskRecord) -> KanriResult<()>;

    /// List all tasks.
    async fn list_tasks(&self) -> KanriResult<Vec<TaskRecord>>;

    /// Apply a partial update to the task with the given composite key.
    async fn update_task(
        &self,
        id: &str,
        created_at: DateTime<Utc>,
        patch: &TaskPatch,
    ) -> KanriResult<()>;

    /// Delete the task with the given composite key, if present.
    async fn delete_task(&self, id: &str, created_at: DateTime<Utc>) -> KanriResult<()>;

    /// Insert a new project.
    async fn insert_project(&self, record: &ProjectRecord) -> KanriResult<()>;

    /// List all projects.
    async fn list_projects(&self) -> KanriResult<Vec<ProjectRecord>>;

    /// Rename the project with the given id.
    async fn rename_project(&self, id: &str, name: &str) -> KanriResult<()>;
}

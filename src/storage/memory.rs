//! In-memory storage adapter for tests and single-process development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::traits::Storage;
use crate::entities::{ProjectRecord, TaskPatch, TaskRecord};
use crate::errors::{KanriError, KanriResult};

/// In-memory storage, keyed by composite identity.
#[derive(Default)]
pub struct MemoryStorage {
    tasks: RwLock<HashMap<(String, DateTime<Utc>), TaskRecord>>,
    projects: RwLock<HashMap<String, ProjectRecord>>,
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn insert_task(&self, record: &TaskRecord) -> KanriResult<()> {
        self.tasks
            .write()
            .await
            .insert((record.id.clone(), record.created_at), record.clone());
        Ok(())
    }

    async fn list_tasks(&self) -> KanriResult<Vec<TaskRecord>> {
        let mut tasks: Vec<TaskRecord> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by_key(|t| t.created_at);
        Ok(tasks)
    }

    async fn update_task(
        &self,
        id: &str,
        created_at: DateTime<Utc>,
        patch: &TaskPatch,
    ) -> KanriResult<()> {
        let mut tasks = self.tasks.write().await;
        let record = tasks
            .get_mut(&(id.to_string(), created_at))
            .ok_or_else(|| KanriError::NotFound {
                entity: "task",
                key: format!("{id}@{}", created_at.to_rfc3339()),
            })?;
        patch.apply(record);
        Ok(())
    }

    async fn delete_task(&self, id: &str, created_at: DateTime<Utc>) -> KanriResult<()> {
        self.tasks
            .write()
            .await
            .remove(&(id.to_string(), created_at));
        Ok(())
    }

    async fn insert_project(&self, record: &ProjectRecord) -> KanriResult<()> {
        self.projects
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn list_projects(&self) -> KanriResult<Vec<ProjectRecord>> {
        let mut projects: Vec<ProjectRecord> =
            self.projects.read().await.values().cloned().collect();
        projects.sort_by_key(|p| p.created_at);
        Ok(projects)
    }

    async fn rename_project(&self, id: &str, name: &str) -> KanriResult<()> {
        let mut projects = self.projects.write().await;
        let record = projects.get_mut(id).ok_or_else(|| KanriError::NotFound {
            entity: "project",
            key: id.to_string(),
        })?;
        record.name = name.to_string();
        Ok(())
    }
}

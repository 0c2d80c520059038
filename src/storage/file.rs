//! JSON-file storage implementation.
//!
//! Single-node persistence: tasks and projects each live in one
//! pretty-printed JSON file under the data directory. A missing file reads
//! as an empty collection. A mutex serializes read-modify-write cycles.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use super::traits::Storage;
use crate::entities::{ProjectRecord, TaskPatch, TaskRecord};
use crate::errors::{KanriError, KanriResult};

/// File-based storage implementation.
pub struct FileStorage {
    /// Path to tasks.json
    tasks_file: PathBuf,

    /// Path to projects.json
    projects_file: PathBuf,

    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Create a new file storage instance rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            tasks_file: data_dir.join("tasks.json"),
            projects_file: data_dir.join("projects.json"),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_collection<T: DeserializeOwned>(path: &Path) -> KanriResult<Vec<T>> {
        match fs::read_to_string(path).await {
            Ok(content) => {
                let records: Vec<T> = serde_json::from_str(&content)?;
                Ok(records)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(KanriError::FileRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> KanriResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| KanriError::FileWrite {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })?;
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(path, content)
            .await
            .map_err(|e| KanriError::FileWrite {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn insert_task(&self, record: &TaskRecord) -> KanriResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks: Vec<TaskRecord> = Self::read_collection(&self.tasks_file).await?;
        tasks.push(record.clone());
        Self::write_collection(&self.tasks_file, &tasks).await
    }

    async fn list_tasks(&self) -> KanriResult<Vec<TaskRecord>> {
        Self::read_collection(&self.tasks_file).await
    }

    async fn update_task(
        &self,
        id: &str,
        created_at: DateTime<Utc>,
        patch: &TaskPatch,
    ) -> KanriResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks: Vec<TaskRecord> = Self::read_collection(&self.tasks_file).await?;

        let record = tasks
            .iter_mut()
            .find(|t| t.id == id && t.created_at == created_at)
            .ok_or_else(|| KanriError::NotFound {
                entity: "task",
                key: format!("{id}@{}", created_at.to_rfc3339()),
            })?;
        patch.apply(record);

        Self::write_collection(&self.tasks_file, &tasks).await
    }

    async fn delete_task(&self, id: &str, created_at: DateTime<Utc>) -> KanriResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks: Vec<TaskRecord> = Self::read_collection(&self.tasks_file).await?;
        tasks.retain(|t| !(t.id == id && t.created_at == created_at));
        Self::write_collection(&self.tasks_file, &tasks).await
    }

    async fn insert_project(&self, record: &ProjectRecord) -> KanriResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut projects: Vec<ProjectRecord> = Self::read_collection(&self.projects_file).await?;
        projects.push(record.clone());
        Self::write_collection(&self.projects_file, &projects).await
    }

    async fn list_projects(&self) -> KanriResult<Vec<ProjectRecord>> {
        Self::read_collection(&self.projects_file).await
    }

    async fn rename_project(&self, id: &str, name: &str) -> KanriResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut projects: Vec<ProjectRecord> = Self::read_collection(&self.projects_file).await?;

        let record = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| KanriError::NotFound {
                entity: "project",
                key: id.to_string(),
            })?;
        record.name = name.to_string();

        Self::write_collection(&self.projects_file, &projects).await
    }
}

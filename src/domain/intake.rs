//! Task intake: from a validated draft to a committed record.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::entities::{TaskPriority, TaskRecord, TaskStatus, DEFAULT_PROJECT_ID};
use crate::errors::KanriResult;
use crate::storage::Storage;

use super::parser::TaskRequestParser;

/// Turns intake messages into persisted task records.
pub struct TaskIntakeService {
    parser: TaskRequestParser,
    storage: Arc<dyn Storage>,
}

impl TaskIntakeService {
    /// Create a new intake service.
    pub fn new(parser: TaskRequestParser, storage: Arc<dyn Storage>) -> Self {
        Self { parser, storage }
    }

    /// Parse `message` and commit a new task record exactly once.
    ///
    /// Nothing is written unless the parser produced a fully validated
    /// draft; the write itself is a pure insert keyed by a fresh
    /// identifier, so no conflicting update can occur at creation time.
    pub async fn intake(
        &self,
        message: &str,
        priority_label: Option<&str>,
        project_id: Option<&str>,
    ) -> KanriResult<TaskRecord> {
        let today = Utc::now().date_naive();
        let draft = self.parser.parse(message, today).await?;

        let priority = priority_label
            .map(TaskPriority::from_label)
            .unwrap_or_default();

        let record = TaskRecord {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            title: draft.title,
            description: message.to_string(),
            priority: priority.rank(),
            status: TaskStatus::Open,
            assignee_id: draft.assignee,
            start_date: draft.start_date,
            end_date: draft.end_date,
            project_id: project_id.unwrap_or(DEFAULT_PROJECT_ID).to_string(),
        };

        self.storage.insert_task(&record).await?;

        tracing::info!(
            id = %record.id,
            title = %record.title,
            assignee = %record.assignee_id,
            "task committed"
        );

        Ok(record)
    }
}

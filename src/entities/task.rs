//! Task entities: drafts, persisted records, patches, status and priority.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Newly created, not yet started.
    #[default]
    Open,
    /// Work in progress.
    InProgress,
    /// Completed.
    Done,
}

/// Priority label accepted at intake, mapped to a numeric rank for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Numeric rank persisted on the record (Low: 1, Medium: 2, High: 3).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Map a free-form label to a priority. Unrecognized labels fall back
    /// to Medium.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Self::Low,
            "High" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// A fully validated, unpersisted candidate task pending commit.
///
/// Produced by the intake pipeline; either all fields are present and
/// non-empty or the draft does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Person the task is assigned to.
    pub assignee: String,
    /// First day of work.
    pub start_date: NaiveDate,
    /// Due date, never before `start_date`.
    pub end_date: NaiveDate,
}

/// A persisted task.
///
/// `id` + `created_at` form the composite identity used to address updates
/// and deletes. `id`, `created_at` and `description` are immutable after
/// creation; everything else changes only through an explicit [`TaskPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Unique identifier, generated at creation.
    pub id: String,
    /// Creation timestamp, part of the composite identity.
    pub created_at: DateTime<Utc>,
    /// Task title, as extracted from the intake message.
    pub title: String,
    /// Original raw intake message, verbatim.
    pub description: String,
    /// Numeric priority rank (1-3).
    pub priority: u8,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Person the task is assigned to.
    pub assignee_id: String,
    /// First day of work.
    pub start_date: NaiveDate,
    /// Due date.
    pub end_date: NaiveDate,
    /// Owning project.
    pub project_id: String,
}

/// Partial update for a task.
///
/// Lists exactly the fields that may change after creation; the immutable
/// fields (`id`, `createdAt`, `description`) are unrepresentable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl TaskPatch {
    /// Merge only the supplied fields into `record`.
    pub fn apply(&self, record: &mut TaskRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(start_date) = self.start_date {
            record.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            record.end_date = end_date;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
    }
}

//! Core entities: tasks, projects, and their wire forms.

mod project;
mod task;

pub use project::{ProjectRecord, DEFAULT_PROJECT_ID};
pub use task::{TaskDraft, TaskPatch, TaskPriority, TaskRecord, TaskStatus};

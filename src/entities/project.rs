//! Project entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the sentinel project every task can fall back to.
pub const DEFAULT_PROJECT_ID: &str = "default";

/// A project grouping tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Create a new project with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// The sentinel project, synthesized when no projects are stored so
    /// every task has a resolvable project context.
    pub fn default_project() -> Self {
        Self {
            id: DEFAULT_PROJECT_ID.to_string(),
            name: "Default Project".to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_projects_get_distinct_ids() {
        let a = ProjectRecord::new("alpha");
        let b = ProjectRecord::new("beta");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_project_sentinel() {
        let sentinel = ProjectRecord::default_project();
        assert_eq!(sentinel.id, DEFAULT_PROJECT_ID);
        assert_eq!(sentinel.name, "Default Project");
    }
}

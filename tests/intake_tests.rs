//! Integration tests for the intake pipeline.
//!
//! The model provider is replaced with deterministic fakes so the tests
//! exercise prompt orchestration, extraction, validation and the exactly-
//! once commit without any network access.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use kanri::entities::{TaskPatch, TaskStatus};
use kanri::{
    GenerateOptions, KanriError, KanriResult, MemoryStorage, ModelMessage, ModelProvider,
    ModelResponse, Storage, TaskIntakeService, TaskRequestParser, TokenUsage,
};

/// Provider returning a fixed reply.
struct FakeProvider {
    reply: String,
}

impl FakeProvider {
    fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
        })
    }
}

#[async_trait]
impl ModelProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn generate_text(
        &self,
        _messages: &[ModelMessage],
        _options: &GenerateOptions,
    ) -> KanriResult<ModelResponse> {
        Ok(ModelResponse {
            text: self.reply.clone(),
            usage: TokenUsage::default(),
            model: "fake-model".to_string(),
        })
    }
}

/// Provider whose calls always fail, as a dead endpoint would.
struct FailingProvider;

#[async_trait]
impl ModelProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn is_configured(&self) -> bool {
        false
    }

    async fn generate_text(
        &self,
        _messages: &[ModelMessage],
        _options: &GenerateOptions,
    ) -> KanriResult<ModelResponse> {
        Err(KanriError::Model("connection refused".to_string()))
    }
}

const GOOD_REPLY: &str = r#"Here is the task: {"title":"Fix bug","assignee":"Aki","startDate":"2024-01-29","endDate":"2024-01-31"}"#;

fn intake_with(provider: Arc<dyn ModelProvider>) -> (TaskIntakeService, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let parser = TaskRequestParser::new(provider, HashSet::new());
    let service = TaskIntakeService::new(parser, storage.clone());
    (service, storage)
}

#[tokio::test]
async fn test_intake_commits_open_task() {
    let (service, storage) = intake_with(FakeProvider::new(GOOD_REPLY));

    let record = service
        .intake("バグ修正、担当はAki、1/29から", Some("High"), None)
        .await
        .unwrap();

    assert_eq!(record.status, TaskStatus::Open);
    assert_eq!(record.priority, 3);
    assert_eq!(record.title, "Fix bug");
    assert_eq!(record.assignee_id, "Aki");
    assert_eq!(record.description, "バグ修正、担当はAki、1/29から");
    assert_eq!(record.project_id, "default");
    assert_eq!(
        record.start_date,
        NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
    );

    let stored = storage.list_tasks().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);
}

#[tokio::test]
async fn test_intake_generates_distinct_ids() {
    let (service, _) = intake_with(FakeProvider::new(GOOD_REPLY));

    let first = service.intake("task one", None, None).await.unwrap();
    let second = service.intake("task two", None, None).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());
}

#[tokio::test]
async fn test_unrecognized_priority_defaults_to_medium() {
    let (service, _) = intake_with(FakeProvider::new(GOOD_REPLY));

    let labeled = service.intake("task", Some("Urgent"), None).await.unwrap();
    let unlabeled = service.intake("task", None, None).await.unwrap();

    assert_eq!(labeled.priority, 2);
    assert_eq!(unlabeled.priority, 2);
}

#[tokio::test]
async fn test_explicit_project_id_is_kept() {
    let (service, _) = intake_with(FakeProvider::new(GOOD_REPLY));

    let record = service
        .intake("task", None, Some("proj-42"))
        .await
        .unwrap();
    assert_eq!(record.project_id, "proj-42");
}

#[tokio::test]
async fn test_unparseable_reply_writes_nothing() {
    let (service, storage) =
        intake_with(FakeProvider::new("I could not understand that request."));

    let err = service.intake("???", None, None).await.unwrap_err();

    assert!(err.is_client_error());
    assert!(storage.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_model_failure_is_server_class_and_writes_nothing() {
    let (service, storage) = intake_with(Arc::new(FailingProvider));

    let err = service.intake("task", None, None).await.unwrap_err();

    assert!(!err.is_client_error());
    assert!(matches!(err, KanriError::Model(_)));
    assert!(storage.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (service, storage) = intake_with(FakeProvider::new(GOOD_REPLY));
    let record = service.intake("task", None, None).await.unwrap();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        priority: Some(1),
        ..TaskPatch::default()
    };

    storage
        .update_task(&record.id, record.created_at, &patch)
        .await
        .unwrap();
    let after_first = storage.list_tasks().await.unwrap();

    storage
        .update_task(&record.id, record.created_at, &patch)
        .await
        .unwrap();
    let after_second = storage.list_tasks().await.unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second[0].status, TaskStatus::Done);
    assert_eq!(after_second[0].priority, 1);
    // Immutable fields untouched
    assert_eq!(after_second[0].id, record.id);
    assert_eq!(after_second[0].created_at, record.created_at);
    assert_eq!(after_second[0].description, record.description);
}

#[tokio::test]
async fn test_update_requires_full_composite_key() {
    let (service, storage) = intake_with(FakeProvider::new(GOOD_REPLY));
    let record = service.intake("task", None, None).await.unwrap();

    // Right id, wrong timestamp: not the same record
    let err = storage
        .update_task(&record.id, chrono::Utc::now(), &TaskPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, KanriError::NotFound { .. }));
}

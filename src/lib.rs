#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Kanri
//!
//! AI-assisted task intake and project tracking service.
//!
//! Free-form (typically Japanese) task descriptions are turned into
//! structured task records by an external language model, validated, and
//! persisted alongside plain CRUD operations for tasks and projects.
//!
//! The core is the intake pipeline:
//! - [`ai::prompts`] builds the model request,
//! - [`ai::extract`] pulls a structured object out of the untrusted reply,
//! - [`domain::parser`] orchestrates the call and validation,
//! - [`domain::intake`] commits the record exactly once.
//!
//! ## Example
//!
//! ```rust,ignore
//! use kanri::{AnthropicProvider, MemoryStorage, TaskIntakeService, TaskRequestParser};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(AnthropicProvider::new(api_key, model, timeout)?);
//! let parser = TaskRequestParser::new(provider, holidays);
//! let intake = TaskIntakeService::new(parser, Arc::new(MemoryStorage::default()));
//! let record = intake.intake("明日までにバグ修正、担当は田中", Some("High"), None).await?;
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Service configuration
pub mod config;

// Model integration
pub mod ai;

// Domain services
pub mod domain;

// Storage layer
pub mod storage;

// HTTP layer
pub mod server;

// Re-export key types for convenience
pub use ai::{
    extract_task_draft, AnthropicProvider, GenerateOptions, ModelMessage, ModelProvider,
    ModelResponse, ModelRole, TokenUsage,
};
pub use config::Config;
pub use entities::{
    ProjectRecord, TaskDraft, TaskPatch, TaskPriority, TaskRecord, TaskStatus,
};
pub use errors::{KanriError, KanriResult};
pub use domain::{ProjectService, TaskIntakeService, TaskRequestParser};
pub use server::{build_router, AppState};
pub use storage::{FileStorage, MemoryStorage, Storage};

//! Model integration for task intake.
//!
//! This module provides:
//! - Model provider abstraction behind [`ModelProvider`]
//! - The concrete Anthropic Messages API client
//! - Prompt construction for the intake request
//! - Extraction of a structured task object from untrusted model output

pub mod anthropic;
pub mod extract;
pub mod prompts;
pub mod provider;

// Re-exports
pub use anthropic::AnthropicProvider;
pub use extract::extract_task_draft;
pub use prompts::intake_messages;
pub use provider::{GenerateOptions, ModelMessage, ModelProvider, ModelResponse, ModelRole, TokenUsage};

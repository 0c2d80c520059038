//! Model provider trait and common types.
//!
//! The provider is an explicitly constructed, injected dependency so tests
//! can substitute a deterministic fake for the external model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::KanriResult;

/// Role of a message in a model conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    /// System message (sets context/behavior)
    System,
    /// User message (input)
    User,
    /// Assistant message (model response)
    Assistant,
}

/// A message exchanged with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMessage {
    /// Role of the message sender
    pub role: ModelRole,
    /// Content of the message
    pub content: String,
}

impl ModelMessage {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ModelRole::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ModelRole::User,
            content: content.into(),
        }
    }
}

/// Token usage reported for a model response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input tokens
    pub input_tokens: u32,
    /// Number of output tokens
    pub output_tokens: u32,
}

/// Response from a model invocation.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    /// Generated text content. Free text; not guaranteed to be clean JSON.
    pub text: String,
    /// Token usage information
    pub usage: TokenUsage,
    /// Model that generated the response
    pub model: String,
}

/// Options for a single generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature for sampling (0.0 to 1.0)
    pub temperature: Option<f32>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        // 500 tokens is plenty for one task object
        Self {
            max_tokens: 500,
            temperature: None,
        }
    }
}

/// Trait for external model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Get the provider name (e.g., "anthropic").
    fn name(&self) -> &'static str;

    /// Check if the provider is configured (has credentials).
    fn is_configured(&self) -> bool;

    /// Generate text from messages.
    ///
    /// One network call per invocation; the provider does not retry.
    async fn generate_text(
        &self,
        messages: &[ModelMessage],
        options: &GenerateOptions,
    ) -> KanriResult<ModelResponse>;
}

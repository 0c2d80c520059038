//! Natural-language task request parsing.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::ai::{extract_task_draft, intake_messages, GenerateOptions, ModelProvider};
use crate::entities::TaskDraft;
use crate::errors::{KanriError, KanriResult};

/// Orchestrates prompt construction, model invocation, response extraction
/// and field validation for one intake message.
pub struct TaskRequestParser {
    provider: Arc<dyn ModelProvider>,
    holidays: HashSet<NaiveDate>,
    options: GenerateOptions,
}

impl TaskRequestParser {
    /// Create a new parser over an injected model provider.
    ///
    /// `holidays` are the configured non-working days beyond weekends; they
    /// are passed to the model alongside the anchor date.
    pub fn new(provider: Arc<dyn ModelProvider>, holidays: HashSet<NaiveDate>) -> Self {
        Self {
            provider,
            holidays,
            options: GenerateOptions::default(),
        }
    }

    /// Parse `message` into a validated draft.
    ///
    /// The model is invoked exactly once per call; there is no automatic
    /// retry. Its date arithmetic is accepted as-is after validation — see
    /// [`crate::domain::calendar`] for the local reference implementation.
    /// Extraction failure is a client-class error; a failed model call is a
    /// server-class one.
    pub async fn parse(&self, message: &str, today: NaiveDate) -> KanriResult<TaskDraft> {
        let messages = intake_messages(message, today, &self.holidays);

        let response = self.provider.generate_text(&messages, &self.options).await?;
        tracing::debug!(
            provider = self.provider.name(),
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "model response received"
        );

        extract_task_draft(&response.text).ok_or_else(|| {
            tracing::warn!(
                reply_chars = response.text.len(),
                "no valid task object in model reply"
            );
            KanriError::Extraction
        })
    }
}

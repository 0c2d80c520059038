//! Prompt construction for the intake request.
//!
//! The model receives the free-text message, the current date as an anchor
//! for relative expressions, and instructions that offsets are business
//! days excluding weekends and Japanese public holidays. The output
//! contract asks for ONLY a JSON object; the extractor still treats the
//! reply as untrusted text.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::provider::ModelMessage;

const SYSTEM_PROMPT: &str = r#"## Role
You are a task intake assistant for a Japanese project tracker. You convert free-form task descriptions into a single structured task.

## Date rules
All date offsets are expressed in business days. A business day is a weekday that is neither a Saturday, a Sunday, nor a Japanese public holiday. Resolve relative expressions ("today", "tomorrow") against the anchor date given in the request.

Examples:
- "today + 3 days" = 3 business days from today
- "1/28 + 3 days" = 3 business days from Jan 28
- "tomorrow + 2 days" = 2 business days from tomorrow

## Output format
Return ONLY a valid JSON object with this exact structure:
{"title": "task name", "assignee": "person", "startDate": "YYYY-MM-DD", "endDate": "YYYY-MM-DD"}

No markdown formatting, no explanatory text before or after."#;

/// Build the message list for one intake request.
///
/// When the caller has configured extra holiday dates, they are listed in
/// the request so the model and the local calculator agree on the same
/// non-working days.
pub fn intake_messages(
    message: &str,
    today: NaiveDate,
    holidays: &HashSet<NaiveDate>,
) -> Vec<ModelMessage> {
    let mut user = format!(
        "Input: {message}\nToday: {today}\n\nParse this task and return JSON with startDate/endDate in YYYY-MM-DD format. Calculate business days (exclude weekends and Japanese holidays)."
    );

    if !holidays.is_empty() {
        let mut dates: Vec<String> = holidays.iter().map(ToString::to_string).collect();
        dates.sort_unstable();
        user.push_str("\nAdditional holidays to exclude: ");
        user.push_str(&dates.join(", "));
    }

    vec![ModelMessage::system(SYSTEM_PROMPT), ModelMessage::user(user)]
}

//! Extraction of a structured task object from untrusted model output.
//!
//! The model is asked to return only JSON, but the reply may be wrapped in
//! prose or code fences, or be malformed entirely. This boundary is a total
//! function: it either finds a fully valid task object or reports that none
//! was found, never failing fatally.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::entities::TaskDraft;

/// The fields the model must supply, as they appear on the wire.
#[derive(Debug, Deserialize)]
struct RawDraft {
    title: String,
    assignee: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
}

/// Matches the smallest substring enclosed by a single brace pair, never
/// spanning nested or unbalanced braces.
fn object_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[^{}]*\}").expect("hardcoded regex compiles"))
}

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("hardcoded regex compiles"))
}

/// Parse a date in strict `YYYY-MM-DD` shape into a real calendar date.
fn parse_strict_date(s: &str) -> Option<NaiveDate> {
    if !date_pattern().is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Locate and parse the task object embedded in `raw_text`.
///
/// Scans for the smallest brace-delimited substring containing all four
/// required keys (in any order), parses it as JSON, and validates every
/// field. Returns `None` on any failure.
pub fn extract_task_draft(raw_text: &str) -> Option<TaskDraft> {
    for candidate in object_pattern().find_iter(raw_text) {
        let Ok(raw) = serde_json::from_str::<RawDraft>(candidate.as_str()) else {
            continue;
        };
        if raw.title.trim().is_empty() || raw.assignee.trim().is_empty() {
            continue;
        }
        let Some(start_date) = parse_strict_date(&raw.start_date) else {
            continue;
        };
        let Some(end_date) = parse_strict_date(&raw.end_date) else {
            continue;
        };
        if end_date < start_date {
            continue;
        }

        return Some(TaskDraft {
            title: raw.title,
            assignee: raw.assignee,
            start_date,
            end_date,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_extracts_object_embedded_in_prose() {
        let text = r#"Sure, here you go: {"title":"Fix bug","assignee":"Aki","startDate":"2024-01-29","endDate":"2024-01-31"} Let me know if you need more."#;

        let draft = extract_task_draft(text).unwrap();
        assert_eq!(draft.title, "Fix bug");
        assert_eq!(draft.assignee, "Aki");
        assert_eq!(draft.start_date, ymd(2024, 1, 29));
        assert_eq!(draft.end_date, ymd(2024, 1, 31));
    }

    #[test]
    fn test_extracts_object_inside_code_fence() {
        let text = "```json\n{\"assignee\":\"田中\",\"endDate\":\"2024-02-02\",\"startDate\":\"2024-02-01\",\"title\":\"レビュー\"}\n```";

        let draft = extract_task_draft(text).unwrap();
        assert_eq!(draft.title, "レビュー");
        assert_eq!(draft.assignee, "田中");
    }

    #[test]
    fn test_prose_without_object_is_not_found() {
        assert!(extract_task_draft("I could not determine the task details.").is_none());
        assert!(extract_task_draft("").is_none());
    }

    #[test]
    fn test_object_missing_a_key_is_not_found() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"2024-01-29"}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_malformed_date_is_not_found() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"01/29/2024","endDate":"2024-01-31"}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_impossible_date_is_not_found() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"2024-13-01","endDate":"2024-13-02"}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_empty_field_is_not_found() {
        let text = r#"{"title":"","assignee":"Y","startDate":"2024-01-29","endDate":"2024-01-31"}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_end_before_start_is_not_found() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"2024-01-31","endDate":"2024-01-29"}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_malformed_syntax_is_not_found() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"2024-01-29","endDate":}"#;
        assert!(extract_task_draft(text).is_none());
    }

    #[test]
    fn test_skips_earlier_incomplete_objects() {
        let text = r#"{"note":"draft"} then {"title":"X","assignee":"Y","startDate":"2024-01-29","endDate":"2024-01-31"}"#;

        let draft = extract_task_draft(text).unwrap();
        assert_eq!(draft.title, "X");
    }

    #[test]
    fn test_finds_inner_object_of_nested_json() {
        // Only the inner brace pair is a candidate; the outer one spans
        // nested braces and is never considered.
        let text = r#"{"task": {"title":"X","assignee":"Y","startDate":"2024-01-29","endDate":"2024-01-31"}}"#;

        let draft = extract_task_draft(text).unwrap();
        assert_eq!(draft.title, "X");
    }

    #[test]
    fn test_equal_start_and_end_dates_are_valid() {
        let text = r#"{"title":"X","assignee":"Y","startDate":"2024-01-29","endDate":"2024-01-29"}"#;

        let draft = extract_task_draft(text).unwrap();
        assert_eq!(draft.start_date, draft.end_date);
    }
}

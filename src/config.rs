//! Environment-driven service configuration.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use crate::ai::anthropic::DEFAULT_MODEL;
use crate::errors::{KanriError, KanriResult};

/// Runtime configuration for the kanri server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,

    /// Anthropic API key.
    pub anthropic_api_key: Option<String>,

    /// Model used for intake parsing.
    pub model: String,

    /// Timeout applied to each model call.
    pub model_timeout: Duration,

    /// Dates treated as non-working days in addition to weekends.
    pub holidays: HashSet<NaiveDate>,

    /// Directory for the file storage adapter.
    pub data_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `KANRI_BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `ANTHROPIC_API_KEY`
    /// - `KANRI_MODEL` (default Claude Haiku)
    /// - `KANRI_MODEL_TIMEOUT_SECS` (default 30)
    /// - `KANRI_HOLIDAYS` — comma-separated `YYYY-MM-DD` dates
    /// - `KANRI_DATA_DIR` (default `.kanri`)
    pub fn from_env() -> KanriResult<Self> {
        let bind_addr =
            std::env::var("KANRI_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        let model = std::env::var("KANRI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let model_timeout = match std::env::var("KANRI_MODEL_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|_| {
                KanriError::Config(format!("invalid KANRI_MODEL_TIMEOUT_SECS: {raw}"))
            })?),
            Err(_) => Duration::from_secs(30),
        };

        let holidays = match std::env::var("KANRI_HOLIDAYS") {
            Ok(raw) => parse_holidays(&raw)?,
            Err(_) => HashSet::new(),
        };

        let data_dir = std::env::var("KANRI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".kanri"));

        Ok(Self {
            bind_addr,
            anthropic_api_key,
            model,
            model_timeout,
            holidays,
            data_dir,
        })
    }
}

/// Parse a comma-separated list of `YYYY-MM-DD` dates.
fn parse_holidays(raw: &str) -> KanriResult<HashSet<NaiveDate>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| KanriError::Config(format!("invalid holiday date: {s}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_holidays() {
        let holidays = parse_holidays("2024-01-01, 2024-02-11,2024-02-12").unwrap();
        assert_eq!(holidays.len(), 3);
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }

    #[test]
    fn test_parse_holidays_empty_and_trailing_commas() {
        assert!(parse_holidays("").unwrap().is_empty());
        assert_eq!(parse_holidays("2024-01-01,").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_holidays_rejects_bad_date() {
        let err = parse_holidays("01/01/2024").unwrap_err();
        assert!(err.to_string().contains("invalid holiday date"));
    }
}

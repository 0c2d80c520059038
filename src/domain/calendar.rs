//! Business-day date arithmetic.
//!
//! A business day is a weekday that is not in the configured holiday set.
//! The intake pipeline trusts the model's date arithmetic once validated;
//! this calculator is the correct local reference for callers that choose
//! to re-verify or recompute server-side.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Whether `date` is a working day: a weekday outside the holiday set.
pub fn is_business_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Advance `start` by `offset_days` business days.
///
/// Steps one calendar day at a time; a step counts only when it lands on a
/// business day. The calculator only advances, never adjusts the anchor:
/// an offset of zero returns `start` unchanged even when `start` itself
/// falls on a weekend or holiday.
pub fn advance(start: NaiveDate, offset_days: u32, holidays: &HashSet<NaiveDate>) -> NaiveDate {
    let mut date = start;
    let mut counted = 0;

    while counted < offset_days {
        let Some(next) = date.succ_opt() else {
            // Saturate at the end of the representable calendar.
            return date;
        };
        date = next;
        if is_business_day(date, holidays) {
            counted += 1;
        }
    }

    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_offset_returns_anchor_even_on_weekend() {
        let saturday = ymd(2024, 1, 27);
        assert_eq!(advance(saturday, 0, &HashSet::new()), saturday);
    }

    #[test]
    fn test_advance_skips_weekend() {
        // Friday + 1 business day lands on Monday
        let friday = ymd(2024, 1, 26);
        assert_eq!(advance(friday, 1, &HashSet::new()), ymd(2024, 1, 29));
    }

    #[test]
    fn test_advance_skips_holiday() {
        // 2024-01-01 (Monday) is a holiday, so Friday + 1 lands on Tuesday
        let holidays: HashSet<NaiveDate> = [ymd(2024, 1, 1)].into_iter().collect();
        let friday = ymd(2023, 12, 29);
        assert_eq!(advance(friday, 1, &holidays), ymd(2024, 1, 2));
    }

    #[test]
    fn test_result_is_never_a_non_business_day() {
        let holidays: HashSet<NaiveDate> = [ymd(2024, 2, 12), ymd(2024, 2, 23)]
            .into_iter()
            .collect();
        let start = ymd(2024, 2, 1);

        for offset in 1..40 {
            let result = advance(start, offset, &holidays);
            assert!(
                is_business_day(result, &holidays),
                "offset {offset} landed on non-business day {result}"
            );
        }
    }

    #[test]
    fn test_positive_offset_is_strictly_after_anchor() {
        let start = ymd(2024, 3, 15);
        for offset in 1..20 {
            assert!(advance(start, offset, &HashSet::new()) > start);
        }
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let start = ymd(2024, 6, 3);
        let holidays: HashSet<NaiveDate> = [ymd(2024, 6, 10)].into_iter().collect();
        let mut previous = start;
        for offset in 1..15 {
            let result = advance(start, offset, &holidays);
            assert!(result > previous);
            previous = result;
        }
    }
}

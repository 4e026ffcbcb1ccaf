use crate::advice;
use crate::domain::metrics::{DailyLog, WeeklyMetrics};
use crate::domain::report::{AdviceResult, WeeklyReport, WeeklySummary};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const WINDOW_DAYS: i64 = 7;

/// First day of the seven-day window ending at `as_of` (inclusive). Saturates
/// at `NaiveDate::MIN` for as-of dates at the start of the calendar range.
pub fn window_start(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_signed(Duration::days(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Averages the logs that fall inside the window ending at `as_of`.
///
/// Later logs replace earlier ones for the same date. Averages are rounded to
/// one decimal by rounding `v * 10` half away from zero, so `0.15` (stored just
/// below 0.15) becomes `0.2` where JS `toFixed(1)` gives `0.1`. An empty window
/// yields all zeros with `count == 0`.
pub fn summarize(logs: &[DailyLog], as_of: NaiveDate) -> WeeklySummary {
    let start = window_start(as_of);

    let mut by_date = BTreeMap::<NaiveDate, &DailyLog>::new();
    for log in logs {
        if log.date < start || log.date > as_of {
            tracing::trace!(date = %log.date, %as_of, "daily log outside window; skipped");
            continue;
        }
        by_date.insert(log.date, log);
    }

    let count = by_date.len();
    if count == 0 {
        return WeeklySummary {
            metrics: WeeklyMetrics::default(),
            count,
        };
    }

    // Accumulate x / n rather than dividing the sum so large finite inputs stay finite.
    let n = count as f64;
    let mut mean = WeeklyMetrics::default();
    for log in by_date.values() {
        mean.sleep += log.sleep / n;
        mean.study += log.study / n;
        mean.entertainment += log.entertainment / n;
        mean.exercise += log.exercise / n;
        mean.mood += log.mood / n;
        mean.stress += log.stress / n;
    }

    WeeklySummary {
        metrics: WeeklyMetrics {
            sleep: round_tenth(mean.sleep),
            study: round_tenth(mean.study),
            entertainment: round_tenth(mean.entertainment),
            exercise: round_tenth(mean.exercise),
            mood: round_tenth(mean.mood),
            stress: round_tenth(mean.stress),
        },
        count,
    }
}

/// Summarizes the window and runs the advice rules over the averages.
pub fn analyze_week(logs: &[DailyLog], as_of: NaiveDate) -> WeeklyReport {
    let summary = summarize(logs, as_of);
    let AdviceResult { advice } = advice::evaluate(&summary.metrics);
    WeeklyReport {
        as_of_date: as_of,
        summary,
        advice,
    }
}

fn round_tenth(v: f64) -> f64 {
    let scaled = v * 10.0;
    if !scaled.is_finite() {
        // Already far past one-decimal precision.
        return v;
    }
    scaled.round() / 10.0
}

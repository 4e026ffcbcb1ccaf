use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day averages over one week, as submitted by a client or produced by
/// [`crate::summary::summarize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMetrics {
    pub sleep: f64,
    pub study: f64,
    pub entertainment: f64,
    pub exercise: f64,
    /// Carried through the contract; no advice rule reads it.
    pub mood: f64,
    pub stress: f64,
}

/// A single day's self-reported entry. Hour fields default to 0, the 1-10
/// scales default to their midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub sleep: f64,
    #[serde(default)]
    pub study: f64,
    #[serde(default)]
    pub entertainment: f64,
    #[serde(default)]
    pub exercise: f64,
    #[serde(default = "default_scale")]
    pub mood: f64,
    #[serde(default = "default_scale")]
    pub stress: f64,
}

fn default_scale() -> f64 {
    5.0
}

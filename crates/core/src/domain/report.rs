use crate::domain::metrics::WeeklyMetrics;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    #[serde(flatten)]
    pub metrics: WeeklyMetrics,
    /// Number of daily logs that contributed to the averages.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub as_of_date: NaiveDate,
    pub summary: WeeklySummary,
    pub advice: Vec<String>,
}

use crate::domain::metrics::WeeklyMetrics;

pub const SLEEP_LOW: &str = "Increase sleep to at least 7 hours.";
pub const SLEEP_OK: &str = "Good sleep consistency detected.";
pub const STUDY_LOW: &str = "Increase structured learning time for better retention.";
pub const STUDY_OK: &str = "Study rhythm is healthy. Keep consistency.";
pub const SCREEN_TIME_HIGH: &str =
    "Screen time seems high. Try replacing 30 minutes with reading or walking.";
pub const EXERCISE_LOW: &str = "Add 20 minutes of physical activity to improve energy and focus.";
pub const STRESS_HIGH: &str = "High stress detected. Try journaling or deep breathing sessions.";

/// The metrics a rule may inspect. `mood` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sleep,
    Study,
    Entertainment,
    Exercise,
    Stress,
}

impl Metric {
    pub fn read(self, metrics: &WeeklyMetrics) -> f64 {
        match self {
            Metric::Sleep => metrics.sleep,
            Metric::Study => metrics.study,
            Metric::Entertainment => metrics.entertainment,
            Metric::Exercise => metrics.exercise,
            Metric::Stress => metrics.stress,
        }
    }
}

/// Strict comparison against a threshold; equality never holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Below,
    Above,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Below => value < threshold,
            Comparison::Above => value > threshold,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    pub metric: Metric,
    pub comparison: Comparison,
    pub threshold: f64,
    pub when_met: &'static str,
    pub otherwise: Option<&'static str>,
}

impl ThresholdRule {
    pub fn select(&self, metrics: &WeeklyMetrics) -> Option<&'static str> {
        if self.comparison.holds(self.metric.read(metrics), self.threshold) {
            Some(self.when_met)
        } else {
            self.otherwise
        }
    }
}

// Order is the display order of the resulting advice.
pub const RULES: [ThresholdRule; 5] = [
    ThresholdRule {
        metric: Metric::Sleep,
        comparison: Comparison::Below,
        threshold: 7.0,
        when_met: SLEEP_LOW,
        otherwise: Some(SLEEP_OK),
    },
    ThresholdRule {
        metric: Metric::Study,
        comparison: Comparison::Below,
        threshold: 3.0,
        when_met: STUDY_LOW,
        otherwise: Some(STUDY_OK),
    },
    ThresholdRule {
        metric: Metric::Entertainment,
        comparison: Comparison::Above,
        threshold: 3.0,
        when_met: SCREEN_TIME_HIGH,
        otherwise: None,
    },
    ThresholdRule {
        metric: Metric::Exercise,
        comparison: Comparison::Below,
        threshold: 0.5,
        when_met: EXERCISE_LOW,
        otherwise: None,
    },
    ThresholdRule {
        metric: Metric::Stress,
        comparison: Comparison::Above,
        threshold: 6.0,
        when_met: STRESS_HIGH,
        otherwise: None,
    },
];

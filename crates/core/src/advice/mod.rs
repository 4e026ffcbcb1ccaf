pub mod rules;

use crate::domain::metrics::WeeklyMetrics;
use crate::domain::report::AdviceResult;

/// Runs every threshold rule in order and collects the advice each one selects.
///
/// Never fails: any real input, including negative or very large values, maps
/// to between two and five messages.
pub fn evaluate(metrics: &WeeklyMetrics) -> AdviceResult {
    let advice = rules::RULES
        .iter()
        .filter_map(|rule| rule.select(metrics))
        .map(str::to_string)
        .collect();
    AdviceResult { advice }
}

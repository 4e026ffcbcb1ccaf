use anyhow::Context;
use pathpilot_core::domain::metrics::DailyLog;
use std::path::Path;

/// Reads a JSON array of daily logs from `path`.
pub fn load_daily_logs(path: &Path) -> anyhow::Result<Vec<DailyLog>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read daily logs from {}", path.display()))?;
    parse_daily_logs(&raw).with_context(|| format!("invalid daily logs in {}", path.display()))
}

pub fn parse_daily_logs(raw: &str) -> anyhow::Result<Vec<DailyLog>> {
    let logs = serde_json::from_str::<Vec<DailyLog>>(raw)
        .context("expected a JSON array of {date, sleep, study, entertainment, exercise, mood, stress}")?;
    Ok(logs)
}

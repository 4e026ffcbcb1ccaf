use chrono::{DateTime, NaiveDate, Utc};

/// Parses an explicit `YYYY-MM-DD` as-of date, or falls back to the UTC date of `now_utc`.
pub fn resolve_as_of_date(
    as_of_date_arg: Option<&str>,
    now_utc: DateTime<Utc>,
) -> anyhow::Result<NaiveDate> {
    if let Some(s) = as_of_date_arg {
        return NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid as-of date {s:?} (expected YYYY-MM-DD): {e}"));
    }
    Ok(now_utc.date_naive())
}

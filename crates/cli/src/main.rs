use clap::{Parser, Subcommand};
use pathpilot_core::domain::metrics::WeeklyMetrics;
use pathpilot_core::domain::report::WeeklyReport;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod logs;

#[derive(Debug, Parser)]
#[command(name = "pathpilot_cli")]
struct Args {
    /// Print machine-readable JSON instead of plain lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate already-averaged weekly metrics.
    Analyze {
        #[arg(long, allow_negative_numbers = true)]
        sleep: f64,
        #[arg(long, allow_negative_numbers = true)]
        study: f64,
        #[arg(long, allow_negative_numbers = true)]
        entertainment: f64,
        #[arg(long, allow_negative_numbers = true)]
        exercise: f64,
        #[arg(long, allow_negative_numbers = true)]
        mood: f64,
        #[arg(long, allow_negative_numbers = true)]
        stress: f64,
    },
    /// Average a file of daily logs over the week ending at the as-of date, then evaluate.
    Weekly {
        /// JSON array of daily logs.
        #[arg(long)]
        logs: PathBuf,

        /// Last day of the window (YYYY-MM-DD). Defaults to today's UTC date.
        #[arg(long)]
        as_of_date: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = pathpilot_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "pathpilot_cli failed");
            Err(err)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Vec<String>> {
    match &args.command {
        Command::Analyze {
            sleep,
            study,
            entertainment,
            exercise,
            mood,
            stress,
        } => {
            let metrics = WeeklyMetrics {
                sleep: *sleep,
                study: *study,
                entertainment: *entertainment,
                exercise: *exercise,
                mood: *mood,
                stress: *stress,
            };
            let result = pathpilot_core::advice::evaluate(&metrics);
            tracing::debug!(advice_len = result.advice.len(), "evaluated metrics");

            if args.json {
                return Ok(vec![serde_json::to_string_pretty(&result)?]);
            }
            Ok(result.advice)
        }
        Command::Weekly { logs, as_of_date } => {
            let as_of_date =
                pathpilot_core::time::resolve_as_of_date(as_of_date.as_deref(), chrono::Utc::now())?;
            let daily = logs::load_daily_logs(logs)?;
            let report = pathpilot_core::summary::analyze_week(&daily, as_of_date);
            tracing::info!(
                %as_of_date,
                submitted = daily.len(),
                count = report.summary.count,
                "weekly logs summarized"
            );

            if args.json {
                return Ok(vec![serde_json::to_string_pretty(&report)?]);
            }
            Ok(render_report(&report))
        }
    }
}

fn render_report(report: &WeeklyReport) -> Vec<String> {
    let m = &report.summary.metrics;
    let mut out = Vec::with_capacity(report.advice.len() + 1);
    out.push(format!(
        "week ending {} ({} day(s) logged): sleep {:.1}h, study {:.1}h, entertainment {:.1}h, exercise {:.1}h, mood {:.1}, stress {:.1}",
        report.as_of_date,
        report.summary.count,
        m.sleep,
        m.study,
        m.entertainment,
        m.exercise,
        m.mood,
        m.stress,
    ));
    out.extend(report.advice.iter().map(|a| format!("- {a}")));
    out
}

fn init_sentry(settings: &pathpilot_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathpilot_core::advice::rules::{
        SCREEN_TIME_HIGH, SLEEP_LOW, SLEEP_OK, STRESS_HIGH, STUDY_LOW, STUDY_OK,
    };

    #[test]
    fn analyze_flags_parse_and_evaluate() {
        let args = Args::try_parse_from([
            "pathpilot_cli",
            "analyze",
            "--sleep",
            "8",
            "--study",
            "4",
            "--entertainment",
            "1",
            "--exercise",
            "1",
            "--mood",
            "5",
            "--stress",
            "2",
        ])
        .unwrap();
        assert_eq!(run(&args).unwrap(), vec![SLEEP_OK, STUDY_OK]);
    }

    #[test]
    fn analyze_accepts_negative_values() {
        let args = Args::try_parse_from([
            "pathpilot_cli",
            "analyze",
            "--sleep",
            "-1",
            "--study",
            "-1",
            "--entertainment",
            "0",
            "--exercise",
            "1",
            "--mood",
            "0",
            "--stress",
            "0",
            "--json",
        ])
        .unwrap();
        let out = run(&args).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(v["advice"], serde_json::json!([SLEEP_LOW, STUDY_LOW]));
    }

    #[test]
    fn analyze_requires_every_metric() {
        let res = Args::try_parse_from(["pathpilot_cli", "analyze", "--sleep", "8"]);
        assert!(res.is_err());
    }

    #[test]
    fn weekly_rejects_bad_date_before_reading_file() {
        let args = Args::try_parse_from([
            "pathpilot_cli",
            "weekly",
            "--logs",
            "/nonexistent.json",
            "--as-of-date",
            "yesterday",
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid as-of date"));
    }

    fn write_logs(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("logs.json");
        std::fs::write(
            &path,
            r#"[
                {"date": "2026-10-13", "sleep": 6, "study": 2, "entertainment": 4, "exercise": 0.5, "mood": 4, "stress": 7},
                {"date": "2026-10-14", "sleep": 7, "study": 2, "entertainment": 5, "exercise": 0.5, "mood": 6, "stress": 8},
                {"date": "2026-09-01", "sleep": 12, "study": 12}
            ]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn weekly_summarizes_file_and_renders_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_logs(&dir);
        let args = Args::try_parse_from([
            "pathpilot_cli",
            "weekly",
            "--logs",
            path.to_str().unwrap(),
            "--as-of-date",
            "2026-10-14",
        ])
        .unwrap();

        let lines = run(&args).unwrap();
        assert_eq!(
            lines[0],
            "week ending 2026-10-14 (2 day(s) logged): sleep 6.5h, study 2.0h, entertainment 4.5h, exercise 0.5h, mood 5.0, stress 7.5"
        );
        assert_eq!(
            &lines[1..],
            &[
                format!("- {SLEEP_LOW}"),
                format!("- {STUDY_LOW}"),
                format!("- {SCREEN_TIME_HIGH}"),
                format!("- {STRESS_HIGH}"),
            ]
        );
    }

    #[test]
    fn weekly_json_emits_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_logs(&dir);
        let args = Args::try_parse_from([
            "pathpilot_cli",
            "weekly",
            "--logs",
            path.to_str().unwrap(),
            "--as-of-date",
            "2026-10-14",
            "--json",
        ])
        .unwrap();

        let out = run(&args).unwrap();
        assert_eq!(out.len(), 1);
        let report: WeeklyReport = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(
            report.as_of_date,
            chrono::NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
        );
        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.metrics.sleep, 6.5);
        assert_eq!(report.advice.len(), 4);
    }

    #[test]
    fn render_report_leads_with_summary_line() {
        let as_of = chrono::NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let report = pathpilot_core::summary::analyze_week(&[], as_of);
        let lines = render_report(&report);
        assert!(lines[0].starts_with("week ending 2026-10-14 (0 day(s) logged)"));
        assert_eq!(lines.len(), 1 + report.advice.len());
        assert_eq!(lines[1], format!("- {SLEEP_LOW}"));
    }
}

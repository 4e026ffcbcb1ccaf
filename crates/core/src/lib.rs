pub mod advice;
pub mod domain;
pub mod summary;
pub mod time;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_PORT: u16 = 8000;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Settings {
        pub port: u16,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
        where
            F: Fn(&str) -> Option<String>,
        {
            let port = match lookup("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {v:?})"))?,
                None => DEFAULT_PORT,
            };

            Ok(Self {
                port,
                sentry_dsn: lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
            })
        }
    }

}

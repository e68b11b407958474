pub mod analysis;
pub mod domain;
pub mod registry;
pub mod scoring;
pub mod time;
pub mod web;

pub mod config {
    use anyhow::Context;
    use std::str::FromStr;
    use std::time::Duration;

    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_BATCH_LATENCY_MS: u64 = 1000;
    pub const DEFAULT_MODEL_LATENCY_MS: u64 = 500;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub host: String,
        pub port: Option<u16>,
        pub sentry_dsn: Option<String>,
        pub batch_latency: Duration,
        pub model_latency: Duration,
        pub scorer_seed: Option<u64>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

            Ok(Self {
                host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: parse_var(var("PORT"), "PORT")?,
                sentry_dsn: var("SENTRY_DSN"),
                batch_latency: Duration::from_millis(
                    parse_var(var("BATCH_LATENCY_MS"), "BATCH_LATENCY_MS")?
                        .unwrap_or(DEFAULT_BATCH_LATENCY_MS),
                ),
                model_latency: Duration::from_millis(
                    parse_var(var("MODEL_LATENCY_MS"), "MODEL_LATENCY_MS")?
                        .unwrap_or(DEFAULT_MODEL_LATENCY_MS),
                ),
                scorer_seed: parse_var(var("SCORER_SEED"), "SCORER_SEED")?,
            })
        }

        pub fn port_or(&self, default: u16) -> u16 {
            self.port.unwrap_or(default)
        }
    }

    fn parse_var<T>(value: Option<String>, key: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        value
            .map(|v| {
                v.trim()
                    .parse::<T>()
                    .with_context(|| format!("{key} has an invalid value: {v}"))
            })
            .transpose()
    }

}

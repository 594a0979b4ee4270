use clap::Args;
use std::time::Duration;
use tradedir_application::DEFAULT_LIMIT;
use tradedir_infrastructure::rate_limiting::DEFAULT_MIN_INTERVAL;
use tradedir_infrastructure::registry::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};

/// Runtime settings. Each one comes from its flag, then its `TRADEDIR_*`
/// variable, then the built-in default. Blank variables count as unset.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct AppConfig {
    /// Minimum spacing between outbound fetches.
    #[arg(
        long = "min-interval-ms",
        env = "TRADEDIR_MIN_FETCH_INTERVAL_MS",
        default_value_t = DEFAULT_MIN_INTERVAL.as_millis() as u64
    )]
    pub min_fetch_interval_ms: u64,

    /// Per-request timeout.
    #[arg(
        long = "timeout-ms",
        env = "TRADEDIR_FETCH_TIMEOUT_MS",
        default_value_t = DEFAULT_FETCH_TIMEOUT.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub fetch_timeout_ms: u64,

    /// Records returned when `--limit` is not given.
    #[arg(
        long,
        env = "TRADEDIR_DEFAULT_LIMIT",
        default_value_t = DEFAULT_LIMIT,
        value_parser = parse_limit
    )]
    pub default_limit: usize,

    #[arg(long, env = "TRADEDIR_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl AppConfig {
    pub fn min_fetch_interval(&self) -> Duration {
        Duration::from_millis(self.min_fetch_interval_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_fetch_interval_ms: DEFAULT_MIN_INTERVAL.as_millis() as u64,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT.as_millis() as u64,
            default_limit: DEFAULT_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let limit: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a valid count"))?;
    if limit == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(limit)
}

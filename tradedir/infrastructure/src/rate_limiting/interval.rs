use async_trait::async_trait;
use shaku::Component;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;
use tradedir_application::{RateLimiter, RateLimiterError};

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(2000);

/// Process-wide spacing between outbound fetches.
///
/// The lock is held while waiting, so concurrent callers queue in arrival
/// order and each one observes the timestamp written by its predecessor.
#[derive(Component)]
#[shaku(interface = RateLimiter)]
pub struct IntervalRateLimiter {
    #[shaku(default = DEFAULT_MIN_INTERVAL)]
    min_interval: Duration,

    #[shaku(default = Mutex::new(None))]
    last_fetch: Mutex<Option<Instant>>,
}

impl IntervalRateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_fetch: Mutex::new(None),
        }
    }
}

#[async_trait]
impl RateLimiter for IntervalRateLimiter {
    async fn acquire(&self) -> Result<(), RateLimiterError> {
        let mut last_fetch = self.last_fetch.lock().await;

        if let Some(previous) = *last_fetch {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                debug!("Rate limit: waiting {:?} before next fetch", ready_at - now);
                tokio::time::sleep_until(ready_at).await;
            }
        }

        *last_fetch = Some(Instant::now());
        Ok(())
    }
}

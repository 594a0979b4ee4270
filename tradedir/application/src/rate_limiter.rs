use async_trait::async_trait;
use shaku::Interface;

/// Spacing guard for outbound directory requests. Every live fetch awaits
/// `acquire` first, whichever source it targets.
#[async_trait]
pub trait RateLimiter: Interface {
    async fn acquire(&self) -> Result<(), RateLimiterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimiterError {
    #[error("Rate limiter unavailable: {0}")]
    Unavailable(String),
}

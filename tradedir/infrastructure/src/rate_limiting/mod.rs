pub mod interval;

pub use interval::{IntervalRateLimiter, IntervalRateLimiterParameters, DEFAULT_MIN_INTERVAL};

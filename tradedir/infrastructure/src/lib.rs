pub mod clock;
pub mod gateways;
pub mod parsers;
pub mod rate_limiting;
pub mod registry;

pub use clock::SystemClock;
pub use gateways::{HttpSourceFetcher, RosterSyntheticGenerator};
pub use parsers::{DgftParser, TableLayout, TradePortalParser};
pub use rate_limiting::IntervalRateLimiter;
pub use registry::{default_live_sources, SourceSettings};

pub mod aggregator;
pub mod clock;
pub mod ports;
pub mod rate_limiter;
pub mod sources;

pub use aggregator::{
    AggregateResult, AggregationError, AggregatorImpl, DirectoryAggregator, DirectoryResponse,
    OutcomeStatus, ResponseMetadata, SourceOutcome, DEFAULT_LIMIT,
};
pub use clock::Clock;
pub use ports::{
    FetchError, FetchRequest, ParseContext, ParseError, RecordParser, SourceFetcher,
    SyntheticGenerator,
};
pub use rate_limiter::{RateLimiter, RateLimiterError};
pub use sources::{LiveSource, HS_CODE_PLACEHOLDER};

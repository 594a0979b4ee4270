pub mod http;
pub mod synthetic;

pub use http::HttpSourceFetcher;
pub use synthetic::RosterSyntheticGenerator;

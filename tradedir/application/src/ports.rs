use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;
use tradedir_domain::{BusinessRole, CompanyRecord, HsCode, Source};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub source: Source,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Issues exactly one request per call; retrying is not this port's job.
#[async_trait]
pub trait SourceFetcher: Interface {
    async fn fetch(&self, request: &FetchRequest) -> Result<String, FetchError>;
}

#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub hs_code: &'a HsCode,
    pub role: BusinessRole,
}

/// Turns one source's markup into company records. Implementations never
/// fail on malformed markup; they return whatever rows they could read.
pub trait RecordParser: Send + Sync {
    fn source(&self) -> Source;

    fn parse(
        &self,
        body: &str,
        context: &ParseContext<'_>,
    ) -> Result<Vec<CompanyRecord>, ParseError>;
}

/// Deterministic placeholder directory used as the last-priority source.
pub trait SyntheticGenerator: Interface {
    fn generate(&self, hs_code: &HsCode, role: BusinessRole) -> Vec<CompanyRecord>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{origin}: request timed out after {timeout_ms} ms")]
    Timeout { origin: Source, timeout_ms: u64 },

    #[error("{origin}: unexpected HTTP status {status}")]
    Status { origin: Source, status: u16 },

    #[error("{origin}: network error: {reason}")]
    Network { origin: Source, reason: String },

    #[error("{origin}: failed to read response body: {reason}")]
    Body { origin: Source, reason: String },
}

impl FetchError {
    pub fn origin(&self) -> Source {
        match self {
            FetchError::Timeout { origin, .. }
            | FetchError::Status { origin, .. }
            | FetchError::Network { origin, .. }
            | FetchError::Body { origin, .. } => *origin,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("{origin}: invalid selector `{selector}`")]
    InvalidSelector { origin: Source, selector: String },
}

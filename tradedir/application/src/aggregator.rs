use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shaku::{Component, Interface};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::ports::{ParseContext, SourceFetcher, SyntheticGenerator};
use crate::rate_limiter::RateLimiter;
use crate::sources::LiveSource;
use tradedir_domain::{
    enrich, merge_unique, BusinessRole, CompanyRecord, EnrichedCompany, HsCode, HsCodeError,
    Source,
};

pub const DEFAULT_LIMIT: usize = 15;

#[async_trait]
pub trait DirectoryAggregator: Interface {
    /// Runs fetch → parse → merge → truncate → enrich for one role.
    /// `limit` falls back to the configured default when `None`.
    async fn get_companies(
        &self,
        hs_code: &str,
        role: BusinessRole,
        limit: Option<usize>,
    ) -> Result<AggregateResult, AggregationError>;

    async fn get_exporters(
        &self,
        hs_code: &str,
        limit: Option<usize>,
    ) -> Result<DirectoryResponse, AggregationError> {
        self.get_companies(hs_code, BusinessRole::Exporter, limit)
            .await
            .map(DirectoryResponse::from)
    }

    async fn get_importers(
        &self,
        hs_code: &str,
        limit: Option<usize>,
    ) -> Result<DirectoryResponse, AggregationError> {
        self.get_companies(hs_code, BusinessRole::Importer, limit)
            .await
            .map(DirectoryResponse::from)
    }
}

#[derive(Component)]
#[shaku(interface = DirectoryAggregator)]
pub struct AggregatorImpl {
    #[shaku(inject)]
    fetcher: Arc<dyn SourceFetcher>,

    #[shaku(inject)]
    rate_limiter: Arc<dyn RateLimiter>,

    #[shaku(inject)]
    synthetic: Arc<dyn SyntheticGenerator>,

    #[shaku(inject)]
    clock: Arc<dyn Clock>,

    sources: Vec<LiveSource>,

    #[shaku(default = DEFAULT_LIMIT)]
    default_limit: usize,
}

impl AggregatorImpl {
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        rate_limiter: Arc<dyn RateLimiter>,
        synthetic: Arc<dyn SyntheticGenerator>,
        clock: Arc<dyn Clock>,
        sources: Vec<LiveSource>,
        default_limit: usize,
    ) -> Self {
        Self {
            fetcher,
            rate_limiter,
            synthetic,
            clock,
            sources,
            default_limit,
        }
    }

    async fn collect_live(
        &self,
        live: &LiveSource,
        hs_code: &HsCode,
        role: BusinessRole,
        request_id: Uuid,
    ) -> (Vec<CompanyRecord>, SourceOutcome) {
        if let Err(e) = self.rate_limiter.acquire().await {
            warn!(%request_id, "Skipping {}: rate limiter error: {}", live.source, e);
            return (Vec::new(), SourceOutcome::failed(live.source, e.to_string()));
        }

        let request = live.request_for(hs_code);
        let body = match self.fetcher.fetch(&request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%request_id, "Fetch failed, continuing without source: {}", e);
                return (Vec::new(), SourceOutcome::failed(live.source, e.to_string()));
            }
        };

        let context = ParseContext { hs_code, role };
        match live.parser.parse(&body, &context) {
            Ok(records) => {
                info!(
                    %request_id,
                    "{} returned {} {} candidates",
                    live.source,
                    records.len(),
                    role
                );
                let outcome = SourceOutcome::ok(live.source, records.len());
                (records, outcome)
            }
            Err(e) => {
                warn!(%request_id, "Parse failed, continuing without source: {}", e);
                (Vec::new(), SourceOutcome::failed(live.source, e.to_string()))
            }
        }
    }
}

#[async_trait]
impl DirectoryAggregator for AggregatorImpl {
    async fn get_companies(
        &self,
        hs_code: &str,
        role: BusinessRole,
        limit: Option<usize>,
    ) -> Result<AggregateResult, AggregationError> {
        let hs_code = HsCode::new(hs_code)?;
        let limit = limit.unwrap_or(self.default_limit);
        if limit == 0 {
            return Err(AggregationError::InvalidLimit(limit));
        }

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            "Aggregating {} for HS code {} (category: {}, limit: {})",
            role,
            hs_code,
            hs_code.category(),
            limit
        );

        let mut lists = Vec::with_capacity(self.sources.len() + 1);
        let mut outcomes = Vec::with_capacity(self.sources.len() + 1);

        for live in &self.sources {
            let (records, outcome) = self.collect_live(live, &hs_code, role, request_id).await;
            lists.push(records);
            outcomes.push(outcome);
        }

        let synthetic = self.synthetic.generate(&hs_code, role);
        outcomes.push(SourceOutcome::ok(Source::Synthetic, synthetic.len()));
        lists.push(synthetic);

        let mut merged = merge_unique(lists);
        if merged.is_empty() {
            error!(
                %request_id,
                "No {} records for HS code {} even after synthetic fallback",
                role,
                hs_code
            );
            return Err(AggregationError::NoDataFound { hs_code, role });
        }

        merged.truncate(limit);

        let now = self.clock.now();
        let source = source_label(&merged);
        let companies = enrich(merged, role, now);

        info!(
            %request_id,
            "Returning {} {} records from {}",
            companies.len(),
            role,
            source
        );

        Ok(AggregateResult {
            total: companies.len(),
            companies,
            hs_code,
            business_type: role,
            source,
            last_updated: now,
            request_id,
            outcomes,
        })
    }
}

/// Distinct contributing sources in the order they appear in the merged
/// list, which is priority order.
fn source_label(records: &[CompanyRecord]) -> String {
    let mut seen: Vec<Source> = Vec::new();
    for record in records {
        if !seen.contains(&record.source()) {
            seen.push(record.source());
        }
    }

    seen.iter()
        .map(Source::as_str)
        .collect::<Vec<_>>()
        .join(" + ")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total: usize,
    pub companies: Vec<EnrichedCompany>,
    pub hs_code: HsCode,
    pub business_type: BusinessRole,
    pub source: String,
    pub last_updated: DateTime<Utc>,
    #[serde(skip)]
    pub request_id: Uuid,
    #[serde(skip)]
    pub outcomes: Vec<SourceOutcome>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub data: AggregateResult,
    pub metadata: ResponseMetadata,
}

/// `real_data` and `no_fallback` are always true on success: the aggregated
/// list, live or synthetic, is the answer, and a failed call must not be
/// replaced with a default list by callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub source: String,
    pub real_data: bool,
    pub no_fallback: bool,
    pub timestamp: DateTime<Utc>,
    pub request_id: Uuid,
    pub sources: Vec<SourceOutcome>,
}

impl From<AggregateResult> for DirectoryResponse {
    fn from(mut data: AggregateResult) -> Self {
        let metadata = ResponseMetadata {
            source: data.source.clone(),
            real_data: true,
            no_fallback: true,
            timestamp: data.last_updated,
            request_id: data.request_id,
            sources: std::mem::take(&mut data.outcomes),
        };

        Self { data, metadata }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Ok,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOutcome {
    pub source: Source,
    pub status: OutcomeStatus,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceOutcome {
    pub fn ok(source: Source, records: usize) -> Self {
        Self {
            source,
            status: OutcomeStatus::Ok,
            records,
            error: None,
        }
    }

    pub fn failed(source: Source, error: String) -> Self {
        Self {
            source,
            status: OutcomeStatus::Failed,
            records: 0,
            error: Some(error),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("HS code is required: {0}")]
    MissingHsCode(#[from] HsCodeError),

    #[error("Limit must be at least 1, got {0}")]
    InvalidLimit(usize),

    #[error("No {role} data found for HS code {hs_code}")]
    NoDataFound { hs_code: HsCode, role: BusinessRole },
}

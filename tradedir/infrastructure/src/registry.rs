use std::sync::Arc;
use std::time::Duration;
use tradedir_application::LiveSource;
use tradedir_domain::Source;

use crate::parsers::{DgftParser, TradePortalParser};

pub const DGFT_URL: &str = "https://dgft.gov.in/CP/";
pub const TRADE_PORTAL_URL: &str =
    "https://www.indiantradeportal.in/vs.jsp?pid=1&txthscode={hs_code}";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(15_000);

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub user_agent: String,
    pub timeout: Duration,
    pub dgft_url: String,
    pub trade_portal_url: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            dgft_url: DGFT_URL.to_string(),
            trade_portal_url: TRADE_PORTAL_URL.to_string(),
        }
    }
}

/// Live directories in fetch priority order: DGFT first, then the trade
/// portal.
pub fn default_live_sources(settings: &SourceSettings) -> Vec<LiveSource> {
    vec![
        LiveSource {
            source: Source::Dgft,
            url_template: settings.dgft_url.clone(),
            headers: browser_headers(&settings.user_agent),
            timeout: settings.timeout,
            parser: Arc::new(DgftParser::default()),
        },
        LiveSource {
            source: Source::TradePortal,
            url_template: settings.trade_portal_url.clone(),
            headers: browser_headers(&settings.user_agent),
            timeout: settings.timeout,
            parser: Arc::new(TradePortalParser::default()),
        },
    ]
}

fn browser_headers(user_agent: &str) -> Vec<(String, String)> {
    vec![
        ("User-Agent".to_string(), user_agent.to_string()),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        ),
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
    ]
}

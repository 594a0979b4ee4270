use crate::ports::{FetchRequest, RecordParser};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tradedir_domain::{HsCode, Source};

pub const HS_CODE_PLACEHOLDER: &str = "{hs_code}";

/// One external directory: where to fetch it and how to read it.
#[derive(Clone)]
pub struct LiveSource {
    pub source: Source,
    pub url_template: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub parser: Arc<dyn RecordParser>,
}

impl LiveSource {
    pub fn request_for(&self, hs_code: &HsCode) -> FetchRequest {
        let encoded: String =
            url::form_urlencoded::byte_serialize(hs_code.as_str().as_bytes()).collect();

        FetchRequest {
            source: self.source,
            url: self.url_template.replace(HS_CODE_PLACEHOLDER, &encoded),
            headers: self.headers.clone(),
            timeout: self.timeout,
        }
    }
}

impl fmt::Debug for LiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveSource")
            .field("source", &self.source)
            .field("url_template", &self.url_template)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

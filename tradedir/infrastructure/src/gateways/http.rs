use async_trait::async_trait;
use shaku::Component;
use tracing::debug;
use tradedir_application::{FetchError, FetchRequest, SourceFetcher};

#[derive(Component)]
#[shaku(interface = SourceFetcher)]
pub struct HttpSourceFetcher {
    #[shaku(default = reqwest::Client::new())]
    client: reqwest::Client,
}

impl HttpSourceFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn map_send_error(request: &FetchRequest, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                origin: request.source,
                timeout_ms: request.timeout.as_millis() as u64,
            }
        } else {
            FetchError::Network {
                origin: request.source,
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String, FetchError> {
        debug!("Fetching {} from {}", request.source, request.url);

        let mut builder = self.client.get(&request.url).timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_send_error(request, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                origin: request.source,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                Self::map_send_error(request, e)
            } else {
                FetchError::Body {
                    origin: request.source,
                    reason: e.to_string(),
                }
            }
        })
    }
}

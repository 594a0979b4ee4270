use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tradedir_application::{FetchError, FetchRequest, SourceFetcher};
use tradedir_domain::Source;
use tradedir_infrastructure::HttpSourceFetcher;

#[tokio::test]
async fn returns_body_on_success_and_sends_headers() {
    let (url, received) = serve_once(http_response("200 OK", "<table></table>"), None).await;
    let fetcher = HttpSourceFetcher::new(reqwest::Client::new());

    let body = fetcher
        .fetch(&request(&url, Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(body, "<table></table>");
    let raw_request = received.await.unwrap().to_lowercase();
    assert!(raw_request.starts_with("get / http/1.1"));
    assert!(raw_request.contains("user-agent: test-agent/1.0"));
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let (url, _received) = serve_once(http_response("503 Service Unavailable", "down"), None).await;
    let fetcher = HttpSourceFetcher::new(reqwest::Client::new());

    let result = fetcher.fetch(&request(&url, Duration::from_secs(5))).await;

    match result {
        Err(FetchError::Status { origin, status }) => {
            assert_eq!(origin, Source::TradePortal);
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_source_times_out() {
    let (url, _received) = serve_once(
        http_response("200 OK", "late"),
        Some(Duration::from_secs(5)),
    )
    .await;
    let fetcher = HttpSourceFetcher::new(reqwest::Client::new());

    let result = fetcher
        .fetch(&request(&url, Duration::from_millis(200)))
        .await;

    match result {
        Err(err @ FetchError::Timeout { .. }) => {
            assert_eq!(err.origin(), Source::TradePortal);
            assert!(err.to_string().contains("200 ms"));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let fetcher = HttpSourceFetcher::new(reqwest::Client::new());

    let result = fetcher
        .fetch(&request(&format!("http://{addr}/"), Duration::from_secs(5)))
        .await;

    assert!(matches!(
        result,
        Err(FetchError::Network {
            origin: Source::TradePortal,
            ..
        })
    ));
}

fn request(url: &str, timeout: Duration) -> FetchRequest {
    FetchRequest {
        source: Source::TradePortal,
        url: url.to_string(),
        headers: vec![("User-Agent".to_string(), "test-agent/1.0".to_string())],
        timeout,
    }
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Accepts a single connection, hands back the raw request text and answers
/// with `response`, optionally after `delay`.
async fn serve_once(
    response: String,
    delay: Option<Duration>,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => raw.extend_from_slice(&buf[..n]),
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/"), rx)
}

//! Integration tests for the retrying fetcher over real HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bestiary_core::download::{FetchError, Fetcher, HttpClient, RetryPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

mod support;
use support::socket_guard::start_mock_server_or_skip;

macro_rules! require_mock_server {
    () => {{
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };
        mock_server
    }};
}

/// Stalls the first `slow` requests past the client timeout, then answers.
struct SlowThenFast {
    slow: usize,
    calls: Arc<AtomicUsize>,
}

impl Respond for SlowThenFast {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.slow {
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(2))
        } else {
            ResponseTemplate::new(200).set_body_string("on time")
        }
    }
}

fn short_timeout_client() -> HttpClient {
    HttpClient::with_timeout_durations(Duration::from_secs(1), Duration::from_millis(200))
        .unwrap()
}

#[tokio::test]
async fn test_timeouts_are_retried_until_success() {
    let mock_server = require_mock_server!();
    let calls = Arc::new(AtomicUsize::new(0));
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(SlowThenFast {
            slow: 2,
            calls: Arc::clone(&calls),
        })
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::http(
        short_timeout_client(),
        RetryPolicy::new(5, Duration::from_millis(10)),
    );
    let body = fetcher
        .fetch(&format!("{}/slow", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, b"on time");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_timeout_returned_after_retries_exhausted() {
    let mock_server = require_mock_server!();
    let calls = Arc::new(AtomicUsize::new(0));
    Mock::given(method("GET"))
        .respond_with(SlowThenFast {
            slow: usize::MAX,
            calls: Arc::clone(&calls),
        })
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::http(
        short_timeout_client(),
        RetryPolicy::new(2, Duration::from_millis(10)),
    );
    let url = format!("{}/never", mock_server.uri());
    let err = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }));
    assert_eq!(err.url(), url);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_http_error_status_is_not_retried() {
    let mock_server = require_mock_server!();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
    let err = fetcher
        .fetch(&format!("{}/down", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_redirect_loop_is_bad_url() {
    let mock_server = require_mock_server!();
    let target = format!("{}/loop", mock_server.uri());
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", target.as_str()))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
    let err = fetcher.fetch(&target).await.unwrap_err();

    assert!(matches!(err, FetchError::BadUrl { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind and drop a listener to get a port nothing is serving.
    let port = {
        let Ok(listener) = std::net::TcpListener::bind("127.0.0.1:0") else {
            return;
        };
        listener.local_addr().unwrap().port()
    };

    let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
    let err = fetcher
        .fetch(&format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network { .. }));
}

//! `/ping` latency probe against a mock origin.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use cachexiv::config::DEFAULT_USER_AGENT;

mod common;

fn parse_latency<'a>(body: &'a str, url: &str) -> Option<&'a str> {
    body.strip_prefix(&format!("Latency to {url}: "))?
        .strip_suffix(" ms")
}

#[tokio::test]
async fn test_ping_reports_latency() {
    let seen = Arc::new(Mutex::new(None));
    let recorder = seen.clone();
    let origin = common::start_programmable_origin(move |req| {
        let recorder = recorder.clone();
        async move {
            *recorder.lock().unwrap() = Some(req);
            tokio::time::sleep(Duration::from_millis(50)).await;
            (200, b"<html>arXiv</html>".to_vec())
        }
    })
    .await;
    let (proxy, _shutdown) = common::spawn_proxy(common::config_for(origin)).await;

    let res = common::client()
        .get(format!("http://{proxy}/ping"))
        .header("accept-language", "en-GB")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/plain");
    let body = res.text().await.unwrap();
    let ms = parse_latency(&body, &format!("http://{origin}/"))
        .unwrap_or_else(|| panic!("unexpected body: {body}"));
    let ms: u64 = ms.parse().expect("latency should be a non-negative integer");
    assert!(ms >= 50, "latency {ms} shorter than origin delay");

    let req = seen.lock().unwrap().clone().expect("origin was not called");
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/");
    assert_eq!(req.header("user-agent"), Some(DEFAULT_USER_AGENT));
    assert_eq!(req.header("accept-language"), None);
}

#[tokio::test]
async fn test_ping_reports_non_success_as_latency() {
    let origin = common::start_mock_origin(503, b"").await;
    let (proxy, _shutdown) = common::spawn_proxy(common::config_for(origin)).await;

    let res = common::client().get(format!("http://{proxy}/ping")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(parse_latency(&body, &format!("http://{origin}/")).is_some());
}

#[tokio::test]
async fn test_ping_transport_failure() {
    let origin = common::closed_port().await;
    let (proxy, _shutdown) = common::spawn_proxy(common::config_for(origin)).await;

    let res = common::client().get(format!("http://{proxy}/ping")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.text().await.unwrap().starts_with("Error: "));
}

//! End-to-end test: serve the mock endpoint, then drive it with the real
//! HTTP client and the poll loop.

use std::time::Duration;

use vigil_client::{JobPoller, PollError, PollOutcome, PollRequest, StatusClient};
use vigil_server::api::create_router;

/// Serves the router on an ephemeral port and returns the base URL
async fn serve_router() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("test server failed");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_status_endpoint_pairs_code_and_payload() {
    let base = serve_router().await;

    for _ in 0..10 {
        let response = reqwest::get(format!("{}/status", base)).await.unwrap();
        let code = response.status().as_u16();
        let body: serde_json::Value = response.json().await.unwrap();

        match body["status"].as_str().unwrap() {
            "completed" => assert_eq!(code, 200),
            "pending" => assert_eq!(code, 202),
            "error" => assert_eq!(code, 500),
            other => panic!("unexpected status {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_health_endpoint_responds() {
    let base = serve_router().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_transport_parses_live_responses() {
    let base = serve_router().await;
    let request = PollRequest::new(&format!("{}/status", base), 1, Duration::from_millis(20))
        .unwrap();
    let client = StatusClient::new();

    // The endpoint is random: success statuses parse into payloads, the
    // error status surfaces as a transport-level 500.
    for _ in 0..10 {
        match client.get_status(request.url()).await {
            Ok(payload) => assert!(matches!(payload.status.as_str(), "completed" | "pending")),
            Err(err) => assert!(err.is_server_error(), "unexpected transport error: {}", err),
        }
    }
}

#[tokio::test]
async fn test_poll_against_live_endpoint_reaches_a_terminal_state() {
    let base = serve_router().await;
    let request = PollRequest::new(&format!("{}/status", base), 10, Duration::from_millis(20))
        .unwrap();
    let poller = JobPoller::new();

    match poller.poll_until_complete(&request).await {
        Ok(PollOutcome::Completed(payload)) => assert_eq!(payload.status, "completed"),
        // This server never sends "error" inside a 2xx, so Errored is
        // unreachable here, but it is a legal poll outcome.
        Ok(PollOutcome::Errored(payload)) => assert_eq!(payload.status, "error"),
        Ok(PollOutcome::Exhausted { attempts }) => assert_eq!(attempts, 10),
        Err(PollError::Transport { source, .. }) => {
            assert!(source.is_server_error(), "unexpected transport error: {}", source)
        }
        Err(other) => panic!("unexpected poll error: {}", other),
    }
}

//! Vigil HTTP Client
//!
//! A small, type-safe client for polling asynchronous job status endpoints.
//!
//! This crate provides two layers:
//! - [`StatusClient`]: a thin HTTP transport over reqwest with generic
//!   JSON verb helpers
//! - [`JobPoller`]: the bounded poll loop that repeatedly checks a status
//!   URL until the job completes, fails, or the attempt budget runs out
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vigil_client::poll_until_complete;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vigil_client::PollError> {
//!     let outcome = poll_until_complete(
//!         "http://localhost:3000/status",
//!         15,
//!         Duration::from_secs(5),
//!     )
//!     .await?;
//!
//!     println!("final outcome: {:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod error;
mod observer;
mod poller;
mod source;

// Re-export commonly used types
pub use error::{ClientError, PollError, Result};
pub use observer::{PollObserver, TracingObserver};
pub use poller::{JobPoller, poll_until_complete};
pub use source::StatusSource;
pub use vigil_core::{PollOutcome, PollRequest, StatusPayload};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP transport for status endpoints
///
/// A reusable JSON client with GET/POST/PUT/DELETE helpers, all funneled
/// through one response handler. The poller consumes exactly one of its
/// capabilities: fetch a URL and hand back a parsed [`StatusPayload`] or a
/// transport error.
#[derive(Debug, Clone, Default)]
pub struct StatusClient {
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a status client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use vigil_client::StatusClient;
    ///
    /// let http_client = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StatusClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Perform one status check against `url`
    ///
    /// Non-success HTTP statuses are surfaced as
    /// [`ClientError::ApiError`] without inspecting the body for a status
    /// field; only 2xx responses are parsed into a payload.
    pub async fn get_status(&self, url: &Url) -> Result<StatusPayload> {
        self.get(url.as_str()).await
    }

    /// Make a GET request and parse the JSON response
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body and parse the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.client.post(url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Make a PUT request with a JSON body and parse the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.client.put(url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Make a DELETE request, expecting no response body
    pub async fn delete(&self, url: &str) -> Result<()> {
        let response = self.client.delete(url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Handle a response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("failed to parse JSON response: {}", e)))
    }

    /// Handle a response that carries no body of interest
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_status_server(status_code: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn status_url(server: &MockServer) -> Url {
        Url::parse(&format!("{}/status", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_status_parses_payload() {
        let server =
            mock_status_server(200, serde_json::json!({"status": "completed"})).await;

        let payload = StatusClient::new()
            .get_status(&status_url(&server))
            .await
            .unwrap();

        assert_eq!(payload.status, "completed");
        assert!(payload.extra.is_empty());
    }

    #[tokio::test]
    async fn test_get_status_keeps_extra_fields() {
        let server = mock_status_server(
            200,
            serde_json::json!({"status": "pending", "job_id": "j-42", "progress": 40}),
        )
        .await;

        let payload = StatusClient::new()
            .get_status(&status_url(&server))
            .await
            .unwrap();

        assert_eq!(payload.status, "pending");
        assert_eq!(payload.extra["job_id"], "j-42");
        assert_eq!(payload.extra["progress"], 40);
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_api_error() {
        let server = mock_status_server(500, serde_json::json!({"status": "error"})).await;

        let err = StatusClient::new()
            .get_status(&status_url(&server))
            .await
            .unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("error"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
        assert!(
            StatusClient::new()
                .get_status(&status_url(&server))
                .await
                .unwrap_err()
                .is_server_error()
        );
    }

    #[tokio::test]
    async fn test_malformed_body_surfaces_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = StatusClient::new()
            .get_status(&status_url(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_request_failure() {
        // Port 1 is never listening; the connection is refused.
        let url = Url::parse("http://127.0.0.1:1/status").unwrap();

        let err = StatusClient::new().get_status(&url).await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/jobs"))
            .and(wiremock::matchers::body_json(
                serde_json::json!({"name": "nightly-build"}),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "pending", "job_id": "j-7"})),
            )
            .mount(&server)
            .await;

        let payload: StatusPayload = StatusClient::new()
            .post(
                &format!("{}/jobs", server.uri()),
                &serde_json::json!({"name": "nightly-build"}),
            )
            .await
            .unwrap();

        assert_eq!(payload.status, "pending");
        assert_eq!(payload.extra["job_id"], "j-7");
    }

    #[tokio::test]
    async fn test_delete_checks_status_only() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/jobs/j-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = StatusClient::new();
        client
            .delete(&format!("{}/jobs/j-1", server.uri()))
            .await
            .unwrap();

        let err = client
            .delete(&format!("{}/jobs/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    }
}

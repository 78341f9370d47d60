//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Clones share their configured responses and request log, so a test can
/// keep one handle while the app owns another.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://example.com/posts/1",
///     MockResponse::Success(Response::new(200, "{}")),
/// );
/// let response = client.get("https://example.com/posts/1", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL (exact match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/a",
            MockResponse::Success(Response::new(200, "ok")),
        );

        let response = client.get("https://example.com/a", &Headers::new()).await.unwrap();
        assert_eq!(response.text_lossy(), "ok");

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://example.com/a");
        assert!(requests[0].headers.is_empty());
    }

    #[tokio::test]
    async fn test_mock_default_and_missing() {
        let client = MockHttpClient::new();
        let err = client.get("https://example.com/x", &Headers::new()).await.unwrap_err();
        assert!(matches!(err, HttpError::Other(_)));

        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "down".to_string(),
        )));
        let err = client.get("https://example.com/x", &Headers::new()).await.unwrap_err();
        assert_eq!(err, HttpError::ConnectionFailed("down".to_string()));
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let client = MockHttpClient::new();
        let handle = client.clone();
        handle.set_default_response(MockResponse::Success(Response::new(204, "")));

        client.get("https://example.com/y", &Headers::new()).await.unwrap();
        assert_eq!(handle.get_requests().len(), 1);
    }
}

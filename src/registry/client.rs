//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional exponential backoff retry (disabled by default)
//! - Any non-success status mapped to "not found" rather than an error

use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("updatable/", env!("CARGO_PKG_VERSION"));

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            max_retries: 0,
        })
    }

    /// Create a client with a custom timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Set the maximum number of retries for transport failures
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request, returning `None` for any non-success status
    pub async fn get(
        &self,
        url: &str,
        package: &str,
    ) -> Result<Option<reqwest::Response>, RegistryError> {
        let mut delay = BASE_DELAY_MS;
        let mut attempt = 0;

        loop {
            debug!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::NOT_FOUND {
                        debug!(url, "not found");
                        return Ok(None);
                    }

                    if !status.is_success() {
                        warn!(url, package, %status, "registry answered without a document");
                        return Ok(None);
                    }

                    return Ok(Some(response));
                }
                Err(e) => {
                    let error = if e.is_timeout() {
                        RegistryError::timeout(package)
                    } else {
                        RegistryError::unavailable(package, e.to_string())
                    };

                    if attempt >= self.max_retries {
                        return Err(error);
                    }

                    warn!(url, attempt, error = %error, "retrying registry request");
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                    attempt += 1;
                }
            }
        }
    }

    /// Perform a GET request and parse the JSON body, returning `None` when
    /// the registry has no document
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
    ) -> Result<Option<T>, RegistryError> {
        let Some(response) = self.get(url, package).await? else {
            return Ok(None);
        };

        response.json::<T>().await.map(Some).map_err(|e| {
            RegistryError::invalid_response(package, format!("failed to parse JSON: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_does_not_retry_by_default() {
        let client = HttpClient::new().unwrap();
        assert_eq!(client.max_retries, 0);
        assert_eq!(client.with_max_retries(5).max_retries, 5);
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert!(DEFAULT_USER_AGENT.starts_with("updatable/"));
        assert_eq!(BASE_DELAY_MS, 100);
    }

    #[tokio::test]
    async fn test_get_json_not_found_is_none() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing/json")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/missing/json", server.url());
        let result: Option<Value> = client.get_json(&url, "missing").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_json_server_error_is_none() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/broken/json")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/broken/json", server.url());
        let result: Option<Value> = client.get_json(&url, "broken").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_non_success_statuses_are_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/gone/json")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap().with_max_retries(3);
        let url = format!("{}/gone/json", server.url());
        let result = client.get(&url, "gone").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/garbage/json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/garbage/json", server.url());
        let result = client.get_json::<Value>(&url, "garbage").await;

        match result {
            Err(RegistryError::InvalidResponse { message, .. }) => {
                assert!(message.contains("failed to parse JSON"))
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_get_connection_refused_is_unavailable() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let result = client.get("http://127.0.0.1:9/pkg/json", "pkg").await;

        assert!(matches!(
            result,
            Err(RegistryError::Unavailable { .. }) | Err(RegistryError::Timeout { .. })
        ));
    }
}

// src/integrations/subtypes/client.rs
//
// Subtype Endpoint Integration
//
// ARCHITECTURE:
// - HTTP client for the resource-subtype endpoint
// - Issues one GET per fetch, `q=<resource type>` as the only parameter
// - Maps external data → opaque payload (NO domain mutation)
// - Used by ResourceFormService
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches control state
// - All transport outcomes fold into the single Fetch error kind

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{ResourceType, SubtypePayload};
use crate::error::{AppError, AppResult};
use crate::integrations::subtypes::SubtypeFetcher;

/// Fetcher configuration.
///
/// The endpoint URL is resolved by the host (the original form templates it
/// into the page at render time); it is opaque to this client.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub endpoint_url: String,
    pub timeout_secs: u64,
}

impl FetcherConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout_secs: 30,
        }
    }
}

/// HTTP implementation of the subtype fetch.
pub struct HttpSubtypeFetcher {
    endpoint_url: String,
    http_client: Client,
}

impl HttpSubtypeFetcher {
    pub fn new(config: FetcherConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint_url: config.endpoint_url,
            http_client,
        })
    }

    /// Build the outbound request: GET <endpoint>?q=<token>.
    /// The token goes out verbatim; no transformation, no trimming.
    fn build_request(&self, resource_type: &ResourceType) -> AppResult<reqwest::Request> {
        self.http_client
            .get(&self.endpoint_url)
            .query(&[("q", resource_type.as_str())])
            .build()
            .map_err(|e| AppError::Other(format!("Failed to build subtype request: {}", e)))
    }
}

#[async_trait]
impl SubtypeFetcher for HttpSubtypeFetcher {
    async fn fetch_options(&self, resource_type: &ResourceType) -> AppResult<SubtypePayload> {
        let request = self.build_request(resource_type)?;

        let response = self.http_client.execute(request).await.map_err(|e| {
            let status = if e.is_timeout() { "timeout" } else { "error" };
            AppError::fetch(status, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                status.to_string(),
                "non-success status from subtype endpoint",
            ));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::fetch("parsererror", e.to_string()))?;

        Ok(SubtypePayload::new(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://forms.example.test/ajax/resource-subtypes/";

    #[test]
    fn test_fetcher_creation() {
        let fetcher = HttpSubtypeFetcher::new(FetcherConfig::new(ENDPOINT)).unwrap();
        assert_eq!(fetcher.endpoint_url, ENDPOINT);
    }

    #[test]
    fn test_config_default_timeout() {
        let config = FetcherConfig::new(ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_request_carries_q_parameter() {
        let fetcher = HttpSubtypeFetcher::new(FetcherConfig::new(ENDPOINT)).unwrap();

        let request = fetcher
            .build_request(&ResourceType::from_raw("doc"))
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().query(), Some("q=doc"));
        assert!(request.url().as_str().starts_with(ENDPOINT));
    }

    #[test]
    fn test_request_token_is_verbatim() {
        let fetcher = HttpSubtypeFetcher::new(FetcherConfig::new(ENDPOINT)).unwrap();

        let request = fetcher.build_request(&ResourceType::from_raw("obs")).unwrap();
        assert_eq!(request.url().query(), Some("q=obs"));

        // Empty token still produces the parameter, untouched.
        let request = fetcher.build_request(&ResourceType::from_raw("")).unwrap();
        assert_eq!(request.url().query(), Some("q="));
    }

    // Note: Wire-level success/failure behavior is covered through the
    // SubtypeFetcher seam in the service tests.
}

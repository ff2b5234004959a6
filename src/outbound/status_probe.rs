use crate::domain::health::ServiceStatus;
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;

/// Performs the single health check the site footer runs on page load.
#[derive(Debug, Clone)]
pub struct StatusProbe {
    http_client: Client,
    base_url: String,
}

impl StatusProbe {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the status probe HTTP client")?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    #[tracing::instrument(name = "Probe service health", skip(self), fields(base_url = %self.base_url))]
    pub async fn check(&self) -> ServiceStatus {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        match self.http_client.get(&url).send().await {
            Ok(response) => ServiceStatus::from_status_code(response.status().as_u16()),
            Err(e) => {
                tracing::warn!(error = %e, "Health check request failed");
                ServiceStatus::Offline
            }
        }
    }
}

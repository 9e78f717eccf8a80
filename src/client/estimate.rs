//! Client for the remote cost-calculation API.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, error, instrument};
use url::Url;
use uuid::Uuid;

use super::X_REQUEST_ID;
use crate::domain::estimate::RawEstimate;
use crate::domain::request::EstimateRequest;
use crate::error::{ClientError, ClientResult};

#[derive(Clone)]
pub struct EstimateClient {
    client: Client,
    endpoint: Url,
}

impl EstimateClient {
    pub fn new(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).context("Invalid estimate API URL")?;

        tracing::info!(endpoint = %endpoint, "Estimate client initialized");

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the project description and read back the estimate.
    ///
    /// A non-success status is an error even when the body is JSON; the
    /// API's own `error` text is kept for the log.
    #[instrument(skip(self, request), fields(request_id))]
    pub async fn calculate(&self, request: &EstimateRequest) -> ClientResult<RawEstimate> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        debug!(url = %self.endpoint, area = request.area, floors = request.floors, "Estimate request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_REQUEST_ID, &request_id)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Estimate API request failed");
                ClientError::Network(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<RawEstimate>(&body).map_err(|e| {
                error!(error = %e, "Failed to parse estimate response");
                ClientError::Decode(e)
            })
        } else {
            let message = serde_json::from_slice::<RawEstimate>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| format!("Estimate service error: {}", status));

            error!(status = %status, message = %message, "Estimate API error");
            Err(ClientError::Status { status, message })
        }
    }
}

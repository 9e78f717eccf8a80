//! HTTP clients for the services the page talks to.
//!
//! Contains the estimate API client and the same-origin login client. Both
//! share one `reqwest::Client` so the session cookie set on login is sent
//! on later requests.

pub mod auth;
pub mod estimate;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

pub use auth::AuthClient;
pub use estimate::EstimateClient;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Build the shared HTTP client.
pub fn build_http_client(timeout_seconds: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .cookie_store(true)
        .user_agent(concat!("buildwise-client/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

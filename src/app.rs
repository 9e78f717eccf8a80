use std::sync::Arc;

use crate::client::{build_http_client, AuthClient, EstimateClient};
use crate::config::Settings;
use crate::host::Host;
use crate::report::PdfRenderer;
use crate::ui::page::{Page, SharedPage};

/// Shared application state
pub struct AppState {
    pub page: SharedPage,
    pub settings: Settings,
    pub host: Arc<dyn Host>,
    pub estimate_client: EstimateClient,
    pub auth_client: AuthClient,
    pub pdf: Arc<dyn PdfRenderer>,
}

impl AppState {
    /// State over a freshly served BuildWise page.
    pub fn new(
        settings: Settings,
        host: Arc<dyn Host>,
        pdf: Arc<dyn PdfRenderer>,
    ) -> anyhow::Result<Arc<Self>> {
        Self::with_page(Page::buildwise(), settings, host, pdf)
    }

    pub fn with_page(
        page: Page,
        settings: Settings,
        host: Arc<dyn Host>,
        pdf: Arc<dyn PdfRenderer>,
    ) -> anyhow::Result<Arc<Self>> {
        // One client for both services so the login cookie is shared
        let http_client = build_http_client(settings.http_timeout_seconds)?;
        let estimate_client = EstimateClient::new(http_client.clone(), &settings.estimate_api_url)?;
        let auth_client = AuthClient::new(http_client, &settings.auth_base_url)?;

        Ok(Arc::new(Self {
            page: page.into_shared(),
            settings,
            host,
            estimate_client,
            auth_client,
            pdf,
        }))
    }
}

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use buildwise_client::cli::{self, Cli};
use buildwise_client::config::Settings;
use buildwise_client::host::ConsoleHost;
use buildwise_client::logging;
use buildwise_client::report::CommandPdfRenderer;
use buildwise_client::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        estimate_api = %settings.estimate_api_url,
        "Starting BuildWise client"
    );

    let pdf = Arc::new(CommandPdfRenderer::from_settings(&settings));
    let state = AppState::new(settings, Arc::new(ConsoleHost), pdf)?;

    cli::run(cli, &state).await
}

//! Service entry point.

use craft_quote::api::rest::{create_router, AppState};
use craft_quote::domain::catalog::Catalog;
use craft_quote::infrastructure::gateway::{InMemoryGateway, SmtpGateway, SubmissionGateway};
use craft_quote::infrastructure::{catalog_file, Settings};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables from .env take effect before settings load.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;

    let catalog = match &settings.catalog_path {
        Some(path) => Arc::new(catalog_file::load_catalog(path)?),
        None => {
            info!("no catalog path configured, using built-in catalog");
            Arc::new(Catalog::standard()?)
        }
    };

    let gateway: Arc<dyn SubmissionGateway> = match &settings.smtp {
        Some(smtp) => Arc::new(SmtpGateway::new(smtp)?),
        None => {
            warn!("smtp not configured, submissions are recorded in memory only");
            Arc::new(InMemoryGateway::new())
        }
    };

    let state = AppState {
        catalog,
        gateway,
        engine_config: settings.engine,
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "quote service listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;

use roster_api::app::{self, services};
use roster_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = Arc::new(services::build_services(&config));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use anyhow::Context;

use rodentia_catalog::Catalog;
use rodentia_site::config::SiteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env().context("invalid configuration")?;
    rodentia_observability::init(config.log_format);

    let catalog = Catalog::seed().context("seed catalog is invalid")?;
    let app = rodentia_site::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use anyhow::Context;
use majestea_site::{DataProvider, RefreshDaemon, ReqwestTransport, SiteApi, SiteConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SiteConfig::from_env()?;
    if config.backend_url.is_empty() {
        warn!("MAJESTEA_BACKEND_URL is not set; serving bundled content only");
    }

    let api = SiteApi::new(&config.backend_url, ReqwestTransport::new());
    match api.check_health().await {
        Ok(status) => info!(%status, "backend health"),
        Err(_) => warn!("backend unreachable; fallback content stays in place"),
    }

    let provider = DataProvider::new(api);
    provider.init().await;

    let snapshot = provider.snapshot().await;
    if let Some(error) = &snapshot.error {
        warn!(%error, "some content is served from fallback");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("failed to serialize content snapshot")?
    );

    let Some(period) = config.refresh_period else {
        return Ok(());
    };

    let daemon = RefreshDaemon::start(provider.clone(), period);
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    info!("shutting down");
    daemon.shutdown().await.context("refresh daemon failed")?;
    Ok(())
}

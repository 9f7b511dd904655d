use std::sync::Arc;

use saju::api::router;
use saju::config::config;
use saju::provider::FortuneProvider;
use saju::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let conf = config();
    tracing::info!(port = conf.port, "Starting Saju Fortune API");

    if conf.provider_api_key.is_none() {
        tracing::info!("No provider API key configured, all fortunes use the local composer");
    }

    let state = AppState {
        provider: Arc::new(FortuneProvider::from_config(conf)?),
    };

    let app = router(state);
    let addr = format!("0.0.0.0:{}", conf.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server bound");

    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Result;
use sort_server::{
    application::service::SortService,
    config::get_config,
    infrastructure::{http, sorter::ThreadSorter},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse()?)
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = get_config()?;
    setup_tracing(&config.logging.level)?;
    tracing::info!("Configuration loaded successfully");
    tracing::debug!(?config, "Full application configuration");

    let service = SortService::new(ThreadSorter);

    if let Err(e) = http::serve(config.server.socket_addr(), service).await {
        tracing::error!("Server stopped with an error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
